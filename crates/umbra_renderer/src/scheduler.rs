//! Parallel tile scheduler.
//!
//! A fixed pool of workers drains a shared queue of tiles. Each worker
//! claims one tile at a time and renders it completely, straight into the
//! tile's own region of the frame buffer, with its own random stream. The
//! calling thread reports progress until every worker has returned.

use std::collections::VecDeque;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use umbra_core::{FrameBuffer, Scene};

use crate::error::{RenderError, RenderResult};
use crate::progress::{format_duration, Progress, ProgressReport};
use crate::tile::{render_tile, split_frame, TileJob};
use crate::{Camera, RenderConfig};

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    /// Number of tiles rendered
    pub tiles: usize,
    /// Number of worker threads used
    pub threads: usize,
    /// Wall-clock render time
    pub elapsed: Duration,
}

/// Render `scene` into `frame`, logging progress.
///
/// Blocks until every pixel of `frame` has been written.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    frame: &mut FrameBuffer,
    config: &RenderConfig,
) -> RenderResult<RenderStats> {
    render_with_progress(scene, camera, frame, config, |report| {
        log::info!("{report}");
    })
}

/// Render `scene` into `frame`, calling `on_progress` every
/// `config.progress_interval_ms` and once more when the render completes.
///
/// Configuration errors are reported before any worker starts. A panic in a
/// worker is not recovered: it propagates out of this call.
pub fn render_with_progress<F>(
    scene: &Scene,
    camera: &Camera,
    frame: &mut FrameBuffer,
    config: &RenderConfig,
    on_progress: F,
) -> RenderResult<RenderStats>
where
    F: FnMut(&ProgressReport),
{
    config.validate()?;
    camera.validate()?;
    if frame.is_empty() {
        return Err(RenderError::EmptyBuffer);
    }

    let image_size = (frame.width(), frame.height());
    log::info!(
        "Rendering {}x{} @ {} spp, {} bounces",
        image_size.0,
        image_size.1,
        config.samples_per_pixel,
        config.max_bounces
    );

    run_tiles(
        frame,
        config,
        |job, rng| render_tile(job, scene, camera, image_size, config, rng),
        on_progress,
    )
}

/// Split `frame` into tiles and run `render_job` on each of them from a
/// pool of `config.threads` workers.
fn run_tiles<R, F>(
    frame: &mut FrameBuffer,
    config: &RenderConfig,
    render_job: R,
    mut on_progress: F,
) -> RenderResult<RenderStats>
where
    R: Fn(&mut TileJob<'_>, &mut StdRng) + Sync,
    F: FnMut(&ProgressReport),
{
    let jobs = split_frame(frame, config.tile_size, config.tile_order);
    let tile_count = jobs.len();
    // No point spawning workers that would find the queue empty
    let threads = config.threads.min(tile_count).max(1);
    log::info!("{tile_count} tiles on {threads} threads");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("umbra-worker-{i}"))
        .build()?;

    let queue = Mutex::new(VecDeque::from(jobs));
    let progress = Progress::new(tile_count);
    let interval = Duration::from_millis(config.progress_interval_ms);
    // Nothing is ever sent: the channel disconnects once every worker has
    // returned or unwound
    let (alive, workers_done) = mpsc::channel::<()>();

    pool.in_place_scope(|scope| {
        for worker in 0..threads {
            let alive = alive.clone();
            let (queue, progress, render_job) = (&queue, &progress, &render_job);
            scope.spawn(move |_| {
                let _alive = alive;
                let mut rng = worker_rng(config.seed, worker);
                while let Some(mut job) = claim_tile(queue) {
                    render_job(&mut job, &mut rng);
                    let done = progress.tile_done();
                    log::debug!(
                        "Worker {worker} finished tile {} ({done}/{})",
                        job.tile.index,
                        progress.total()
                    );
                }
            });
        }
        drop(alive);

        while let Err(RecvTimeoutError::Timeout) = workers_done.recv_timeout(interval) {
            on_progress(&progress.report(queue_depth(&queue)));
        }
    });

    let report = progress.report(queue_depth(&queue));
    on_progress(&report);
    log::info!("Rendered in {}", format_duration(report.elapsed));

    Ok(RenderStats {
        tiles: tile_count,
        threads,
        elapsed: report.elapsed,
    })
}

/// Pop the next pending tile. The lock is held only for the pop.
fn claim_tile<'a>(queue: &Mutex<VecDeque<TileJob<'a>>>) -> Option<TileJob<'a>> {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .pop_front()
}

fn queue_depth<T>(queue: &Mutex<VecDeque<T>>) -> usize {
    queue.lock().unwrap_or_else(PoisonError::into_inner).len()
}

/// Independent random stream for one worker.
fn worker_rng(seed: Option<u64>, worker: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
        None => StdRng::from_entropy(),
    }
}
