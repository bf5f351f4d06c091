//! Render progress tracking.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Completion counter shared between workers and the monitor.
#[derive(Debug)]
pub struct Progress {
    total: usize,
    completed: AtomicUsize,
    started: Instant,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: AtomicUsize::new(0),
            started: Instant::now(),
        }
    }

    /// Record a finished tile, returning the new completed count.
    pub fn tile_done(&self) -> usize {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Snapshot of the current state. `pending` is the queue depth.
    pub fn report(&self, pending: usize) -> ProgressReport {
        ProgressReport {
            completed: self.completed().min(self.total),
            total: self.total,
            pending,
            elapsed: self.started.elapsed(),
        }
    }
}

/// A point-in-time view of render progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReport {
    /// Tiles fully rendered
    pub completed: usize,
    /// Tiles in the whole image
    pub total: usize,
    /// Tiles not yet claimed by a worker
    pub pending: usize,
    /// Time since the render started
    pub elapsed: Duration,
}

impl ProgressReport {
    /// Completion in percent, 100 for an empty render.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    /// Linear estimate of the time left; unknown until a tile finishes.
    pub fn remaining(&self) -> Option<Duration> {
        if self.completed == 0 {
            return None;
        }
        let left = self.total.saturating_sub(self.completed) as f64;
        Some(self.elapsed.mul_f64(left / self.completed as f64))
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Completion: {:.0}% ({}/{} tiles, {} queued) Elapsed: {}",
            self.percent(),
            self.completed,
            self.total,
            self.pending,
            format_duration(self.elapsed)
        )?;
        match self.remaining() {
            Some(remaining) => write!(f, " Remaining: {}", format_duration(remaining)),
            None => write!(f, " Remaining: unknown"),
        }
    }
}

/// Format whole seconds as `"1min 5s"` or `"42s"`.
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    if minutes > 0 {
        format!("{minutes}min {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
