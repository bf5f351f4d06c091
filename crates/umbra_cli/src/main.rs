mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use umbra_core::{showcase_scene, FrameBuffer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config = args.render_config()?;
    let camera = args.camera();
    let scene = showcase_scene(args.balls, args.scene_seed).context("Failed to build scene")?;

    let (width, height) = (args.size.width, args.size.height);
    let pixels = width as u64 * height as u64 * config.samples_per_pixel as u64;
    log::info!("Camera rays: {pixels}");
    log::info!("Maximum path segments: {}", pixels * config.max_bounces as u64);

    let mut frame = FrameBuffer::new(width, height);
    let stats = umbra_renderer::render(&scene, &camera, &mut frame, &config)?;
    log::info!(
        "Rendered {} tiles on {} threads in {:.2?}",
        stats.tiles,
        stats.threads,
        stats.elapsed
    );

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    frame
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
