use anyhow::{Context, Result};
use clap::Parser;
use spider_core::load_scene;
use spider_renderer::{CameraInput, Framebuffer, RenderConfig, Scene};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let description = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let config = RenderConfig {
        max_bounces: args.bounces,
        eye: args.eye.into(),
        ..RenderConfig::default()
    };
    let mut scene = Scene::from_description(&description, args.width, args.height, config)
        .context("Failed to build scene")?;

    for movement in &args.moves {
        scene
            .camera
            .apply_input(CameraInput::Move((*movement).into(), args.step));
    }
    if !args.moves.is_empty() {
        log::info!("Camera moved to {:?}", scene.camera.position);
    }

    let mut framebuffer = Framebuffer::new(args.width, args.height);
    scene.render(&mut framebuffer);

    framebuffer
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
