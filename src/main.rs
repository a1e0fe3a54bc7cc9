use anyhow::{Context, Result};
use clap::Parser;
use std::cell::Cell;
use std::rc::Rc;

use map_camera::cli::Cli;
use map_camera::session::{demo_terrain, replay, Session, DEMO_TILE_SIZE};
use map_camera::{Config, MapControls};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load camera config {}", path.display()))?,
        None => Config::default(),
    };

    let session = match &cli.script {
        Some(path) => Session::load(path)?,
        None => Session::demo(),
    };

    let mut controls = MapControls::new(config).context("invalid camera config")?;
    controls.set_viewport_height(cli.viewport_height);
    if config.terrain.tile_size.is_none() {
        controls.set_tile_size(DEMO_TILE_SIZE);
    }

    let clicks = Rc::new(Cell::new(0usize));
    let click_count = Rc::clone(&clicks);
    controls.on_info_click(move |click| {
        click_count.set(click_count.get() + 1);
        log::info!("info click at ({:.0}, {:.0})", click.position.x, click.position.y);
    });

    let mut scene = demo_terrain();

    if !cli.quiet {
        println!(
            "Map camera - replaying {} scripted frames over {} terrain tiles",
            session.frames().len(),
            scene.tiles().len()
        );
    }

    let quiet = cli.quiet;
    let summary = replay(&mut controls, &mut scene, &session, cli.frames, |frame, controls, changed| {
        if changed && !quiet {
            let position = controls.camera_position();
            let focus = controls.current().focus;
            log::info!(
                "frame {frame:4} {:?} camera ({:.1}, {:.1}, {:.1}) focus ({:.1}, {:.1}, {:.1})",
                controls.mode(),
                position.x,
                position.y,
                position.z,
                focus.x,
                focus.y,
                focus.z,
            );
        }
    });

    println!("Frames: {} ({} changed)", summary.frames, summary.changed_frames);
    match summary.settled_at {
        Some(frame) => println!("Camera at rest after frame {frame}"),
        None => println!("Camera still moving after {} frames", summary.frames),
    }
    let focus = summary.focus();
    println!(
        "Focus: ({:.2}, {:.2}, {:.2})  terrain height: {:.2}  info clicks: {}",
        focus.x,
        focus.y,
        focus.z,
        summary.terrain_height,
        clicks.get()
    );

    Ok(())
}
