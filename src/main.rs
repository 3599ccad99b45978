use std::path::Path;
use anyhow::{bail, Context};
use clap::Parser;
use log::{debug, error, info, warn};
use raylib::prelude::*;

mod cli;
mod logging;
mod stage;
mod texture_loader;

use slidemenu::constants::*;
use slidemenu::{Button, ClickRecognizer, Manifest, NavigationGraph, NavigationSession, SwapError};

use crate::cli::Cli;
use crate::stage::{RaylibHost, Stage};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup(&cli.verbosity);

    // --- Load the Slide Table ---
    let manifest = match &cli.manifest {
        Some(path) => Manifest::load(path)?,
        None => {
            info!("No manifest given, using the built-in menu");
            Manifest::builtin()
        }
    };
    let graph = manifest.into_graph().context("Invalid slide table")?;

    if cli.check {
        return check_assets(&graph, &cli.assets);
    }

    run(&cli, graph)
}

/// Verifies that every slide's bitmap exists without opening a window.
fn check_assets(graph: &NavigationGraph, assets: &Path) -> anyhow::Result<()> {
    let missing: Vec<_> = graph
        .ids()
        .filter_map(|id| graph.resource(id).map(|resource| (id, resource)))
        .filter(|(_, resource)| !assets.join(resource.as_str()).is_file())
        .collect();

    for (id, resource) in &missing {
        warn!("Slide {id}: {} not found in {}", resource, assets.display());
    }
    if !missing.is_empty() {
        bail!("{} of {} slide bitmaps are missing", missing.len(), graph.len());
    }

    info!("Slide table verified: {} slides", graph.len());
    Ok(())
}

fn run(cli: &Cli, graph: NavigationGraph) -> anyhow::Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(DISPLAY_WIDTH * cli.scale, DISPLAY_HEIGHT * cli.scale)
        .title("Slide Menu")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut stage = Stage::default();
    let mut recognizer = ClickRecognizer::default();
    let mut session = NavigationSession::new(graph);

    // --- Initial Screen Draw ---
    {
        let mut host = RaylibHost { rl: &mut rl, thread: &thread, assets: &cli.assets, stage: &mut stage };
        session.start(&mut host).context("Failed to show the first slide")?;
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        for button in Button::ALL {
            let down = key_bindings(button).iter().any(|&key| rl.is_key_down(key));
            let Some(event) = recognizer.step(button, down, dt) else {
                continue;
            };

            let mut host = RaylibHost { rl: &mut rl, thread: &thread, assets: &cli.assets, stage: &mut stage };
            match session.dispatch(event, &mut host) {
                Ok(transition) => debug!("{event:?}: {transition:?}"),
                Err(e @ SwapError::ResourceLoad { restored: true, .. }) => warn!("{e}"),
                Err(e) => error!("{e}"),
            }
        }

        stage.update(dt);

        let mut d = rl.begin_drawing(&thread);
        stage.draw(&mut d, session.slot().resident(), cli.scale);
    }

    // --- Teardown ---
    let mut host = RaylibHost { rl: &mut rl, thread: &thread, assets: &cli.assets, stage: &mut stage };
    session.shutdown(&mut host);
    Ok(())
}

fn key_bindings(button: Button) -> &'static [KeyboardKey] {
    match button {
        Button::Up => &[KeyboardKey::KEY_UP, KeyboardKey::KEY_K],
        Button::Down => &[KeyboardKey::KEY_DOWN, KeyboardKey::KEY_J],
        Button::Select => &[KeyboardKey::KEY_ENTER, KeyboardKey::KEY_RIGHT],
    }
}
