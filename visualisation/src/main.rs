mod canvas;
mod control_panel;
mod draw_polygon;

use canvas::Canvas;
use control_panel::ControlPanel;

use std::time::{ SystemTime, UNIX_EPOCH };

use bounce_engine as be;
use color_eyre::eyre::{ Result, WrapErr };
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Bouncing bodies".to_owned(),
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("{err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

/// Setup logging, filtered with `RUST_LOG`
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

async fn run() -> Result<()> {
    color_eyre::install()?;
    setup_logging();

    let mut canvas = Canvas::acquire().wrap_err("Could not set up the drawing surface")?;
    let mut sim = be::Simulation::from_seed(be::Config::default(), canvas::current_viewport()?, seed())?;
    let mut panel = ControlPanel::new(sim.config());
    let mut last_mouse = mouse_position();

    sim.start();

    loop {
        // A minimised window has no size, keep the old population until it comes back
        if let Ok(viewport) = canvas::current_viewport() {
            if viewport != sim.viewport() {
                tracing::debug!("Window resized to {}x{}", viewport.width(), viewport.height());
                sim.resize(viewport);
            }
        }

        let mut changes = Vec::new();
        let mut panel_has_pointer = false;
        egui_macroquad::ui(|ctx| {
            changes = panel.show(ctx);
            panel_has_pointer = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
        });

        for change in changes {
            if let Err(err) = sim.apply(change) {
                tracing::warn!("Ignoring {change:?}: {err}");
                panel.sync(sim.config());
            }
        }

        let mouse = mouse_position();
        if mouse != last_mouse && !panel_has_pointer {
            sim.pointer_moved(be::DVec2::new(mouse.0 as f64, mouse.1 as f64));
        }
        last_mouse = mouse;

        sim.tick(&mut canvas)?;

        egui_macroquad::draw();

        next_frame().await;
    }
}
