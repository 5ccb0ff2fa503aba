//! Pixel art GUI for Cove: macroquad entry point.
//!
//! Manages the screen stack and main loop. The virtual canvas (480x270) is
//! scaled to fit the window, giving pixel-perfect rendering.

use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cove_gui::app::AppState;
use cove_gui::screen::play::PlayScreen;
use cove_gui::screen::title::TitleScreen;
use cove_gui::screen::{Screen, ScreenId, Transition};
use cove_gui::theme::{CANVAS_H, CANVAS_W, palette, setup_virtual_canvas};
use cove_play::PlayConfig;

#[derive(Parser, Debug)]
#[command(name = "cove-gui", about = "Walk around a small island", version)]
struct Args {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Seed for NPC wandering.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Window size as a multiple of the 480x270 canvas.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=8))]
    scale: u8,

    /// Skip the title screen and start playing.
    #[arg(long)]
    no_title: bool,
}

/// Create a screen instance for a given screen id.
fn make_screen(id: ScreenId) -> Box<dyn Screen> {
    match id {
        ScreenId::Title => Box::new(TitleScreen::new()),
        ScreenId::Play => Box::new(PlayScreen::new()),
    }
}

fn window_conf(scale: u8) -> Conf {
    Conf {
        window_title: "Cove".to_owned(),
        window_width: (CANVAS_W * f32::from(scale)) as i32,
        window_height: (CANVAS_H * f32::from(scale)) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PlayConfig::default().with_seed(args.seed);
    if let Err(e) = config.validate() {
        error!(error = %e, "invalid configuration");
        std::process::exit(1);
    }

    info!(seed = args.seed, scale = args.scale, "starting cove");
    macroquad::Window::from_config(window_conf(args.scale), run(AppState::new(config), args.no_title));
}

async fn run(mut app: AppState, skip_title: bool) {
    let mut screens: Vec<Box<dyn Screen>> = vec![make_screen(ScreenId::Title)];
    if skip_title {
        match app.start_play() {
            Ok(()) => screens.push(make_screen(ScreenId::Play)),
            Err(e) => {
                error!(error = %e, "failed to start game");
                std::process::exit(1);
            }
        }
    }

    loop {
        // Letterbox bars
        clear_background(palette::BLACK);
        setup_virtual_canvas();
        draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::DARK_BLUE);

        let delta_ms = f64::from(get_frame_time()) * 1000.0;
        if let Some(screen) = screens.last_mut() {
            match screen.update(&mut app, delta_ms) {
                Transition::Push(id) => screens.push(make_screen(id)),
                Transition::Pop => {
                    screens.pop();
                }
                Transition::Replace(id) => {
                    screens.pop();
                    screens.push(make_screen(id));
                }
                Transition::None => {}
            }
        }

        // The top screen may have changed after the transition.
        if let Some(screen) = screens.last() {
            screen.draw(&mut app);
        }

        if app.should_quit || screens.is_empty() {
            break;
        }

        next_frame().await;
    }
}
