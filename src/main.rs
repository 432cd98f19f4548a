#![warn(clippy::all)]

use anyhow::{anyhow, Context as _};
use clap::Parser;
use std::time::Duration;

/// Desktop viewer: previous and current board side by side.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Side length of the board
    #[arg(long, default_value_t = life_board::Config::DEFAULT_SIZE)]
    size: usize,

    /// Delay between generations in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    life_board::logging::init("warn");

    let cli = Cli::parse();
    let config = life_board::Config::new(cli.size, Duration::from_millis(cli.delay_ms))
        .context("invalid board configuration")?;
    let app = life_board::App::new(config)?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 720.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("viewer failed: {err}"))
}
