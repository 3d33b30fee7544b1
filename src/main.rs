#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Pinned hour-of-day, set from the command line.
static PINNED_HOUR: OnceLock<u32> = OnceLock::new();

/// Get the pinned hour if one was given on the command line.
pub fn get_pinned_hour() -> Option<u32> {
    PINNED_HOUR.get().copied()
}

/// AstroWeather - Your daily cosmic forecast
#[derive(Parser, Debug)]
#[command(name = "astroweather-desktop")]
#[command(about = "AstroWeather - randomized astrology dashboard")]
struct Args {
    /// Pin the time-of-day selector to this hour (0-23) instead of the
    /// wall clock, for previewing the morning/afternoon/evening bundles
    #[arg(long)]
    hour: Option<u32>,

    /// Window title label (useful when running several instances)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(hour) = args.hour {
        match astroweather_core::error::check_hour(hour) {
            Ok(hour) => {
                let _ = PINNED_HOUR.set(hour);
                tracing::info!("Time-of-day selector pinned to hour {}", hour);
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    // Phone-ish portrait window
    let window_width = 430.0;
    let window_height = 900.0;

    let title = match args.name {
        Some(ref name) => format!("AstroWeather - {}", name),
        None => "AstroWeather".to_string(),
    };

    tracing::info!("Starting '{}'", title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
