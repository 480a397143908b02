// Prevents additional console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! # Tickdown Desktop Widget
//!
//! Borderless, always-on-top countdown window: a thin egui shell over
//! tickdown-core. The shell owns rendering, input and window chrome; the
//! engine owns the counting.

use clap::Parser;
use eframe::egui;
use tracing::info;

mod app;
mod theme;
mod ticker;

use app::{ControlOrder, CountdownApp, WidgetConfig, EXPANDED_SIZE};

#[derive(Parser)]
#[command(name = "tickdown-desktop", version, about = "Borderless always-on-top countdown widget")]
struct Args {
    /// Preset for the duration picker, e.g. "10:00", "25m" or "3661"
    #[arg(long, default_value = "10:00")]
    duration: String,

    /// Initial window opacity (0.20 - 1.00)
    #[arg(long, default_value_t = 0.9)]
    opacity: f32,

    /// Window-button placement in the top bar (defaults per platform)
    #[arg(long, value_enum)]
    controls: Option<ControlOrder>,
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let initial_secs = match tickdown_core::parse_duration(&args.duration) {
        Ok(secs) => secs,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let config = WidgetConfig {
        initial_secs,
        opacity: args.opacity,
        control_order: args.controls.unwrap_or_else(ControlOrder::platform_default),
    };

    info!("starting Tickdown widget");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(EXPANDED_SIZE)
            .with_min_inner_size([240.0, 110.0])
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "Tickdown",
        options,
        Box::new(|cc| Ok(Box::new(CountdownApp::new(cc, config)))),
    )
}
