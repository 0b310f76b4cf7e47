//! portview - a desktop window listing the serial ports available right now.
//!
//! The window holds a single list and a refresh button; enumeration runs
//! once at startup and again on every click. Hosts outside the supported
//! platform categories fail at startup, before any window is created.

#![windows_subsystem = "windows"]

use anyhow::{Context, Result};
use eframe::egui;
use env_logger::Env;
use log::info;
use portview::Platform;

mod app;

use app::PortListApp;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        // No console is attached on Windows; leave a diagnostic file where
        // a launcher can find it.
        let log_path = std::env::temp_dir().join("portview_error.log");
        let _ = std::fs::write(&log_path, format!("portview failed to start: {e:#}"));
        eprintln!("portview failed to start: {e:#}");
        eprintln!("details written to {}", log_path.display());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Detect before any window exists so an unsupported host fails the
    // whole startup, not a later refresh.
    let platform = Platform::detect().context("cannot enumerate serial ports on this host")?;
    info!("portview starting ({} strategy)", platform.name());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 180.0]),
        ..Default::default()
    };

    eframe::run_native(
        "portview",
        options,
        Box::new(move |_cc| Ok(Box::new(PortListApp::new(platform)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
