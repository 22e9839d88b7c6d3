#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based KNN visualizer.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use knnviz::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use knnviz::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([720.0, 720.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_title("KNN Visualizer");
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "KNN Visualizer",
        native_options,
        Box::new(|_cc| Ok(Box::new(EguiApp::new()))),
    )?;
    Ok(())
}
