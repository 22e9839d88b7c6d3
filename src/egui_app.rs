/// Controller bridging the visualizer session to the UI.
pub mod controller;
/// Shared UI state types.
pub mod state;
/// egui renderer.
pub mod ui;
