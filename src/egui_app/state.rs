//! Shared state types for the egui UI.

mod plot;
mod status;

pub use plot::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub plot: PlotUiState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            plot: PlotUiState::default(),
        }
    }
}
