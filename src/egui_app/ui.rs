//! egui renderer for the visualizer.

mod controls;
mod plot_math;
mod plot_view;
pub mod style;

use crate::egui_app::controller::VisualizerController;
use crate::egui_app::state::StatusTone;
use crate::settings::AppSettings;
use eframe::egui;

/// Smallest window size that still fits the controls and a usable canvas.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(420.0, 420.0);

/// Renders the visualizer using the controller state.
pub struct EguiApp {
    controller: VisualizerController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted settings when available.
    ///
    /// A broken config file is reported in the status bar and defaults are used.
    pub fn new() -> Self {
        let mut controller = VisualizerController::new(AppSettings::default());
        if let Err(err) = controller.load_configuration() {
            tracing::warn!("Using default settings: {err}");
            controller.set_status(
                format!("Failed to load config, using defaults: {err}"),
                StatusTone::Warning,
            );
        }
        Self::with_controller(controller)
    }

    /// Wrap an existing controller.
    pub fn with_controller(controller: VisualizerController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl Default for EguiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.handle_shortcuts(ctx);
        self.render_controls(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_plot(ui);
        });
    }
}
