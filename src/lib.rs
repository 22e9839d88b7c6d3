//! Interactive k-nearest-neighbors teaching visualizer.
/// Application directory resolution.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Nearest-neighbor search and majority-vote classification.
pub mod knn;
/// Tracing setup.
pub mod logging;
/// Gaussian two-class point generation.
pub mod sampler;
/// Visualizer session state.
pub mod session;
/// Persisted settings.
pub mod settings;
