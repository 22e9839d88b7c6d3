//! Owns the visualizer session and settings and turns UI actions into session calls.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::egui_app::state::{StatusTone, UiState};
use crate::knn::{Classification, LabeledPoint, QueryPoint};
use crate::session::{QueryState, VisualizerSession};
use crate::settings::{self, AppSettings, ConfigError};

/// Maintains app state and bridges the core to the egui UI.
pub struct VisualizerController {
    pub ui: UiState,
    session: VisualizerSession,
    settings: AppSettings,
    rng: StdRng,
    last_classification: Option<Classification>,
    persist_settings: bool,
}

impl VisualizerController {
    /// Build a controller and scatter the first training set.
    ///
    /// Settings are kept in memory only until [`Self::load_configuration`] succeeds.
    pub fn new(settings: AppSettings) -> Self {
        let settings = settings.normalized();
        let rng = seeded_rng(settings.sampling.seed);
        let mut controller = Self {
            ui: UiState::default(),
            session: VisualizerSession::new(),
            settings,
            rng,
            last_classification: None,
            persist_settings: false,
        };
        controller.scatter_quietly();
        controller
    }

    /// Load persisted settings, reseed and re-scatter.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        let loaded = settings::load_or_default()?;
        self.apply_settings(loaded);
        self.persist_settings = true;
        Ok(())
    }

    /// Replace the settings in use; resets the scene.
    pub fn apply_settings(&mut self, settings: AppSettings) {
        self.settings = settings.normalized();
        self.rng = seeded_rng(self.settings.sampling.seed);
        self.scatter_quietly();
    }

    /// Regenerate both classes, discarding the query.
    pub fn rescatter(&mut self) {
        self.scatter_quietly();
        let count = self.session.training_set().len();
        self.set_status(
            format!("Scattered {count} points; click the canvas to place a query"),
            StatusTone::Info,
        );
    }

    fn scatter_quietly(&mut self) {
        let params = self.settings.scatter_params();
        self.session.scatter(&mut self.rng, &params);
        self.last_classification = None;
        self.ui.plot.hovered_point = None;
    }

    /// Place a query at world coordinates and preview its neighbors.
    pub fn place_query(&mut self, x: f64, y: f64) -> QueryPoint {
        let query = self.session.place_query(x, y);
        self.last_classification = None;
        let k = self.settings.classifier.k;
        let previewed = self.session.preview(k).len();
        self.set_status(
            format!("Query at ({x:.0}, {y:.0}); {previewed} nearest highlighted, press Classify"),
            StatusTone::Info,
        );
        query
    }

    /// Classify the current query with the selected k.
    ///
    /// Does nothing without a query.
    pub fn classify(&mut self) -> Option<Classification> {
        if self.session.query_state() == QueryState::NotPresent {
            return None;
        }
        let k = self.settings.classifier.k;
        match self.session.classify(k) {
            Some(result) => {
                self.set_status(
                    format!(
                        "Classified as {} (A: {}, B: {}, k = {})",
                        result.label,
                        result.tally.a,
                        result.tally.b,
                        result.tally.total()
                    ),
                    StatusTone::Info,
                );
                self.last_classification = Some(result.clone());
                Some(result)
            }
            None => {
                self.set_status(
                    "No training points to classify against",
                    StatusTone::Warning,
                );
                None
            }
        }
    }

    /// Change k, refresh the preview and persist the choice.
    pub fn set_k(&mut self, k: usize) {
        if k == 0 || k == self.settings.classifier.k {
            return;
        }
        self.settings.classifier.k = k;
        if self.session.query_state() == QueryState::Unknown {
            self.session.preview(k);
        }
        tracing::debug!("Selected k = {k}");
        self.persist();
    }

    fn persist(&mut self) {
        if !self.persist_settings {
            return;
        }
        if let Err(err) = settings::save(&self.settings) {
            tracing::warn!("Failed to save settings: {err}");
            self.set_status(format!("Failed to save settings: {err}"), StatusTone::Warning);
        }
    }

    /// Classification is offered once per placed query.
    pub fn can_classify(&self) -> bool {
        self.session.query_state() == QueryState::Unknown && !self.session.training_set().is_empty()
    }

    /// Currently selected neighbor count.
    pub fn selected_k(&self) -> usize {
        self.settings.classifier.k
    }

    /// Neighbor counts offered in the selector.
    pub fn k_options(&self) -> &[usize] {
        &self.settings.classifier.k_options
    }

    /// Side length of the square world.
    pub fn canvas_size(&self) -> f64 {
        self.settings.canvas.size
    }

    /// Training points.
    pub fn training_set(&self) -> &[LabeledPoint] {
        self.session.training_set()
    }

    /// Current query, if any.
    pub fn query(&self) -> Option<&QueryPoint> {
        self.session.query()
    }

    /// Highlighted neighbor indices.
    pub fn neighbors(&self) -> &[usize] {
        self.session.neighbors()
    }

    /// Result of the most recent classification for the current query.
    pub fn last_classification(&self) -> Option<&Classification> {
        self.last_classification.as_ref()
    }

    /// Update the footer message.
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
