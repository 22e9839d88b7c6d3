//! Owned visualizer state: the training set, the current query and its neighbors.
//!
//! Each user action replaces or mutates this state in one call, so several
//! sessions can coexist and tests need no globals.

use rand::Rng;

use crate::knn::{self, Classification, LabeledPoint, QueryPoint};
use crate::sampler::{self, ScatterParams};

/// Lifecycle of the query point within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryState {
    /// No query has been placed since the last scatter.
    NotPresent,
    /// A query exists but has not been classified.
    Unknown,
    /// The query carries a label.
    Classified,
}

/// Training set, optional query and the neighbor selection shown for it.
#[derive(Clone, Debug, Default)]
pub struct VisualizerSession {
    training_set: Vec<LabeledPoint>,
    query: Option<QueryPoint>,
    neighbors: Vec<usize>,
}

impl VisualizerSession {
    /// Empty session with no points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over an existing training set.
    pub fn with_training_set(training_set: Vec<LabeledPoint>) -> Self {
        Self {
            training_set,
            query: None,
            neighbors: Vec::new(),
        }
    }

    /// Replace the dataset with a fresh scatter, discarding the query and neighbors.
    pub fn scatter<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        params: &ScatterParams,
    ) -> &[LabeledPoint] {
        self.training_set = sampler::scatter(rng, params);
        self.query = None;
        self.neighbors.clear();
        tracing::info!("Re-scattered training set ({} points)", self.training_set.len());
        &self.training_set
    }

    /// Place a new unknown query, replacing any previous one.
    pub fn place_query(&mut self, x: f64, y: f64) -> QueryPoint {
        let query = QueryPoint::unknown(x, y);
        self.query = Some(query);
        self.neighbors.clear();
        tracing::debug!("Placed query at ({x:.1}, {y:.1})");
        query
    }

    /// Compute the neighbor selection for the current query without labeling it.
    pub fn preview(&mut self, k: usize) -> &[usize] {
        self.neighbors = match self.query.as_ref() {
            Some(query) => knn::nearest(&self.training_set, query, k),
            None => Vec::new(),
        };
        &self.neighbors
    }

    /// Classify the current query; `None` when there is no query or no data.
    ///
    /// The neighbor selection stays in place afterwards for highlighting.
    pub fn classify(&mut self, k: usize) -> Option<Classification> {
        let query = self.query.as_mut()?;
        let Some(result) = knn::classify(&self.training_set, query, k) else {
            tracing::warn!("Classification skipped: training set is empty");
            self.neighbors.clear();
            return None;
        };
        self.neighbors = result.neighbors.clone();
        tracing::info!(
            "Classified query as {} with k={} (A: {}, B: {})",
            result.label,
            result.neighbors.len(),
            result.tally.a,
            result.tally.b
        );
        Some(result)
    }

    /// Current training set.
    pub fn training_set(&self) -> &[LabeledPoint] {
        &self.training_set
    }

    /// Current query, if any.
    pub fn query(&self) -> Option<&QueryPoint> {
        self.query.as_ref()
    }

    /// Neighbor indices from the last preview or classification.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Where the query sits in its lifecycle.
    pub fn query_state(&self) -> QueryState {
        match self.query {
            None => QueryState::NotPresent,
            Some(query) if query.is_classified() => QueryState::Classified,
            Some(_) => QueryState::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knn::Label;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture() -> VisualizerSession {
        VisualizerSession::with_training_set(vec![
            LabeledPoint::new(0.0, 0.0, Label::A),
            LabeledPoint::new(1.0, 0.0, Label::A),
            LabeledPoint::new(10.0, 10.0, Label::B),
        ])
    }

    #[test]
    fn classify_without_query_is_noop() {
        let mut session = fixture();
        assert!(session.classify(3).is_none());
        assert_eq!(session.query_state(), QueryState::NotPresent);
        assert!(session.neighbors().is_empty());
    }

    #[test]
    fn query_lifecycle_follows_actions() {
        let mut session = fixture();
        session.place_query(0.5, 0.0);
        assert_eq!(session.query_state(), QueryState::Unknown);
        let result = session.classify(1).unwrap();
        assert_eq!(result.label, Label::A);
        assert_eq!(session.query_state(), QueryState::Classified);
        assert_eq!(session.neighbors(), &[0]);

        session.place_query(9.0, 9.0);
        assert_eq!(session.query_state(), QueryState::Unknown);
        assert!(session.neighbors().is_empty());
    }

    #[test]
    fn preview_selects_without_labeling() {
        let mut session = fixture();
        session.place_query(9.0, 9.0);
        assert_eq!(session.preview(2), &[2, 1]);
        assert_eq!(session.query_state(), QueryState::Unknown);
    }

    #[test]
    fn scatter_resets_query_and_neighbors() {
        let mut session = fixture();
        session.place_query(0.5, 0.0);
        session.classify(3);
        let params = ScatterParams {
            points_per_class: 4,
            ..ScatterParams::default()
        };
        let len = session.scatter(&mut StdRng::seed_from_u64(11), &params).len();
        assert_eq!(len, 8);
        assert_eq!(session.query_state(), QueryState::NotPresent);
        assert!(session.neighbors().is_empty());
    }

    #[test]
    fn classify_on_empty_session_keeps_query_unknown() {
        let mut session = VisualizerSession::new();
        session.place_query(1.0, 1.0);
        assert!(session.classify(3).is_none());
        assert_eq!(session.query_state(), QueryState::Unknown);
    }
}
