use knnviz::knn::{self, Label, LabeledPoint, QueryPoint, distance};
use knnviz::sampler::ScatterParams;
use knnviz::session::{QueryState, VisualizerSession};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn three_point_scenario_picks_lower_index_and_label_a() {
    let mut session = VisualizerSession::with_training_set(vec![
        LabeledPoint::new(0.0, 0.0, Label::A),
        LabeledPoint::new(1.0, 0.0, Label::A),
        LabeledPoint::new(10.0, 10.0, Label::B),
    ]);
    session.place_query(0.5, 0.0);
    assert_eq!(session.preview(1), &[0]);
    let result = session.classify(1).expect("classification");
    assert_eq!(result.neighbors, vec![0]);
    assert_eq!(result.label, Label::A);
    assert_eq!(session.query().and_then(|q| q.label), Some(Label::A));
}

#[test]
fn scattered_sets_hold_equal_class_counts() {
    for seed in 0..8 {
        let params = ScatterParams {
            points_per_class: 5 + seed as usize,
            ..ScatterParams::default()
        };
        let mut session = VisualizerSession::new();
        let points = session.scatter(&mut StdRng::seed_from_u64(seed), &params);
        let a = points.iter().filter(|p| p.label == Label::A).count();
        let b = points.iter().filter(|p| p.label == Label::B).count();
        assert_eq!(a, params.points_per_class);
        assert_eq!(b, params.points_per_class);
    }
}

#[test]
fn nearest_on_scatter_returns_sorted_distinct_indices() {
    let mut session = VisualizerSession::new();
    let points = session
        .scatter(&mut StdRng::seed_from_u64(21), &ScatterParams::default())
        .to_vec();
    let query = QueryPoint::unknown(260.0, 240.0);
    for k in [1, 3, 5, 7, 60, 200] {
        let selected = knn::nearest(&points, &query, k);
        assert_eq!(selected.len(), k.min(points.len()));
        let mut unique = selected.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), selected.len());
        assert!(selected.windows(2).all(|pair| {
            distance(&points[pair[0]], &query) <= distance(&points[pair[1]], &query)
        }));
    }
}

#[test]
fn repeated_classification_is_stable() {
    let mut session = VisualizerSession::new();
    session.scatter(&mut StdRng::seed_from_u64(33), &ScatterParams::default());
    session.place_query(240.0, 260.0);
    let first = session.classify(5).expect("first");
    let second = session.classify(5).expect("second");
    assert_eq!(first, second);
    assert_eq!(session.neighbors(), first.neighbors.as_slice());
    assert_eq!(session.query_state(), QueryState::Classified);
}

#[test]
fn equidistant_tie_resolves_to_b() {
    let mut session = VisualizerSession::with_training_set(vec![
        LabeledPoint::new(0.0, 5.0, Label::A),
        LabeledPoint::new(0.0, -5.0, Label::B),
        LabeledPoint::new(50.0, 50.0, Label::A),
    ]);
    session.place_query(0.0, 0.0);
    let result = session.classify(2).expect("classification");
    assert_eq!((result.tally.a, result.tally.b), (1, 1));
    assert_eq!(result.label, Label::B);
}

#[test]
fn empty_training_set_is_unclassifiable() {
    let mut session = VisualizerSession::new();
    session.place_query(1.0, 2.0);
    assert!(session.preview(3).is_empty());
    assert!(session.classify(3).is_none());
    assert_eq!(session.query_state(), QueryState::Unknown);
}
