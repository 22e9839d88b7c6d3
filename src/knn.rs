//! Brute-force k-nearest-neighbor classification over a labeled 2D point set.
//!
//! Everything here is pure so the session and UI layers stay thin. Neighbor
//! indices always refer to positions in the training slice passed in.

use std::fmt;

/// Class assigned to a training point or a classified query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// First class.
    A,
    /// Second class; wins tied votes.
    B,
}

impl Label {
    /// Short display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::A => "A",
            Label::B => "B",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training point with a fixed class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledPoint {
    /// Horizontal position in world units.
    pub x: f64,
    /// Vertical position in world units.
    pub y: f64,
    /// Class of the point.
    pub label: Label,
}

impl LabeledPoint {
    /// Create a labeled point.
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self { x, y, label }
    }
}

/// User-placed point awaiting classification.
///
/// `label` is `None` until [`classify`] assigns the winning class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryPoint {
    /// Horizontal position in world units.
    pub x: f64,
    /// Vertical position in world units.
    pub y: f64,
    /// Assigned class, or `None` while unknown.
    pub label: Option<Label>,
}

impl QueryPoint {
    /// Create an unclassified query at the given position.
    pub fn unknown(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    /// True once a label has been assigned.
    pub fn is_classified(&self) -> bool {
        self.label.is_some()
    }
}

/// Anything with a 2D position that distances can be measured between.
pub trait Position {
    /// Horizontal coordinate.
    fn x(&self) -> f64;
    /// Vertical coordinate.
    fn y(&self) -> f64;
}

impl Position for LabeledPoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Position for QueryPoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// Per-class vote counts among the selected neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoteTally {
    /// Neighbors labeled [`Label::A`].
    pub a: usize,
    /// Neighbors labeled [`Label::B`].
    pub b: usize,
}

impl VoteTally {
    /// Count labels for the given neighbor indices.
    pub fn count(training_set: &[LabeledPoint], neighbors: &[usize]) -> Self {
        let mut tally = Self::default();
        for point in neighbors.iter().filter_map(|&idx| training_set.get(idx)) {
            match point.label {
                Label::A => tally.a += 1,
                Label::B => tally.b += 1,
            }
        }
        tally
    }

    /// Majority label; ties go to [`Label::B`].
    pub fn winner(&self) -> Label {
        if self.a > self.b { Label::A } else { Label::B }
    }

    /// Total number of votes cast.
    pub fn total(&self) -> usize {
        self.a + self.b
    }
}

/// Outcome of a single classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Winning label.
    pub label: Label,
    /// Neighbor indices, nearest first.
    pub neighbors: Vec<usize>,
    /// Votes behind `label`.
    pub tally: VoteTally,
}

/// Euclidean distance between two positions.
pub fn distance(p: &impl Position, q: &impl Position) -> f64 {
    let dx = p.x() - q.x();
    let dy = p.y() - q.y();
    (dx * dx + dy * dy).sqrt()
}

/// Clamp a requested neighbor count into `1..=len` (0 when `len` is 0).
pub fn effective_k(k: usize, len: usize) -> usize {
    if len == 0 { 0 } else { k.clamp(1, len) }
}

/// Indices of the `k` training points closest to `query`, nearest first.
///
/// Equal distances keep their original index order. `k` is clamped to the
/// training set size and an empty training set yields an empty selection.
pub fn nearest(training_set: &[LabeledPoint], query: &impl Position, k: usize) -> Vec<usize> {
    let take = effective_k(k, training_set.len());
    if take == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(usize, f64)> = training_set
        .iter()
        .enumerate()
        .map(|(idx, point)| (idx, distance(point, query)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(take);
    ranked.into_iter().map(|(idx, _)| idx).collect()
}

/// Classify `query` by majority vote of its `k` nearest neighbors.
///
/// On success the query's label is overwritten with the winner. Returns `None`
/// and leaves the query untouched when the training set is empty.
pub fn classify(
    training_set: &[LabeledPoint],
    query: &mut QueryPoint,
    k: usize,
) -> Option<Classification> {
    let neighbors = nearest(training_set, &*query, k);
    if neighbors.is_empty() {
        return None;
    }
    let tally = VoteTally::count(training_set, &neighbors);
    let label = tally.winner();
    query.label = Some(label);
    Some(Classification {
        label,
        neighbors,
        tally,
    })
}
