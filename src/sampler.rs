//! Synthetic two-class scatter built from Box–Muller normal draws.
//!
//! The random source is any [`rand::Rng`], so a seeded generator (or a fixed
//! sequence in tests) reproduces a scene exactly.

use rand::Rng;

use crate::knn::{Label, LabeledPoint};

/// Upper bound on points generated per class.
pub const MAX_POINTS_PER_CLASS: usize = 500;
/// Smallest per-point standard deviation a scatter is drawn with.
pub const MIN_SPREAD: f64 = 1.0;

/// Parameters shared by both classes of a scatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterParams {
    /// Points generated for each label.
    pub points_per_class: usize,
    /// Standard deviation of each point around its (jittered) mean.
    pub spread: f64,
    /// Standard deviation of the per-point offset applied to the class center.
    pub center_jitter: f64,
    /// Horizontal distance between the two class centers.
    ///
    /// Capped at `spread + center_jitter` so the classes always overlap.
    pub separation: f64,
    /// Midpoint between the class centers.
    pub center: (f64, f64),
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            points_per_class: 30,
            spread: 70.0,
            center_jitter: 60.0,
            separation: 0.0,
            center: (250.0, 250.0),
        }
    }
}

impl ScatterParams {
    /// Clamp every field into range.
    ///
    /// At least one point per class is generated and `spread` never drops below
    /// [`MIN_SPREAD`]. `separation` is capped at `spread + center_jitter`: each
    /// axis then has a combined deviation of at least half the gap between the
    /// centers, so neither class is separable by construction.
    pub fn normalized(mut self) -> Self {
        self.points_per_class = self.points_per_class.clamp(1, MAX_POINTS_PER_CLASS);
        self.spread = non_negative(self.spread).max(MIN_SPREAD);
        self.center_jitter = non_negative(self.center_jitter);
        self.separation = non_negative(self.separation).min(self.spread + self.center_jitter);
        if !self.center.0.is_finite() || !self.center.1.is_finite() {
            self.center = Self::default().center;
        }
        self
    }

    /// Center of the cluster for `label`.
    pub fn class_center(&self, label: Label) -> (f64, f64) {
        let half = self.separation * 0.5;
        match label {
            Label::A => (self.center.0 - half, self.center.1),
            Label::B => (self.center.0 + half, self.center.1),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Draw one normally distributed value via the Box–Muller transform.
///
/// `u` and `v` are redrawn while exactly zero so `ln(u)` stays finite.
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> f64 {
    let u = nonzero_unit(rng);
    let v = nonzero_unit(rng);
    let z = (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos();
    mean + std * z
}

fn nonzero_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let value: f64 = rng.random();
        if value != 0.0 {
            return value;
        }
    }
}

/// Generate `n` points for one class around `(center_x, center_y)`.
pub fn generate_class<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    center_x: f64,
    center_y: f64,
    params: &ScatterParams,
    label: Label,
) -> Vec<LabeledPoint> {
    (0..n)
        .map(|_| {
            let (mean_x, mean_y) = if params.center_jitter > 0.0 {
                (
                    center_x + sample_normal(rng, 0.0, params.center_jitter),
                    center_y + sample_normal(rng, 0.0, params.center_jitter),
                )
            } else {
                (center_x, center_y)
            };
            let x = sample_normal(rng, mean_x, params.spread);
            let y = sample_normal(rng, mean_y, params.spread);
            LabeledPoint::new(x, y, label)
        })
        .collect()
}

/// Build a full training set: every [`Label::A`] point followed by every [`Label::B`] point.
///
/// `params` are normalized first, so a request for zero points per class still
/// yields one point of each label.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R, params: &ScatterParams) -> Vec<LabeledPoint> {
    let params = params.normalized();
    let n = params.points_per_class;
    let mut points = Vec::with_capacity(n * 2);
    for label in [Label::A, Label::B] {
        let (cx, cy) = params.class_center(label);
        points.extend(generate_class(rng, n, cx, cy, &params, label));
    }
    tracing::debug!(
        "Scattered {} points (spread {:.1}, jitter {:.1}, separation {:.1})",
        points.len(),
        params.spread,
        params.center_jitter,
        params.separation
    );
    points
}
