use crate::sampler::MAX_POINTS_PER_CLASS;

pub(super) const MIN_CANVAS_SIZE: f64 = 50.0;
pub(super) const MAX_CANVAS_SIZE: f64 = 4_000.0;

pub(super) fn default_points_per_class() -> usize {
    30
}

pub(super) fn default_spread() -> f64 {
    70.0
}

pub(super) fn default_center_jitter() -> f64 {
    60.0
}

pub(super) fn default_separation() -> f64 {
    0.0
}

pub(super) fn default_k() -> usize {
    3
}

pub(super) fn default_k_options() -> Vec<usize> {
    vec![1, 3, 5, 7]
}

pub(super) fn default_canvas_size() -> f64 {
    500.0
}

pub(super) fn clamp_points_per_class(value: usize) -> usize {
    value.clamp(1, MAX_POINTS_PER_CLASS)
}

pub(super) fn clamp_canvas_size(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE)
    } else {
        default_canvas_size()
    }
}

/// Drop zero and duplicate entries, keep ascending order, fall back to defaults when empty.
pub(super) fn sanitize_k_options(mut options: Vec<usize>) -> Vec<usize> {
    options.retain(|&k| k > 0);
    options.sort_unstable();
    options.dedup();
    if options.is_empty() {
        default_k_options()
    } else {
        options
    }
}
