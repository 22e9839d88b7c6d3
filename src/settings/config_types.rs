use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config_defaults::{
    clamp_canvas_size, clamp_points_per_class, default_canvas_size, default_center_jitter,
    default_k, default_k_options, default_points_per_class, default_separation, default_spread,
    sanitize_k_options,
};
use crate::sampler::ScatterParams;

/// Settings persisted in `config.toml`.
///
/// Config sections (TOML): `[sampling]`, `[classifier]`, `[canvas]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub sampling: SamplingSettings,
    #[serde(default)]
    pub classifier: ClassifierSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
}

impl AppSettings {
    /// Clamp every section into its valid range.
    pub fn normalized(mut self) -> Self {
        self.canvas.size = clamp_canvas_size(self.canvas.size);
        self.sampling.points_per_class = clamp_points_per_class(self.sampling.points_per_class);
        self.classifier = self.classifier.normalized();
        self
    }

    /// Scatter parameters centered on the configured canvas.
    pub fn scatter_params(&self) -> ScatterParams {
        let half = self.canvas.size * 0.5;
        ScatterParams {
            points_per_class: self.sampling.points_per_class,
            spread: self.sampling.spread,
            center_jitter: self.sampling.center_jitter,
            separation: self.sampling.separation,
            center: (half, half),
        }
        .normalized()
    }
}

/// How the two classes are generated.
///
/// Config keys: `points_per_class`, `spread`, `center_jitter`, `separation`, `seed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingSettings {
    /// Clamped into `1..=500`; each class always gets at least one point.
    #[serde(default = "default_points_per_class")]
    pub points_per_class: usize,
    /// Standard deviation of points around their mean, in canvas units.
    #[serde(default = "default_spread")]
    pub spread: f64,
    /// Standard deviation of the per-point jitter of the class center.
    #[serde(default = "default_center_jitter")]
    pub center_jitter: f64,
    /// Horizontal gap between class centers; 0 stacks them.
    ///
    /// Capped at `spread + center_jitter` when scattering so the classes overlap.
    #[serde(default = "default_separation")]
    pub separation: f64,
    /// Fixed RNG seed for reproducible scenes.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            points_per_class: default_points_per_class(),
            spread: default_spread(),
            center_jitter: default_center_jitter(),
            separation: default_separation(),
            seed: None,
        }
    }
}

/// Neighbor count selection.
///
/// Config keys: `k`, `k_options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierSettings {
    /// Last selected neighbor count.
    #[serde(default = "default_k")]
    pub k: usize,
    /// Choices offered in the k selector.
    #[serde(default = "default_k_options")]
    pub k_options: Vec<usize>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            k: default_k(),
            k_options: default_k_options(),
        }
    }
}

impl ClassifierSettings {
    /// Sanitize the options and snap `k` onto one of them.
    pub fn normalized(mut self) -> Self {
        self.k_options = sanitize_k_options(self.k_options);
        if !self.k_options.contains(&self.k) {
            let fallback = self.k_options[0];
            self.k = self
                .k_options
                .iter()
                .copied()
                .filter(|&option| option <= self.k)
                .max()
                .unwrap_or(fallback);
        }
        self
    }
}

/// Size of the square world the points live in.
///
/// Config keys: `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    #[serde(default = "default_canvas_size")]
    pub size: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            size: default_canvas_size(),
        }
    }
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `.knnviz` directory could not be resolved or created.
    #[error("Config directory unavailable: {0}")]
    AppDir(#[from] crate::app_dirs::AppDirError),
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_snaps_k_down_to_an_option() {
        let settings = ClassifierSettings {
            k: 6,
            k_options: vec![7, 1, 3, 5, 5, 0],
        }
        .normalized();
        assert_eq!(settings.k_options, vec![1, 3, 5, 7]);
        assert_eq!(settings.k, 5);
    }

    #[test]
    fn classifier_falls_back_to_smallest_option() {
        let settings = ClassifierSettings {
            k: 0,
            k_options: Vec::new(),
        }
        .normalized();
        assert_eq!(settings.k_options, vec![1, 3, 5, 7]);
        assert_eq!(settings.k, 1);
    }

    #[test]
    fn scatter_params_center_on_canvas() {
        let mut settings = AppSettings::default();
        settings.canvas.size = 800.0;
        let params = settings.scatter_params();
        assert_eq!(params.center, (400.0, 400.0));
        assert_eq!(params.points_per_class, 30);
    }
}
