use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{
    DEFAULT_ASSISTANT_NAME, DEFAULT_PANE_HEIGHT, DEFAULT_RESPONSE_DELAY_MS, MAX_FPS,
};
use crate::core::settings::ModelParameters;
use crate::utils::color::{color_to_rgb, parse_color};
use crate::visualizer::terminal_surface::CellMetrics;
use crate::visualizer::{EngineConfig, GraphShape, Rgba};

/// Initial values for the settings drawer.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct ModelDefaults {
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_tokens: Option<u32>,
}

/// Shape and look of the network visualizer pane.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct VisualizerSettings {
    pub layer_count: Option<usize>,
    pub nodes_per_layer: Option<usize>,
    /// Node radius at rest, in virtual pixels
    pub node_radius: Option<f64>,
    pub pulse_radius: Option<f64>,
    /// Accent colour for edges, pulses and nodes (e.g., "#9481ed")
    pub accent: Option<String>,
    /// Rows given to the pane, borders excluded
    pub pane_height: Option<u16>,
    /// Virtual pixels per terminal cell, horizontally
    pub cell_width: Option<f64>,
    /// Virtual pixels per terminal cell, vertically
    pub cell_height: Option<f64>,
    pub fps: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// UI theme name ("dark" or "light")
    pub theme: Option<String>,
    /// Name the assistant introduces itself with
    pub assistant_name: Option<String>,
    /// Delay before a simulated reply arrives
    pub response_delay_ms: Option<u64>,
    /// Fixed seed for the visualizer and reply picker
    pub seed: Option<u64>,
    #[serde(default)]
    pub model: ModelDefaults,
    #[serde(default)]
    pub visualizer: VisualizerSettings,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

/// Parses an accent colour spec into an opaque [`Rgba`].
pub fn parse_accent(spec: &str) -> Option<Rgba> {
    let (r, g, b) = parse_color(spec).and_then(color_to_rgb)?;
    Some(Rgba::new(r, g, b, 1.0))
}

impl Config {
    pub fn assistant_name(&self) -> &str {
        self.assistant_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ASSISTANT_NAME)
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms.unwrap_or(DEFAULT_RESPONSE_DELAY_MS))
    }

    pub fn model_parameters(&self) -> ModelParameters {
        let defaults = ModelParameters::default();
        ModelParameters::new(
            self.model.temperature.unwrap_or(defaults.temperature),
            self.model.top_p.unwrap_or(defaults.top_p),
            self.model.max_tokens.unwrap_or(defaults.max_tokens),
        )
    }

    pub fn engine_config(&self) -> EngineConfig {
        let defaults = EngineConfig::default();
        let settings = &self.visualizer;
        EngineConfig {
            shape: GraphShape {
                layer_count: settings
                    .layer_count
                    .unwrap_or(defaults.shape.layer_count),
                nodes_per_layer: settings
                    .nodes_per_layer
                    .unwrap_or(defaults.shape.nodes_per_layer),
            },
            node_radius: settings.node_radius.unwrap_or(defaults.node_radius),
            pulse_radius: settings.pulse_radius.unwrap_or(defaults.pulse_radius),
            accent: settings
                .accent
                .as_deref()
                .and_then(parse_accent)
                .unwrap_or(defaults.accent),
        }
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        let defaults = CellMetrics::default();
        CellMetrics {
            width: self.visualizer.cell_width.unwrap_or(defaults.width),
            height: self.visualizer.cell_height.unwrap_or(defaults.height),
        }
    }

    pub fn pane_height(&self) -> u16 {
        self.visualizer.pane_height.unwrap_or(DEFAULT_PANE_HEIGHT)
    }

    pub fn visualizer_fps(&self) -> u32 {
        self.visualizer.fps.unwrap_or(MAX_FPS).min(MAX_FPS)
    }

    /// Interval between visualizer frames.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.visualizer_fps().max(1) as u64)
    }

    /// Describes the first value that can't be used, if any.
    pub(crate) fn invalid_reason(&self) -> Option<String> {
        let settings = &self.visualizer;
        if settings.fps == Some(0) {
            return Some("visualizer.fps must be greater than zero".to_string());
        }
        for (key, value) in [
            ("visualizer.cell_width", settings.cell_width),
            ("visualizer.cell_height", settings.cell_height),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v > 0.0) {
                    return Some(format!("{key} must be a positive number"));
                }
            }
        }
        for (key, value) in [
            ("visualizer.node_radius", settings.node_radius),
            ("visualizer.pulse_radius", settings.pulse_radius),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v >= 0.0) {
                    return Some(format!("{key} must not be negative"));
                }
            }
        }
        if let Some(accent) = &settings.accent {
            if parse_accent(accent).is_none() {
                return Some(format!("visualizer.accent is not a colour: {accent}"));
            }
        }
        None
    }
}
