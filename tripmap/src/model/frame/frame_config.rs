use std::path::Path;

use serde::{Deserialize, Serialize};

use super::MapViewState;
use crate::model::tripmap_error::TripmapError;

/// only locations averaging strictly more than this many trips are shown.
pub const DEFAULT_TRIP_THRESHOLD: f64 = 20.0;
/// multiplier applied by the rendering surface to column elevations.
pub const DEFAULT_ELEVATION_SCALE: f64 = 10.0;
/// column footprint radius in meters.
pub const DEFAULT_COLUMN_RADIUS: f64 = 100.0;

/// tunable frame parameters. the defaults reproduce the original view;
/// a TOML file may override any subset of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub trip_threshold: f64,
    pub elevation_scale: f64,
    pub radius: f64,
    pub view: MapViewState,
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig {
            trip_threshold: DEFAULT_TRIP_THRESHOLD,
            elevation_scale: DEFAULT_ELEVATION_SCALE,
            radius: DEFAULT_COLUMN_RADIUS,
            view: MapViewState::default(),
        }
    }
}

impl FrameConfig {
    /// reads a configuration from a TOML file. an unreadable or invalid
    /// file is an error; missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<FrameConfig, TripmapError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TripmapError::Configuration {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| TripmapError::Configuration {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = FrameConfig::default();
        assert_eq!(config.trip_threshold, 20.0);
        assert_eq!(config.elevation_scale, 10.0);
        assert_eq!(config.radius, 100.0);
        assert_eq!(config.view.latitude, -34.6148);
        assert_eq!(config.view.longitude, -58.4387);
        assert_eq!(config.view.zoom, 11.0);
        assert_eq!(config.view.pitch, 45.0);
    }

    #[test]
    fn test_partial_toml_overrides_keep_other_defaults() {
        let config: FrameConfig = toml::from_str(
            r#"
            trip_threshold = 5.0

            [view]
            zoom = 9.5
            "#,
        )
        .unwrap();
        assert_eq!(config.trip_threshold, 5.0);
        assert_eq!(config.view.zoom, 9.5);
        assert_eq!(config.elevation_scale, 10.0);
        assert_eq!(config.view.pitch, 45.0);
    }
}
