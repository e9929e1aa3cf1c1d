//! Plot style configuration
//!
//! Each trace builder in [`crate::plot`] takes one of these structs. Defaults
//! reproduce the reference look (warm colormap, dark minimum, thin grey contour
//! lines); any field can be overridden in code or through a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::VizError;
use crate::colormap::{Colormap, Palette};

/// Golden-ratio opacity used for filled areas
const FILL_OPACITY: f64 = 0.61803;

/// Contour lines drawn on top of a filled contour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourLinesConfig {
    pub levels: usize,
    pub color: String,
    pub line_width: f64,
    pub opacity: f64,
}

impl Default for ContourLinesConfig {
    fn default() -> Self {
        Self {
            levels: 12,
            color: "dimgray".to_string(),
            line_width: 0.25,
            opacity: 1.0,
        }
    }
}

/// Filled contour (the coloured background of a contour plot)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilledContourConfig {
    pub levels: usize,
    pub colormap: Colormap,
    pub opacity: f64,
    pub show_scale: bool,
}

impl Default for FilledContourConfig {
    fn default() -> Self {
        Self {
            levels: 100,
            colormap: Colormap::new(Palette::YlOrBr, true),
            opacity: FILL_OPACITY,
            show_scale: true,
        }
    }
}

/// Line plot of a one-dimensional function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub width: f64,
    pub color: Option<String>,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: None,
        }
    }
}

/// 3-D surface plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub colormap: Colormap,
    /// Colour of the x/y lines drawn on the surface; `None` disables them
    pub edge_color: Option<String>,
    pub opacity: f64,
    pub show_scale: bool,
    /// Project the z contours onto the floor of the scene, starting at the minimum of z
    pub floor_contours: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            colormap: Colormap::new(Palette::YlOrBr, true),
            edge_color: Some("dimgray".to_string()),
            opacity: FILL_OPACITY,
            show_scale: false,
            floor_contours: true,
        }
    }
}

/// All styles used by a [`crate::FunctionPlotter`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub contour_lines: ContourLinesConfig,
    pub filled_contour: FilledContourConfig,
    pub line: LineConfig,
    pub surface: SurfaceConfig,
}

impl VizConfig {
    /// Parse a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, VizError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, VizError> {
        let json = std::fs::read_to_string(path).map_err(|source| VizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded plot style from {}", path.display());
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VizConfig::default();
        assert_eq!(config.contour_lines.levels, 12);
        assert_eq!(config.contour_lines.color, "dimgray");
        assert_eq!(config.filled_contour.levels, 100);
        assert_eq!(config.filled_contour.colormap.to_string(), "YlOrBr_r");
        assert_eq!(config.line.width, 2.0);
        assert_eq!(config.surface.opacity, 0.61803);
        assert_eq!(config.surface.edge_color.as_deref(), Some("dimgray"));
        assert!(config.surface.floor_contours);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{
            "filled_contour": { "colormap": "viridis", "levels": 20 },
            "line": { "color": "black" }
        }"#;
        let config = VizConfig::from_json_str(json).unwrap();
        assert_eq!(config.filled_contour.colormap.to_string(), "viridis");
        assert_eq!(config.filled_contour.levels, 20);
        assert_eq!(config.filled_contour.opacity, 0.61803);
        assert_eq!(config.line.color.as_deref(), Some("black"));
        assert_eq!(config.line.width, 2.0);
        assert_eq!(config.contour_lines, ContourLinesConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            VizConfig::from_json_str(r#"{ "surface": { "colormap": "rainbow" } }"#),
            Err(VizError::Config(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");
        std::fs::write(&path, r#"{ "contour_lines": { "levels": 6 } }"#).unwrap();
        let config = VizConfig::from_json_file(&path).unwrap();
        assert_eq!(config.contour_lines.levels, 6);

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            VizConfig::from_json_file(&missing),
            Err(VizError::Io { .. })
        ));
    }
}
