use std::{fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Directory (next to the executable by default) holding the input files.
pub const DEFAULT_DATA_DIR: &str = "Khank";
pub const DEFAULT_BOUNDARY_FILE: &str = "Boundary.geojson";
pub const DEFAULT_POINTS_FILE: &str = "Offshorewindmills.geojson";
pub const DEFAULT_OUTPUT_FILE: &str = "layout.svg";

/// Where to read inputs from and where to write the figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub boundary_path: PathBuf,
    pub points_path: PathBuf,
    pub output_path: PathBuf,
    pub style: FigureStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::in_dir(Path::new(DEFAULT_DATA_DIR))
    }
}

impl LayoutConfig {
    /// Explicit input paths; output and style use defaults.
    pub fn new(boundary_path: impl Into<PathBuf>, points_path: impl Into<PathBuf>) -> Self {
        Self {
            boundary_path: boundary_path.into(),
            points_path: points_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            style: FigureStyle::default(),
        }
    }

    /// The fixed file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_BOUNDARY_FILE), dir.join(DEFAULT_POINTS_FILE))
    }

    /// Default layout next to the running executable, falling back to the working directory.
    pub fn beside_executable() -> Self {
        let base = std::env::current_exe().ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(&base.join(DEFAULT_DATA_DIR))
    }

    /// Read a JSON config file. Relative paths inside it resolve against the file's directory.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .map_err(|source| Error::ConfigIo { path: path.to_path_buf(), source })?;
        let config: Self = serde_json::from_slice(&bytes)
            .map_err(|source| Error::ConfigFormat { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "loaded layout config");

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.resolve_relative(base))
    }

    /// Rebase every relative path onto `base`.
    pub fn resolve_relative(self, base: &Path) -> Self {
        let rebase = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        Self {
            boundary_path: rebase(self.boundary_path),
            points_path: rebase(self.points_path),
            output_path: rebase(self.output_path),
            style: self.style,
        }
    }
}

/// Cosmetics of the rendered figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    /// Canvas size in px.
    pub width: f64,
    pub height: f64,
    /// Space around the plot area for tick and axis labels, px.
    pub margin: f64,
    pub boundary_color: String,
    pub boundary_width: f64,
    pub marker_color: String,
    pub marker_radius: f64,
    pub grid_color: String,
    pub x_label: String,
    pub y_label: String,
    pub label_font_size: f64,
    pub tick_font_size: f64,
    /// Approximate number of grid lines per axis.
    pub ticks: usize,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 700.0,
            margin: 80.0,
            boundary_color: "#000000".to_string(),
            boundary_width: 2.0,
            marker_color: "#ff0000".to_string(),
            marker_radius: 1.8,
            grid_color: "#b0b0b0".to_string(),
            x_label: "X-UTM Coordinates".to_string(),
            y_label: "Y-UTM Coordinates".to_string(),
            label_font_size: 12.0,
            tick_font_size: 10.0,
            ticks: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_uses_fixed_names() {
        let config = LayoutConfig::in_dir(Path::new("/data/site"));
        assert_eq!(config.boundary_path, Path::new("/data/site/Boundary.geojson"));
        assert_eq!(config.points_path, Path::new("/data/site/Offshorewindmills.geojson"));
        assert_eq!(config.output_path, Path::new("layout.svg"));
    }

    #[test]
    fn beside_executable_ends_in_data_dir() {
        let config = LayoutConfig::beside_executable();
        assert!(config.boundary_path.ends_with("Khank/Boundary.geojson"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: LayoutConfig = serde_json::from_str(r##"{
            "points_path": "turbines.geojson",
            "style": { "marker_color": "#0000ff" }
        }"##).unwrap();
        assert_eq!(config.points_path, Path::new("turbines.geojson"));
        assert_eq!(config.boundary_path, Path::new("Khank/Boundary.geojson"));
        assert_eq!(config.style.marker_color, "#0000ff");
        assert_eq!(config.style.boundary_width, 2.0);
    }

    #[test]
    fn relative_paths_rebase() {
        let config = LayoutConfig::new("a.geojson", "/abs/b.geojson").resolve_relative(Path::new("/cfg"));
        assert_eq!(config.boundary_path, Path::new("/cfg/a.geojson"));
        assert_eq!(config.points_path, Path::new("/abs/b.geojson"));
        assert_eq!(config.output_path, Path::new("/cfg/layout.svg"));
    }
}
