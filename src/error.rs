use std::path::PathBuf;

use thiserror::Error;

use crate::proj::UtmZone;

/// Result alias for the public API.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Structural problems in a GeoJSON document or its extracted coordinates.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("missing `{0}`")]
    Missing(&'static str),

    #[error("invalid {what}: {reason}")]
    Invalid { what: &'static str, reason: String },

    #[error("unsupported geometry type {0:?}")]
    Unsupported(String),

    #[error("{kind} geometry cannot be used as {expected}")]
    WrongKind { kind: &'static str, expected: &'static str },

    #[error("geometry has no coordinates")]
    Empty,

    #[error("boundary needs at least two points, found {count}")]
    TooFewPoints { count: usize },
}

/// Failure while loading an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("[io::geojson] failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[io::geojson] {} is not valid JSON", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("[io::geojson] malformed geometry in {}", .path.display())]
    Geometry {
        path: PathBuf,
        #[source]
        source: GeometryError,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Json { path, .. }
            | LoadError::Geometry { path, .. } => path,
        }
    }
}

/// Failure while reprojecting a coordinate.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("coordinate out of range: lon={lon}, lat={lat}")]
    OutOfRange { lon: f64, lat: f64 },

    #[error("invalid UTM zone number {0} (expected 1..=60)")]
    InvalidZone(u8),

    #[error("failed to build CRS from `{definition}`: {message}")]
    InvalidCrs { definition: String, message: String },

    #[error("transform into {zone} failed: {message}")]
    Transform { zone: UtmZone, message: String },
}

/// Top-level error for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("[layout::config] failed to read {}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[layout::config] invalid config {}", .path.display())]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("[render] figure has nothing to draw")]
    EmptyFigure,

    #[error("[render::svg] failed to write {}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[render::svg] failed to format SVG")]
    Format(#[from] std::io::Error),
}
