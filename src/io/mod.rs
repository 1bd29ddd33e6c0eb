//! IO module for format-specific reading and writing operations.
//!
//! - `geojson` - reading boundary and point geometries from FeatureCollections
//! - `svg` - SVG document writers for figure export

pub(crate) mod geojson;
pub(crate) mod svg;

pub use geojson::{load_boundary, load_points, read_first_geometry};
