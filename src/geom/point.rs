use geo::Coord;
use serde::Serialize;

use crate::proj::UtmZone;

/// WGS84 lon/lat in degrees (x = longitude, y = latitude).
pub type GeographicPoint = Coord<f64>;

/// Easting/northing in meters, tagged with the UTM zone it was projected into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
    pub zone: UtmZone,
}

impl ProjectedPoint {
    #[inline]
    pub fn new(easting: f64, northing: f64, zone: UtmZone) -> Self {
        Self { easting, northing, zone }
    }

    /// Planar coordinate (x = easting, y = northing).
    #[inline]
    pub fn coord(&self) -> Coord<f64> {
        Coord { x: self.easting, y: self.northing }
    }
}
