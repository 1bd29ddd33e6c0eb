use proj4rs::{proj::Proj as Proj4, transform::transform};
use tracing::trace;

use crate::{
    ProjectionError,
    geom::{GeographicPoint, ProjectedPoint},
    proj::UtmZone,
};

/// PROJ.4 string for the source geographic CRS (EPSG:4326).
const WGS84_LONGLAT: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

/// Forward projection from lon/lat to a planar CRS.
pub trait Reproject {
    /// Project a single lon/lat coordinate (degrees) to easting/northing (meters).
    fn project(&self, coord: GeographicPoint) -> Result<ProjectedPoint, ProjectionError>;

    /// Project a sequence, preserving order. Stops at the first failure.
    fn project_all(&self, coords: &[GeographicPoint]) -> Result<Vec<ProjectedPoint>, ProjectionError> {
        coords.iter().map(|&coord| self.project(coord)).collect()
    }
}

/// Reject non-finite values and anything outside lon [-180,180] / lat [-90,90].
fn check_range(coord: GeographicPoint) -> Result<(), ProjectionError> {
    let GeographicPoint { x: lon, y: lat } = coord;
    if !(lon.is_finite() && lat.is_finite())
        || !(-180.0..=180.0).contains(&lon)
        || !(-90.0..=90.0).contains(&lat)
    {
        return Err(ProjectionError::OutOfRange { lon, lat })
    }
    Ok(())
}

fn build_proj(definition: &str) -> Result<Proj4, ProjectionError> {
    Proj4::from_proj_string(definition)
        .map_err(|e| ProjectionError::InvalidCrs {
            definition: definition.to_string(),
            message: e.to_string(),
        })
}

/// WGS84 lon/lat → UTM, with the zone chosen per coordinate from its longitude and latitude sign.
pub struct UtmReprojector {
    source: Proj4,
}

impl UtmReprojector {
    pub fn new() -> Result<Self, ProjectionError> {
        Ok(Self { source: build_proj(WGS84_LONGLAT)? })
    }

    /// Project into an explicit zone instead of the one selected from the coordinate.
    pub fn project_in(&self, coord: GeographicPoint, zone: UtmZone) -> Result<ProjectedPoint, ProjectionError> {
        check_range(coord)?;
        let target = build_proj(&zone.proj4())?;

        // proj4rs takes (x = lon, y = lat) in radians for longlat and returns meters.
        let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
        transform(&self.source, &target, &mut point)
            .map_err(|e| ProjectionError::Transform { zone, message: e.to_string() })?;

        if !(point.0.is_finite() && point.1.is_finite()) {
            return Err(ProjectionError::Transform { zone, message: "non-finite result".to_string() })
        }

        trace!(lon = coord.x, lat = coord.y, easting = point.0, northing = point.1, %zone, "projected");
        Ok(ProjectedPoint::new(point.0, point.1, zone))
    }

    /// Inverse projection back to lon/lat degrees using the point's own zone.
    pub fn unproject(&self, point: &ProjectedPoint) -> Result<GeographicPoint, ProjectionError> {
        let zone = point.zone;
        let from = build_proj(&zone.proj4())?;

        let mut coord = (point.easting, point.northing, 0.0);
        transform(&from, &self.source, &mut coord)
            .map_err(|e| ProjectionError::Transform { zone, message: e.to_string() })?;

        Ok(GeographicPoint { x: coord.0.to_degrees(), y: coord.1.to_degrees() })
    }
}

impl Reproject for UtmReprojector {
    fn project(&self, coord: GeographicPoint) -> Result<ProjectedPoint, ProjectionError> {
        self.project_in(coord, UtmZone::for_coord(coord.x, coord.y))
    }
}
