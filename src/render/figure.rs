use std::collections::BTreeSet;

use geo::{LineString, Rect};
use serde::Serialize;

use crate::{
    geom::{ProjectedPoint, bounds_of},
    proj::UtmZone,
};

/// Projected boundary polyline and point markers, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    boundary: Vec<ProjectedPoint>,
    points: Vec<ProjectedPoint>,
}

impl Figure {
    pub fn new(boundary: Vec<ProjectedPoint>, points: Vec<ProjectedPoint>) -> Self {
        Self { boundary, points }
    }

    #[inline] pub fn boundary(&self) -> &[ProjectedPoint] { &self.boundary }

    #[inline] pub fn points(&self) -> &[ProjectedPoint] { &self.points }

    #[inline] pub fn is_empty(&self) -> bool { self.boundary.is_empty() && self.points.is_empty() }

    /// Boundary as an open polyline in meters.
    pub fn boundary_line(&self) -> LineString<f64> {
        self.boundary.iter().map(ProjectedPoint::coord).collect()
    }

    /// Bounding rectangle of boundary and points, in meters.
    pub fn extents(&self) -> Option<Rect<f64>> {
        bounds_of(self.boundary.iter().chain(&self.points).map(ProjectedPoint::coord))
    }

    /// Distinct UTM zones used, in order.
    pub fn zones(&self) -> Vec<UtmZone> {
        self.boundary.iter().chain(&self.points)
            .map(|p| p.zone)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Label for the figure's CRS, e.g. "EPSG:32632" or "EPSG:32631,EPSG:32632".
    pub(crate) fn crs_label(&self) -> String {
        self.zones().iter()
            .map(|zone| format!("EPSG:{}", zone.epsg()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::Hemisphere;

    fn p(e: f64, n: f64, zone: u8) -> ProjectedPoint {
        ProjectedPoint::new(e, n, UtmZone::new(zone, Hemisphere::North).unwrap())
    }

    #[test]
    fn extents_cover_boundary_and_points() {
        let figure = Figure::new(
            vec![p(100.0, 200.0, 32), p(300.0, 250.0, 32)],
            vec![p(50.0, 400.0, 32)],
        );
        let rect = figure.extents().unwrap();
        assert_eq!((rect.min().x, rect.min().y), (50.0, 200.0));
        assert_eq!((rect.max().x, rect.max().y), (300.0, 400.0));
        assert_eq!(figure.boundary_line().0.len(), 2);
    }

    #[test]
    fn zones_are_deduplicated() {
        let figure = Figure::new(vec![p(0.0, 0.0, 32), p(1.0, 1.0, 31)], vec![p(2.0, 2.0, 32)]);
        let zones: Vec<u8> = figure.zones().iter().map(UtmZone::number).collect();
        assert_eq!(zones, vec![31, 32]);
        assert_eq!(figure.crs_label(), "EPSG:32631,EPSG:32632");
    }

    #[test]
    fn empty_figure_has_no_extents() {
        let figure = Figure::new(vec![], vec![]);
        assert!(figure.is_empty());
        assert!(figure.extents().is_none());
        assert!(figure.zones().is_empty());
    }
}
