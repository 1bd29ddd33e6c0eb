use geo::{Coord, LineString};

use crate::{GeometryError, geom::GeographicPoint};

/// Site boundary as an ordered polyline of lon/lat points (at least two).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRing(LineString<f64>);

impl BoundaryRing {
    pub fn new(coords: Vec<GeographicPoint>) -> Result<Self, GeometryError> {
        match coords.len() {
            0 => Err(GeometryError::Empty),
            1 => Err(GeometryError::TooFewPoints { count: 1 }),
            _ => Ok(Self(LineString(coords))),
        }
    }

    #[inline] pub fn coords(&self) -> &[Coord<f64>] { &self.0.0 }

    #[inline] pub fn len(&self) -> usize { self.0.0.len() }

    /// Never true for a constructed ring.
    #[inline] pub fn is_empty(&self) -> bool { self.0.0.is_empty() }

    /// True if the first and last points coincide.
    #[inline] pub fn is_closed(&self) -> bool { self.0.is_closed() }
}

/// Discrete locations (e.g. turbine positions) as lon/lat points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet(Vec<GeographicPoint>);

impl PointSet {
    pub fn new(coords: Vec<GeographicPoint>) -> Result<Self, GeometryError> {
        if coords.is_empty() { return Err(GeometryError::Empty) }
        Ok(Self(coords))
    }

    #[inline] pub fn coords(&self) -> &[Coord<f64>] { &self.0 }

    #[inline] pub fn len(&self) -> usize { self.0.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord<f64> { Coord { x, y } }

    #[test]
    fn boundary_needs_two_points() {
        assert_eq!(BoundaryRing::new(vec![]), Err(GeometryError::Empty));
        assert_eq!(
            BoundaryRing::new(vec![c(10.0, 50.0)]),
            Err(GeometryError::TooFewPoints { count: 1 }),
        );

        let ring = BoundaryRing::new(vec![c(10.0, 50.0), c(10.1, 50.0)]).unwrap();
        assert_eq!(ring.len(), 2);
        assert!(!ring.is_closed());
    }

    #[test]
    fn closed_ring_is_detected() {
        let ring = BoundaryRing::new(vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 0.0)]).unwrap();
        assert!(ring.is_closed());
    }

    #[test]
    fn point_set_keeps_order() {
        assert_eq!(PointSet::new(vec![]), Err(GeometryError::Empty));
        let points = PointSet::new(vec![c(10.2, 50.3), c(10.0, 50.0)]).unwrap();
        assert_eq!(points.coords(), &[c(10.2, 50.3), c(10.0, 50.0)]);
    }
}
