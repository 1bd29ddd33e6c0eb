mod bounds;
mod point;
mod ring;

pub(crate) use bounds::*;
pub use point::{GeographicPoint, ProjectedPoint};
pub use ring::{BoundaryRing, PointSet};
