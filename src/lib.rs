#![doc = "farmplot public API"]
mod error;
mod geom;
mod io;
mod layout;
mod proj;
mod render;

#[doc(inline)]
pub use error::{Error, GeometryError, LoadError, ProjectionError, Result};

#[doc(inline)]
pub use geom::{BoundaryRing, GeographicPoint, PointSet, ProjectedPoint};

#[doc(inline)]
pub use io::{load_boundary, load_points, read_first_geometry};

#[doc(inline)]
pub use layout::{FigureStyle, LayoutConfig, SiteLayout, plot};

#[doc(inline)]
pub use layout::{DEFAULT_BOUNDARY_FILE, DEFAULT_DATA_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_POINTS_FILE};

#[doc(inline)]
pub use proj::{Hemisphere, Reproject, UtmReprojector, UtmZone, zone_number};

#[doc(inline)]
pub use render::{Figure, RenderTarget, SvgFile, SvgTarget};
