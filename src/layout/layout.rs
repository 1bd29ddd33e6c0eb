use tracing::{debug, info, warn};

use crate::{
    Result,
    geom::{BoundaryRing, PointSet},
    io::geojson::{load_boundary, load_points},
    layout::LayoutConfig,
    proj::{Reproject, UtmReprojector},
    render::{Figure, RenderTarget},
};

/// Site boundary and point locations in lon/lat, as loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLayout {
    boundary: BoundaryRing,
    points: PointSet,
}

impl SiteLayout {
    pub fn new(boundary: BoundaryRing, points: PointSet) -> Self {
        Self { boundary, points }
    }

    /// Read the boundary file, then the points file. Fails on the first bad input.
    pub fn load(config: &LayoutConfig) -> Result<Self> {
        debug!(path = %config.boundary_path.display(), "loading boundary");
        let boundary = load_boundary(&config.boundary_path)?;

        debug!(path = %config.points_path.display(), "loading points");
        let points = load_points(&config.points_path)?;

        info!(boundary = boundary.len(), points = points.len(), closed = boundary.is_closed(), "loaded site layout");
        Ok(Self { boundary, points })
    }

    #[inline] pub fn boundary(&self) -> &BoundaryRing { &self.boundary }

    #[inline] pub fn points(&self) -> &PointSet { &self.points }

    /// Reproject every boundary vertex and point.
    pub fn project<R: Reproject + ?Sized>(&self, reprojector: &R) -> Result<Figure> {
        let boundary = reprojector.project_all(self.boundary.coords())?;
        let points = reprojector.project_all(self.points.coords())?;
        let figure = Figure::new(boundary, points);

        let zones = figure.zones();
        if zones.len() > 1 {
            warn!(zones = ?zones, "layout spans more than one UTM zone; positions are not comparable across zones");
        }
        if let Some(extents) = figure.extents() {
            info!(
                crs = %figure.crs_label(),
                width_m = extents.width(),
                height_m = extents.height(),
                "projected layout"
            );
        }
        Ok(figure)
    }
}

/// Load, reproject into UTM, and render in one go.
pub fn plot<T: RenderTarget>(config: &LayoutConfig, target: &T) -> Result<T::Output> {
    let layout = SiteLayout::load(config)?;
    let figure = layout.project(&UtmReprojector::new()?)?;
    target.render(&figure)
}
