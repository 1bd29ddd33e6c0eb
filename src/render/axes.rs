use geo::{Coord, Rect};

use crate::{geom::pad, layout::FigureStyle};

/// Fraction of the data span added on each side before fitting.
const PADDING: f64 = 0.05;

/// Smallest axis span in meters (a single point still gets a readable grid).
const MIN_SPAN: f64 = 100.0;

/// Maps planar meters onto the plot area of the canvas, with equal scale on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    // plot area, px
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    // visible world range, meters
    world: Rect<f64>,
    // px per meter
    scale: f64,
}

impl Viewport {
    /// Fit `extents` (meters) into the canvas described by `style`, centered, aspect preserved.
    pub(crate) fn fit(extents: Rect<f64>, style: &FigureStyle) -> Self {
        let extents = pad(extents, PADDING, MIN_SPAN);

        let left = style.margin;
        let top = style.margin * 0.5;
        let width = (style.width - style.margin * 1.5).max(1.0);
        let height = (style.height - style.margin * 1.5).max(1.0);

        let scale = (width / extents.width()).min(height / extents.height());
        let center = extents.center();
        let half = Coord { x: width / scale / 2.0, y: height / scale / 2.0 };
        let world = Rect::new(center - half, center + half);

        Self { left, top, width, height, world, scale }
    }

    /// Meters → canvas px (Y down).
    #[inline]
    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.left + (coord.x - self.world.min().x) * self.scale;
        let y = self.top + (self.world.max().y - coord.y) * self.scale;
        (x, y)
    }

    /// Visible range in meters.
    #[inline] pub(crate) fn world(&self) -> Rect<f64> { self.world }

    /// Plot area as (left, top, width, height) in px.
    #[inline] pub(crate) fn area(&self) -> (f64, f64, f64, f64) { (self.left, self.top, self.width, self.height) }
}

/// Round `span / target` up to 1, 2 or 5 times a power of ten.
pub(crate) fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 { 1.0 }
        else if residual <= 2.0 { 2.0 }
        else if residual <= 5.0 { 5.0 }
        else { 10.0 };
    nice * magnitude
}

/// Tick positions at multiples of a nice step within [min, max].
pub(crate) fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || !min.is_finite() || !max.is_finite() { return vec![] }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Format a tick value with as many decimals as the step needs.
pub(crate) fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    // avoid "-0"
    let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{value:.decimals$}")
}
