use geo::{Coord, Rect};

/// Bounding rectangle of a set of coordinates, or None if empty.
pub(crate) fn bounds_of(coords: impl IntoIterator<Item = Coord<f64>>) -> Option<Rect<f64>> {
    coords.into_iter()
        .map(|c| Rect::new(c, c))
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}

/// Grow `rect` by `fraction` of its span on every side.
/// Zero-width or zero-height spans are widened to `min_span` so the result always has area.
pub(crate) fn pad(rect: Rect<f64>, fraction: f64, min_span: f64) -> Rect<f64> {
    let dx = (rect.width() * fraction).max(if rect.width() > 0.0 { 0.0 } else { min_span / 2.0 });
    let dy = (rect.height() * fraction).max(if rect.height() > 0.0 { 0.0 } else { min_span / 2.0 });
    Rect::new(
        Coord { x: rect.min().x - dx, y: rect.min().y - dy },
        Coord { x: rect.max().x + dx, y: rect.max().y + dy },
    )
}
