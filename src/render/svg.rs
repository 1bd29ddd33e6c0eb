use std::io::Write;

use geo::{Coord, CoordsIter, LineString};

use crate::{
    Error, Result,
    geom::ProjectedPoint,
    io::svg::{write_svg_footer, write_svg_header, write_svg_styles},
    layout::FigureStyle,
    render::{
        Figure,
        axes::{Viewport, format_tick, nice_step, ticks},
    },
};

/// Projection function: meters -> SVG coords (x,y)
type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

/// Write a complete SVG document for `figure`.
pub(crate) fn write_figure<W: Write>(writer: &mut W, figure: &Figure, style: &FigureStyle) -> Result<()> {
    let extents = figure.extents().ok_or(Error::EmptyFigure)?;
    let viewport = Viewport::fit(extents, style);
    let project = move |coord: &Coord<f64>| viewport.project(coord);

    write_svg_header(writer, style, &viewport.world(), &figure.crs_label())?;
    write_svg_styles(writer, style)?;
    draw_grid(writer, &viewport, style)?;
    draw_boundary(writer, &figure.boundary_line(), &project)?;
    draw_markers(writer, figure.points(), style.marker_radius, &project)?;
    draw_axis_labels(writer, &viewport, style)?;
    write_svg_footer(writer)
}

/// Draw the boundary as one open polyline (the last point is not joined back to the first).
fn draw_boundary(writer: &mut impl Write, line: &LineString<f64>, project: &Projection) -> Result<()> {
    if line.0.is_empty() { return Ok(()) }
    writeln!(writer, r#"<polyline class="boundary" points="{}"/>"#, line_to_points(line, project))?;
    Ok(())
}

/// Draw one marker per point, unconnected.
fn draw_markers(writer: &mut impl Write, points: &[ProjectedPoint], radius: f64, project: &Projection) -> Result<()> {
    for point in points {
        let (cx, cy) = project(&point.coord());
        writeln!(writer, r#"<circle class="marker" cx="{cx:.3}" cy="{cy:.3}" r="{radius}"/>"#)?;
    }
    Ok(())
}

/// Build an SVG points string for a LineString.
fn line_to_points(line: &LineString<f64>, project: &Projection) -> String {
    let mut out = String::new();

    for (i, coord) in line.coords_iter().enumerate() {
        let (x, y) = project(&coord);
        if i > 0 { out.push(' ') }
        out.push_str(&format!("{x:.3},{y:.3}"));
    }

    out
}

/// Grid lines with tick labels on the left and bottom edges, plus the frame.
fn draw_grid(writer: &mut impl Write, viewport: &Viewport, style: &FigureStyle) -> Result<()> {
    let world = viewport.world();
    let (left, top, width, height) = viewport.area();
    let (right, bottom) = (left + width, top + height);

    let x_step = nice_step(world.width(), style.ticks);
    for x in ticks(world.min().x, world.max().x, style.ticks) {
        let (px, _) = viewport.project(&Coord { x, y: world.min().y });
        writeln!(writer, r#"<line class="grid" x1="{px:.3}" y1="{top:.3}" x2="{px:.3}" y2="{bottom:.3}"/>"#)?;
        writeln!(writer, r#"<text class="tick" x="{px:.3}" y="{:.3}" text-anchor="middle">{}</text>"#,
            bottom + style.tick_font_size + 4.0,
            format_tick(x, x_step),
        )?;
    }

    let y_step = nice_step(world.height(), style.ticks);
    for y in ticks(world.min().y, world.max().y, style.ticks) {
        let (_, py) = viewport.project(&Coord { x: world.min().x, y });
        writeln!(writer, r#"<line class="grid" x1="{left:.3}" y1="{py:.3}" x2="{right:.3}" y2="{py:.3}"/>"#)?;
        writeln!(writer, r#"<text class="tick" x="{:.3}" y="{py:.3}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            left - 6.0,
            format_tick(y, y_step),
        )?;
    }

    writeln!(writer, r#"<rect class="frame" x="{left:.3}" y="{top:.3}" width="{width:.3}" height="{height:.3}"/>"#)?;
    Ok(())
}

fn draw_axis_labels(writer: &mut impl Write, viewport: &Viewport, style: &FigureStyle) -> Result<()> {
    let (left, top, width, height) = viewport.area();

    let x = left + width / 2.0;
    let y = top + height + style.tick_font_size + style.label_font_size + 14.0;
    writeln!(writer, r#"<text class="label" x="{x:.3}" y="{y:.3}" text-anchor="middle">{}</text>"#, escape(&style.x_label))?;

    // Rotated label sits left of the tick labels.
    let x = (left - style.margin * 0.8).max(style.label_font_size);
    let y = top + height / 2.0;
    writeln!(writer, r#"<text class="label" x="{x:.3}" y="{y:.3}" text-anchor="middle" transform="rotate(-90 {x:.3} {y:.3})">{}</text>"#, escape(&style.y_label))?;
    Ok(())
}

/// Escape text content for XML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
