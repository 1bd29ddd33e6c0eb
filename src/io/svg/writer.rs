//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use geo::Rect;

use crate::{Error, Result, layout::FigureStyle};

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer, for callers that want the document in memory.
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        Ok(())
    }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .map_err(|e| Error::Format(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

impl SvgWriter {
    /// Create a new SVG writer to a file path
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|source| Error::Output { path: path.to_path_buf(), source })?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

/// Write the XML declaration, the opening <svg> tag and a white background.
/// `extents` (meters) and `crs` are recorded as data attributes.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, style: &FigureStyle, extents: &Rect<f64>, crs: &str) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width}" height="{height}"
        viewBox="0 0 {width} {height}"
        data-crs="{crs}"
        data-easting-min="{x_min:.3}" data-easting-max="{x_max:.3}"
        data-northing-min="{y_min:.3}" data-northing-max="{y_max:.3}">"##,
        width = style.width,
        height = style.height,
        x_min = extents.min().x,
        x_max = extents.max().x,
        y_min = extents.min().y,
        y_max = extents.max().y,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    Ok(())
}

/// Write the stylesheet for grid, frame, boundary and markers.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W, style: &FigureStyle) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .grid {{ stroke: {grid}; stroke-width: 0.6; stroke-dasharray: 3 3; }}
    .frame {{ fill: none; stroke: #000000; stroke-width: 1; }}
    .tick {{ font-family: sans-serif; font-size: {tick_font}px; fill: #000000; }}
    .label {{ font-family: sans-serif; font-size: {label_font}px; fill: #000000; }}
    .boundary {{ fill: none; stroke: {boundary}; stroke-width: {boundary_width}; stroke-linejoin: round; }}
    .marker {{ fill: {marker}; stroke: none; }}
</style>
</defs>"##,
        grid = style.grid_color,
        tick_font = style.tick_font_size,
        label_font = style.label_font_size,
        boundary = style.boundary_color,
        boundary_width = style.boundary_width,
        marker = style.marker_color,
    )?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
