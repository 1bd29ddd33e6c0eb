use std::{io::Write, path::PathBuf};

use tracing::info;

use crate::{
    Error, Result,
    io::svg::{SvgStringWriter, SvgWriter},
    layout::FigureStyle,
    render::{Figure, svg::write_figure},
};

/// Something a figure can be drawn onto.
pub trait RenderTarget {
    type Output;

    fn render(&self, figure: &Figure) -> Result<Self::Output>;
}

/// Renders to an in-memory SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgTarget {
    style: FigureStyle,
}

impl SvgTarget {
    pub fn new(style: FigureStyle) -> Self { Self { style } }
}

impl RenderTarget for SvgTarget {
    type Output = String;

    fn render(&self, figure: &Figure) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        write_figure(&mut writer, figure, &self.style)?;
        writer.into_string()
    }
}

/// Renders to an SVG file; the output is the written path.
#[derive(Debug, Clone)]
pub struct SvgFile {
    path: PathBuf,
    style: FigureStyle,
}

impl SvgFile {
    pub fn new(path: impl Into<PathBuf>, style: FigureStyle) -> Self {
        Self { path: path.into(), style }
    }
}

impl RenderTarget for SvgFile {
    type Output = PathBuf;

    fn render(&self, figure: &Figure) -> Result<PathBuf> {
        let mut writer = SvgWriter::new(&self.path)?;
        write_figure(&mut writer, figure, &self.style).map_err(|err| match err {
            Error::Format(source) => Error::Output { path: self.path.clone(), source },
            other => other,
        })?;
        writer.flush()
            .map_err(|source| Error::Output { path: self.path.clone(), source })?;

        info!(path = %self.path.display(), "wrote figure");
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{geom::ProjectedPoint, proj::{Hemisphere, UtmZone}};

    fn figure(markers: usize) -> Figure {
        let zone = UtmZone::new(32, Hemisphere::North).unwrap();
        let p = |e: f64, n: f64| ProjectedPoint::new(e, n, zone);
        let points = (0..markers).map(|i| p(500_000.0 + i as f64, 5_540_000.0 + i as f64)).collect();
        Figure::new(vec![p(500_000.0, 5_540_000.0), p(501_000.0, 5_541_000.0)], points)
    }

    #[test]
    fn svg_target_returns_document() {
        let svg = SvgTarget::default().render(&figure(2)).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn empty_figure_is_not_an_output_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = SvgFile::new(dir.path().join("empty.svg"), FigureStyle::default());
        let err = target.render(&Figure::new(vec![], vec![])).unwrap_err();
        assert!(matches!(err, Error::EmptyFigure));
    }

    // Enough markers to overflow the write buffer before the final flush.
    #[cfg(target_os = "linux")]
    #[test]
    fn write_failure_mid_figure_reports_output_path() {
        let target = SvgFile::new("/dev/full", FigureStyle::default());
        let err = target.render(&figure(2_000)).unwrap_err();
        assert!(matches!(&err, Error::Output { path, .. } if path == Path::new("/dev/full")), "{err:?}");
    }
}
