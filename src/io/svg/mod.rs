//! SVG format writing operations for figure export.

mod writer;

pub(crate) use writer::*;
