mod axes;
mod figure;
mod svg;
mod target;

pub use figure::Figure;
pub use target::{RenderTarget, SvgFile, SvgTarget};
