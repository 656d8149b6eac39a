//! Rendering backends and block layout
//!
//! `surface` defines the capability traits the core draws through;
//! `block` lays out one chunk; `svg` and `ansi` are the two concrete
//! backends.

pub mod ansi;
pub mod block;
pub mod surface;
pub mod svg;

pub use ansi::AnsiPreview;
pub use block::{draw_chunk, BlockGeometry};
pub use surface::{DocumentSink, HeadingStyle, MonoMetrics, RenderSurface};
pub use svg::SvgDocument;
