//! Rendering surface and document sink abstractions
//!
//! The core never draws to a concrete backend. A `RenderSurface` is
//! the minimal canvas capability set (text runs with a font variant,
//! width measurement, rectangles and lines); a `DocumentSink` owns
//! page geometry and accepts ordered blocks drawn through a surface.

use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::theme::{FontVariant, Rgb};

/// Minimal drawing capability a backend must provide.
///
/// Coordinates are points with the origin at the top-left of the
/// current block, y growing downward. `y` for text is the baseline.
pub trait RenderSurface {
    /// Draw a text run at a position
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb, variant: FontVariant, size: f32);

    /// Measure the width of a text run in the given variant and size
    fn text_width(&self, text: &str, variant: FontVariant, size: f32) -> f32;

    /// Draw a filled rectangle
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);

    /// Draw a straight line of the given stroke width
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32);
}

/// Glyph metrics for a monospace face.
///
/// Backends that have no font machinery of their own model the
/// classic Courier advance: every cell is `advance_em` of the point
/// size, with wide characters counted as two cells.
#[derive(Debug, Clone, Copy)]
pub struct MonoMetrics {
    /// Horizontal advance per cell, as a fraction of the point size
    pub advance_em: f32,
}

impl Default for MonoMetrics {
    fn default() -> Self {
        // Courier's advance width
        Self { advance_em: 0.6 }
    }
}

impl MonoMetrics {
    /// Width of a text run at the given point size
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        UnicodeWidthStr::width(text) as f32 * size * self.advance_em
    }
}

/// Heading styles a document sink renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Large centered assignment title
    Title,
    /// Boxed per-file header
    FileHeader,
    /// Small dimmed info line
    Info,
}

/// Ordered consumer of document content.
///
/// The sink owns page layout: margins, page breaks and page
/// backgrounds. Blocks are drawn through the surface handed to the
/// `draw` callback, positioned at the block's own origin.
pub trait DocumentSink {
    /// Append a heading line
    fn add_heading(&mut self, text: &str, style: HeadingStyle) -> Result<()>;

    /// Append vertical space
    fn add_spacer(&mut self, height: f32) -> Result<()>;

    /// Append a block of the given height, drawn via the callback
    fn add_block(&mut self, height: f32, draw: &mut dyn FnMut(&mut dyn RenderSurface)) -> Result<()>;

    /// Force the next content onto a fresh page
    fn page_break(&mut self) -> Result<()>;

    /// Assemble and flush the final document
    fn finalize(&mut self) -> Result<()>;
}
