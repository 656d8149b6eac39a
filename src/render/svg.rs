//! SVG document backend
//!
//! Emits the whole run as one self-contained SVG: US letter pages
//! stacked vertically, each with the theme's page background, blocks
//! flowed top to bottom inside the margins. Nothing here knows about
//! chunks or highlighting; it only honors the surface and sink
//! contracts.

use std::fs;
use std::path::PathBuf;

use crate::error::{RenderError, Result};
use crate::render::surface::{DocumentSink, HeadingStyle, MonoMetrics, RenderSurface};
use crate::theme::{FontVariant, Rgb, ThemePalette};

/// US letter, in points
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

/// 0.75 inch margins
const MARGIN: f32 = 54.0;

/// Gap between stacked pages
const PAGE_GAP: f32 = 24.0;

const MONO_FAMILY: &str = "Courier New, Courier, monospace";
const HEADING_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Escape text content for XML
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn font_attrs(variant: FontVariant) -> &'static str {
    match variant {
        FontVariant::Regular => "",
        FontVariant::Bold => " font-weight=\"bold\"",
        FontVariant::Italic => " font-style=\"italic\"",
    }
}

/// Surface that appends SVG elements at a fixed block offset
struct SvgSurface {
    buf: String,
    ox: f32,
    oy: f32,
    metrics: MonoMetrics,
}

impl SvgSurface {
    fn new(ox: f32, oy: f32) -> Self {
        Self {
            buf: String::new(),
            ox,
            oy,
            metrics: MonoMetrics::default(),
        }
    }
}

impl RenderSurface for SvgSurface {
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb, variant: FontVariant, size: f32) {
        self.buf.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-family=\"{}\" font-size=\"{:.1}\"{} xml:space=\"preserve\">{}</text>\n",
            self.ox + x,
            self.oy + y,
            color.to_hex(),
            MONO_FAMILY,
            size,
            font_attrs(variant),
            escape(text),
        ));
    }

    fn text_width(&self, text: &str, _variant: FontVariant, size: f32) -> f32 {
        self.metrics.text_width(text, size)
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.buf.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            self.ox + x,
            self.oy + y,
            width,
            height,
            color.to_hex(),
        ));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32) {
        self.buf.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.1}\"/>\n",
            self.ox + x1,
            self.oy + y1,
            self.ox + x2,
            self.oy + y2,
            color.to_hex(),
            width,
        ));
    }
}

/// Paginated SVG document writer
pub struct SvgDocument {
    path: PathBuf,
    theme: ThemePalette,
    /// Completed pages, element markup only
    pages: Vec<String>,
    /// Elements of the page being filled
    current: String,
    /// Flow position on the current page
    cursor: f32,
}

impl SvgDocument {
    pub fn new(path: impl Into<PathBuf>, theme: &ThemePalette) -> Self {
        Self {
            path: path.into(),
            theme: theme.clone(),
            pages: Vec::new(),
            current: String::new(),
            cursor: MARGIN,
        }
    }

    /// Number of pages, counting the one in progress
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    fn close_page(&mut self) {
        let elements = std::mem::take(&mut self.current);
        self.pages.push(elements);
        self.cursor = MARGIN;
    }

    /// Start a new page if the current one cannot fit `height`
    fn ensure_space(&mut self, height: f32) {
        if self.cursor + height > PAGE_HEIGHT - MARGIN && self.cursor > MARGIN {
            self.close_page();
        }
    }

    fn heading_metrics(style: HeadingStyle) -> (f32, f32) {
        // (font size, flow advance)
        match style {
            HeadingStyle::Title => (18.0, 30.0),
            HeadingStyle::FileHeader => (12.0, 26.0),
            HeadingStyle::Info => (10.0, 16.0),
        }
    }
}

impl DocumentSink for SvgDocument {
    fn add_heading(&mut self, text: &str, style: HeadingStyle) -> Result<()> {
        let (size, advance) = Self::heading_metrics(style);
        self.ensure_space(advance);

        match style {
            HeadingStyle::Title => {
                self.current.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-family=\"{}\" font-size=\"{:.1}\" font-weight=\"bold\" text-anchor=\"middle\">{}</text>\n",
                    PAGE_WIDTH / 2.0,
                    self.cursor + size,
                    self.theme.text.to_hex(),
                    HEADING_FAMILY,
                    size,
                    escape(text),
                ));
            }
            HeadingStyle::FileHeader => {
                // Boxed header in the block background color
                self.current.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                    MARGIN,
                    self.cursor,
                    PAGE_WIDTH - 2.0 * MARGIN,
                    advance - 4.0,
                    self.theme.background.to_hex(),
                    self.theme.border.to_hex(),
                ));
                self.current.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-family=\"{}\" font-size=\"{:.1}\" font-weight=\"bold\">{}</text>\n",
                    MARGIN + 5.0,
                    self.cursor + size + 3.0,
                    self.theme.function.to_hex(),
                    HEADING_FAMILY,
                    size,
                    escape(text),
                ));
            }
            HeadingStyle::Info => {
                self.current.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-family=\"{}\" font-size=\"{:.1}\">{}</text>\n",
                    MARGIN,
                    self.cursor + size,
                    self.theme.text_dim.to_hex(),
                    HEADING_FAMILY,
                    size,
                    escape(text),
                ));
            }
        }

        self.cursor += advance;
        Ok(())
    }

    fn add_spacer(&mut self, height: f32) -> Result<()> {
        self.cursor += height;
        Ok(())
    }

    fn add_block(&mut self, height: f32, draw: &mut dyn FnMut(&mut dyn RenderSurface)) -> Result<()> {
        self.ensure_space(height);

        let mut surface = SvgSurface::new(MARGIN, self.cursor);
        draw(&mut surface);
        self.current.push_str(&surface.buf);
        self.cursor += height;
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        if !self.current.is_empty() {
            self.close_page();
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.close_page();
        }

        let count = self.pages.len();
        let total_height = count as f32 * (PAGE_HEIGHT + PAGE_GAP) - PAGE_GAP;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\">\n",
            PAGE_WIDTH, total_height, PAGE_WIDTH, total_height,
        ));
        for (index, page) in self.pages.iter().enumerate() {
            let offset = index as f32 * (PAGE_HEIGHT + PAGE_GAP);
            svg.push_str(&format!("<g transform=\"translate(0,{:.2})\">\n", offset));
            svg.push_str(&format!(
                "<rect x=\"0\" y=\"0\" width=\"{:.0}\" height=\"{:.0}\" fill=\"{}\"/>\n",
                PAGE_WIDTH,
                PAGE_HEIGHT,
                self.theme.page_background.to_hex(),
            ));
            svg.push_str(page);
            svg.push_str("</g>\n");
        }
        svg.push_str("</svg>\n");

        fs::write(&self.path, svg).map_err(|source| RenderError::DocumentFinalize {
            path: self.path.clone(),
            source,
        })
    }
}
