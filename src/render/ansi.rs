//! Terminal preview backend
//!
//! Rasterizes blocks into a character cell grid and prints them with
//! crossterm styling, so a themed document can be eyeballed without
//! opening the output file. One cell per monospace advance, one row
//! per line height.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::render::surface::{DocumentSink, HeadingStyle, MonoMetrics, RenderSurface};
use crate::theme::{FontVariant, Rgb, ThemePalette};

fn to_term(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// One character cell of the rasterized block
#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    variant: FontVariant,
}

impl Cell {
    fn blank() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
            variant: FontVariant::Regular,
        }
    }
}

/// Cell grid implementing the drawing surface.
///
/// Point coordinates map to cells through the block geometry: columns
/// are monospace advances of the code font, rows are line heights.
struct GridSurface {
    cells: Vec<Vec<Cell>>,
    cell_width: f32,
    cell_height: f32,
    metrics: MonoMetrics,
}

impl GridSurface {
    fn new(width: f32, height: f32, cell_width: f32, cell_height: f32) -> Self {
        let cols = (width / cell_width).ceil() as usize + 1;
        let rows = (height / cell_height).ceil() as usize;
        Self {
            cells: vec![vec![Cell::blank(); cols]; rows.max(1)],
            cell_width,
            cell_height,
            metrics: MonoMetrics::default(),
        }
    }

    fn col(&self, x: f32) -> usize {
        (x / self.cell_width).round() as usize
    }

    fn row(&self, y: f32) -> usize {
        (y / self.cell_height) as usize
    }

    fn put(&mut self, row: usize, col: usize, ch: char, fg: Option<Rgb>, variant: FontVariant) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.ch = ch;
            if fg.is_some() {
                cell.fg = fg;
            }
            cell.variant = variant;
        }
    }
}

impl RenderSurface for GridSurface {
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb, variant: FontVariant, _size: f32) {
        let row = self.row(y);
        let mut col = self.col(x);
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0);
            if width == 0 {
                continue;
            }
            self.put(row, col, ch, Some(color), variant);
            col += width;
        }
    }

    fn text_width(&self, text: &str, _variant: FontVariant, size: f32) -> f32 {
        self.metrics.text_width(text, size)
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let top = self.row(y);
        let bottom = self.row((y + height - 0.01).max(y));
        let left = self.col(x);
        let right = self.col(x + width).saturating_sub(1);
        for row in top..=bottom {
            for col in left..=right {
                if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                    cell.bg = Some(color);
                }
            }
        }
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, _width: f32) {
        if (x1 - x2).abs() < f32::EPSILON {
            // Vertical border
            let col = self.col(x1).min(self.cells[0].len() - 1);
            for row in self.row(y1)..=self.row((y2 - 0.01).max(y1)) {
                self.put(row, col, '│', Some(color), FontVariant::Regular);
            }
        } else {
            // Horizontal border
            let row = self.row(y1).min(self.cells.len() - 1);
            for col in self.col(x1)..self.col(x2) {
                self.put(row, col, '─', Some(color), FontVariant::Regular);
            }
        }
    }
}

/// Document sink printing styled blocks to a terminal writer
pub struct AnsiPreview<W: Write> {
    out: W,
    theme: ThemePalette,
    cell_width: f32,
    cell_height: f32,
}

impl<W: Write> AnsiPreview<W> {
    pub fn new(out: W, theme: &ThemePalette, font_size: f32, line_height: f32) -> Self {
        Self {
            out,
            theme: theme.clone(),
            cell_width: font_size * MonoMetrics::default().advance_em,
            cell_height: line_height,
        }
    }

    fn print_grid(&mut self, grid: &GridSurface) -> Result<()> {
        for row in &grid.cells {
            for cell in row {
                match cell.bg {
                    Some(bg) => queue!(self.out, SetBackgroundColor(to_term(bg)))?,
                    None => queue!(self.out, SetBackgroundColor(Color::Reset))?,
                }
                match cell.fg {
                    Some(fg) => queue!(self.out, SetForegroundColor(to_term(fg)))?,
                    None => queue!(self.out, SetForegroundColor(Color::Reset))?,
                }
                match cell.variant {
                    FontVariant::Bold => queue!(self.out, SetAttribute(Attribute::Bold))?,
                    FontVariant::Italic => queue!(self.out, SetAttribute(Attribute::Italic))?,
                    FontVariant::Regular => {}
                }
                queue!(self.out, Print(cell.ch))?;
                if cell.variant != FontVariant::Regular {
                    queue!(self.out, SetAttribute(Attribute::Reset))?;
                }
            }
            queue!(self.out, ResetColor, Print('\n'))?;
        }
        Ok(())
    }
}

impl<W: Write> DocumentSink for AnsiPreview<W> {
    fn add_heading(&mut self, text: &str, style: HeadingStyle) -> Result<()> {
        let color = match style {
            HeadingStyle::Title => self.theme.text,
            HeadingStyle::FileHeader => self.theme.function,
            HeadingStyle::Info => self.theme.text_dim,
        };
        queue!(self.out, SetForegroundColor(to_term(color)))?;
        if style != HeadingStyle::Info {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.out,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print('\n')
        )?;
        Ok(())
    }

    fn add_spacer(&mut self, height: f32) -> Result<()> {
        let rows = (height / self.cell_height).round() as usize;
        for _ in 0..rows.max(1) {
            queue!(self.out, Print('\n'))?;
        }
        Ok(())
    }

    fn add_block(&mut self, height: f32, draw: &mut dyn FnMut(&mut dyn RenderSurface)) -> Result<()> {
        // Width is bounded by the grid itself; blocks draw within the
        // configured point width
        let mut grid = GridSurface::new(468.0, height, self.cell_width, self.cell_height);
        draw(&mut grid);
        self.print_grid(&grid)
    }

    fn page_break(&mut self) -> Result<()> {
        queue!(self.out, Print('\n'))?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Chunker, LineHighlighter};
    use crate::render::block::{draw_chunk, BlockGeometry};

    fn theme() -> ThemePalette {
        crate::theme::find("kanagawa-wave").unwrap()
    }

    #[test]
    fn test_grid_places_text() {
        let mut grid = GridSurface::new(468.0, 42.0, 4.8, 11.0);
        grid.draw_text(0.0, 18.0, "ab", Rgb { r: 1, g: 2, b: 3 }, FontVariant::Regular, 8.0);
        assert_eq!(grid.cells[1][0].ch, 'a');
        assert_eq!(grid.cells[1][1].ch, 'b');
        assert_eq!(grid.cells[1][0].fg, Some(Rgb { r: 1, g: 2, b: 3 }));
    }

    #[test]
    fn test_grid_fill_rect_sets_background() {
        let mut grid = GridSurface::new(48.0, 22.0, 4.8, 11.0);
        let color = Rgb { r: 9, g: 9, b: 9 };
        grid.fill_rect(0.0, 0.0, 48.0, 22.0, color);
        assert_eq!(grid.cells[0][0].bg, Some(color));
        assert_eq!(grid.cells[1][5].bg, Some(color));
    }

    #[test]
    fn test_preview_renders_chunk() {
        let hl = LineHighlighter::new();
        let lines = vec!["int main() {".to_string(), "}".to_string()];
        let chunks = Chunker::new(55).chunks(&hl, &lines);
        let geometry = BlockGeometry::new(468.0, 11.0, 8.0);

        let palette = theme();
        let mut out: Vec<u8> = Vec::new();
        {
            let mut preview = AnsiPreview::new(&mut out, &palette, 8.0, 11.0);
            preview
                .add_block(geometry.block_height(&chunks[0]), &mut |s| {
                    draw_chunk(s, &chunks[0], &hl, &palette, &geometry)
                })
                .unwrap();
            preview.finalize().unwrap();
        }

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("int"));
        assert!(text.contains("main"));
        assert!(text.contains('│'));
    }

    #[test]
    fn test_heading_written() {
        let palette = theme();
        let mut out: Vec<u8> = Vec::new();
        {
            let mut preview = AnsiPreview::new(&mut out, &palette, 8.0, 11.0);
            preview.add_heading("File: main.cpp", HeadingStyle::FileHeader).unwrap();
            preview.finalize().unwrap();
        }
        assert!(String::from_utf8_lossy(&out).contains("File: main.cpp"));
    }
}
