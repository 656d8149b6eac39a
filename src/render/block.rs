//! Chunk block layout
//!
//! Draws one chunk as a bordered, background-filled block: line number
//! gutter on the left, highlighted code to the right. Drawing a chunk
//! is a pure function of the chunk, the theme and the geometry; it
//! reads nothing outside its arguments and has no effect on any other
//! chunk.

use crate::highlight::{Category, Chunk, LineHighlighter};
use crate::render::surface::RenderSurface;
use crate::theme::ThemePalette;

/// X position of the line number column
const NUMBER_X: f32 = 5.0;

/// X position where code starts
const CODE_X: f32 = 35.0;

/// Padding on a block edge that is also a file edge
const OUTER_PAD: f32 = 10.0;

/// Padding on a block edge shared with an adjacent chunk
const INNER_PAD: f32 = 5.0;

/// Fixed point values for block layout
#[derive(Debug, Clone, Copy)]
pub struct BlockGeometry {
    /// Block width in points (6.5in content width by default)
    pub width: f32,
    /// Vertical advance per line
    pub line_height: f32,
    /// Code font size
    pub font_size: f32,
}

impl BlockGeometry {
    pub fn new(width: f32, line_height: f32, font_size: f32) -> Self {
        Self {
            width,
            line_height,
            font_size,
        }
    }

    fn pad_top(&self, chunk: &Chunk) -> f32 {
        if chunk.is_first {
            OUTER_PAD
        } else {
            INNER_PAD
        }
    }

    fn pad_bottom(&self, chunk: &Chunk) -> f32 {
        if chunk.is_last {
            OUTER_PAD
        } else {
            INNER_PAD
        }
    }

    /// Total height the chunk's block occupies
    pub fn block_height(&self, chunk: &Chunk) -> f32 {
        chunk.lines.len() as f32 * self.line_height + self.pad_top(chunk) + self.pad_bottom(chunk)
    }

    /// Baseline y of the i-th line within the block
    fn baseline(&self, chunk: &Chunk, index: usize) -> f32 {
        self.pad_top(chunk) + (index as f32 + 1.0) * self.line_height - 3.0
    }
}

/// Draw one chunk onto a surface.
///
/// The comment state is threaded from `chunk.entry_state` through the
/// chunk's lines; nothing is carried out of this function.
pub fn draw_chunk(
    surface: &mut dyn RenderSurface,
    chunk: &Chunk,
    highlighter: &LineHighlighter,
    theme: &ThemePalette,
    geometry: &BlockGeometry,
) {
    let height = geometry.block_height(chunk);

    // Background and borders; top/bottom edges only close the file's
    // first and last block so adjacent chunks read as one box
    surface.fill_rect(0.0, 0.0, geometry.width, height, theme.background);
    surface.draw_line(0.0, 0.0, 0.0, height, theme.border, 1.0);
    surface.draw_line(geometry.width, 0.0, geometry.width, height, theme.border, 1.0);
    if chunk.is_first {
        surface.draw_line(0.0, 0.0, geometry.width, 0.0, theme.border, 1.0);
    }
    if chunk.is_last {
        surface.draw_line(0.0, height, geometry.width, height, theme.border, 1.0);
    }

    let mut state = chunk.entry_state;
    for (index, line) in chunk.lines.iter().enumerate() {
        let y = geometry.baseline(chunk, index);

        let number = format!("{:3}", chunk.start_line + index);
        surface.draw_text(
            NUMBER_X,
            y,
            &number,
            theme.line_number,
            crate::theme::FontVariant::Regular,
            geometry.font_size - 1.0,
        );

        let (spans, exit) = highlighter.highlight_line(line, state);
        state = exit;

        let mut x = CODE_X;
        for span in &spans {
            let variant = theme.variant_for(span.category);
            let width = surface.text_width(&span.text, variant, geometry.font_size);
            // Whitespace is a blank advance, not a glyph
            if span.category != Category::Whitespace {
                surface.draw_text(
                    x,
                    y,
                    &span.text,
                    theme.color_for(span.category),
                    variant,
                    geometry.font_size,
                );
            }
            x += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Chunker, LineHighlighter, RenderState};
    use crate::theme::{FontVariant, Rgb};

    /// Recording surface for layout assertions
    #[derive(Default)]
    struct Recorder {
        texts: Vec<(f32, f32, String, Rgb, FontVariant)>,
        rects: Vec<(f32, f32, f32, f32)>,
        lines: Vec<(f32, f32, f32, f32)>,
    }

    impl RenderSurface for Recorder {
        fn draw_text(
            &mut self,
            x: f32,
            y: f32,
            text: &str,
            color: Rgb,
            variant: FontVariant,
            _size: f32,
        ) {
            self.texts.push((x, y, text.to_string(), color, variant));
        }

        fn text_width(&self, text: &str, _variant: FontVariant, size: f32) -> f32 {
            crate::render::surface::MonoMetrics::default().text_width(text, size)
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, _color: Rgb) {
            self.rects.push((x, y, width, height));
        }

        fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _color: Rgb, _width: f32) {
            self.lines.push((x1, y1, x2, y2));
        }
    }

    fn one_chunk(lines: &[&str]) -> Chunk {
        let hl = LineHighlighter::new();
        let owned: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        Chunker::new(55).chunks(&hl, &owned).remove(0)
    }

    fn theme() -> ThemePalette {
        crate::theme::find("kanagawa-wave").unwrap()
    }

    #[test]
    fn test_block_height() {
        let geometry = BlockGeometry::new(468.0, 11.0, 8.0);
        let chunk = one_chunk(&["a", "b", "c"]);
        // 3 lines, first and last chunk: 10pt padding on both edges
        assert_eq!(geometry.block_height(&chunk), 3.0 * 11.0 + 20.0);
    }

    #[test]
    fn test_interior_chunk_padding_is_smaller() {
        let hl = LineHighlighter::new();
        let lines: Vec<String> = (0..4).map(|i| format!("x{}", i)).collect();
        let chunks = Chunker::new(2).chunks(&hl, &lines);
        let geometry = BlockGeometry::new(468.0, 11.0, 8.0);
        // first chunk: outer top, inner bottom
        assert_eq!(geometry.block_height(&chunks[0]), 22.0 + 15.0);
        assert_eq!(geometry.block_height(&chunks[1]), 22.0 + 15.0);
    }

    #[test]
    fn test_borders_follow_chunk_flags() {
        let hl = LineHighlighter::new();
        let lines: Vec<String> = (0..4).map(|i| format!("x{}", i)).collect();
        let chunks = Chunker::new(2).chunks(&hl, &lines);
        let geometry = BlockGeometry::new(468.0, 11.0, 8.0);

        let mut first = Recorder::default();
        draw_chunk(&mut first, &chunks[0], &hl, &theme(), &geometry);
        // left, right, top; no bottom border on an interior edge
        assert_eq!(first.lines.len(), 3);

        let mut last = Recorder::default();
        draw_chunk(&mut last, &chunks[1], &hl, &theme(), &geometry);
        assert_eq!(last.lines.len(), 3);
    }

    #[test]
    fn test_line_numbers_continue_from_start_line() {
        let hl = LineHighlighter::new();
        let lines: Vec<String> = (0..60).map(|i| format!("x{}", i)).collect();
        let chunks = Chunker::new(55).chunks(&hl, &lines);
        let geometry = BlockGeometry::new(468.0, 11.0, 8.0);

        let mut surface = Recorder::default();
        draw_chunk(&mut surface, &chunks[1], &hl, &theme(), &geometry);
        assert!(surface.texts.iter().any(|(x, _, t, _, _)| *x == NUMBER_X && t == " 56"));
    }

    #[test]
    fn test_whitespace_spans_advance_without_glyphs() {
        let geometry = BlockGeometry::new(468.0, 11.0, 8.0);
        let hl = LineHighlighter::new();
        let chunk = one_chunk(&["a b"]);

        let mut surface = Recorder::default();
        draw_chunk(&mut surface, &chunk, &hl, &theme(), &geometry);

        let code: Vec<_> = surface
            .texts
            .iter()
            .filter(|(x, _, _, _, _)| *x >= CODE_X)
            .collect();
        assert_eq!(code.len(), 2);
        assert_eq!(code[0].2, "a");
        assert_eq!(code[1].2, "b");
        // "b" starts two advances in: one for "a", one for the space
        let advance = 8.0 * 0.6;
        assert!((code[1].0 - (CODE_X + 2.0 * advance)).abs() < 0.001);
    }

    #[test]
    fn test_comment_state_threads_through_block() {
        let geometry = BlockGeometry::new(468.0, 11.0, 8.0);
        let hl = LineHighlighter::new();
        let chunk = Chunk {
            start_line: 1,
            lines: vec!["/* open".to_string(), "inside".to_string()],
            is_first: true,
            is_last: true,
            entry_state: RenderState::normal(),
        };

        let mut surface = Recorder::default();
        draw_chunk(&mut surface, &chunk, &hl, &theme(), &geometry);

        let palette = theme();
        let inside = surface
            .texts
            .iter()
            .find(|(_, _, t, _, _)| t == "inside")
            .unwrap();
        assert_eq!(inside.3, palette.comment);
        assert_eq!(inside.4, FontVariant::Italic);
    }
}
