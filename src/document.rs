//! Document assembly
//!
//! Turns a set of source files into an ordered sequence of sink
//! content: a cover header, then per file a boxed header followed by
//! its chunk blocks. All theme and geometry values arrive as explicit
//! arguments; nothing here touches global state.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::highlight::{Chunker, LineHighlighter};
use crate::render::{draw_chunk, BlockGeometry, DocumentSink, HeadingStyle};
use crate::source::SourceFile;
use crate::theme::ThemePalette;

/// Width of a code block: 6.5in content width on a letter page
const BLOCK_WIDTH: f32 = 468.0;

/// Cover header fields
#[derive(Debug, Clone, Default)]
pub struct RunInfo {
    pub title: String,
    pub student: String,
    pub course: String,
    pub date: Option<String>,
}

/// Render the whole run into a sink and finalize it.
///
/// `base` is the directory file paths are shown relative to. Chunk
/// entry states are planned up front, so each block draw is a pure
/// function of its chunk.
pub fn render_run(
    sink: &mut dyn DocumentSink,
    files: &[SourceFile],
    base: &Path,
    theme: &ThemePalette,
    config: &Config,
    info: &RunInfo,
) -> Result<()> {
    let highlighter = LineHighlighter::new();
    let chunker = Chunker::new(config.chunk_size);
    let geometry = BlockGeometry::new(BLOCK_WIDTH, config.line_height, config.font_size);

    render_cover(sink, files, base, info)?;

    for (index, file) in files.iter().enumerate() {
        if index > 0 {
            sink.page_break()?;
        }

        let header = format!("File: {}", file.display_path(base));
        sink.add_heading(&header, HeadingStyle::FileHeader)?;
        sink.add_spacer(7.2)?;

        let lines: Vec<String> = file.text.split('\n').map(str::to_string).collect();
        for chunk in chunker.chunks(&highlighter, &lines) {
            let height = geometry.block_height(&chunk);
            sink.add_block(height, &mut |surface| {
                draw_chunk(surface, &chunk, &highlighter, theme, &geometry)
            })?;
        }
        sink.add_spacer(14.4)?;
    }

    sink.finalize()
}

fn render_cover(
    sink: &mut dyn DocumentSink,
    files: &[SourceFile],
    base: &Path,
    info: &RunInfo,
) -> Result<()> {
    if !info.title.is_empty() {
        sink.add_heading(&info.title, HeadingStyle::Title)?;
        sink.add_spacer(14.4)?;
    }
    if !info.student.is_empty() {
        sink.add_heading(&format!("Student: {}", info.student), HeadingStyle::Info)?;
    }
    if !info.course.is_empty() {
        sink.add_heading(&format!("Course: {}", info.course), HeadingStyle::Info)?;
    }
    if let Some(date) = &info.date {
        sink.add_heading(&format!("Date: {}", date), HeadingStyle::Info)?;
    }
    sink.add_heading(&format!("Files included: {}", files.len()), HeadingStyle::Info)?;
    sink.add_spacer(14.4)?;

    sink.add_heading("Project files:", HeadingStyle::Info)?;
    for file in files {
        sink.add_heading(&format!("  - {}", file.display_path(base)), HeadingStyle::Info)?;
    }
    sink.add_spacer(21.6)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderSurface;
    use std::path::PathBuf;

    /// Sink that records the order of operations
    #[derive(Default)]
    struct RecordingSink {
        events: Vec<String>,
        finalized: bool,
    }

    impl DocumentSink for RecordingSink {
        fn add_heading(&mut self, text: &str, _style: HeadingStyle) -> Result<()> {
            self.events.push(format!("heading:{}", text));
            Ok(())
        }

        fn add_spacer(&mut self, _height: f32) -> Result<()> {
            Ok(())
        }

        fn add_block(
            &mut self,
            _height: f32,
            draw: &mut dyn FnMut(&mut dyn RenderSurface),
        ) -> Result<()> {
            // Exercise the draw path with a throwaway surface
            struct Null;
            impl RenderSurface for Null {
                fn draw_text(
                    &mut self,
                    _x: f32,
                    _y: f32,
                    _text: &str,
                    _color: crate::theme::Rgb,
                    _variant: crate::theme::FontVariant,
                    _size: f32,
                ) {
                }
                fn text_width(
                    &self,
                    text: &str,
                    _variant: crate::theme::FontVariant,
                    size: f32,
                ) -> f32 {
                    crate::render::MonoMetrics::default().text_width(text, size)
                }
                fn fill_rect(
                    &mut self,
                    _x: f32,
                    _y: f32,
                    _w: f32,
                    _h: f32,
                    _color: crate::theme::Rgb,
                ) {
                }
                fn draw_line(
                    &mut self,
                    _x1: f32,
                    _y1: f32,
                    _x2: f32,
                    _y2: f32,
                    _color: crate::theme::Rgb,
                    _width: f32,
                ) {
                }
            }
            draw(&mut Null);
            self.events.push("block".to_string());
            Ok(())
        }

        fn page_break(&mut self) -> Result<()> {
            self.events.push("page_break".to_string());
            Ok(())
        }

        fn finalize(&mut self) -> Result<()> {
            self.finalized = true;
            Ok(())
        }
    }

    fn file(name: &str, text: &str) -> SourceFile {
        SourceFile {
            path: PathBuf::from(name),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_run_order_and_finalize() {
        let files = vec![
            file("a.h", "int a;\n"),
            file("b.cpp", "#include \"a.h\"\nint main() { return 0; }\n"),
        ];
        let theme = crate::theme::find("kanagawa-wave").unwrap();
        let config = Config::default();
        let info = RunInfo {
            title: "Assignment 1".to_string(),
            ..RunInfo::default()
        };

        let mut sink = RecordingSink::default();
        render_run(&mut sink, &files, Path::new(""), &theme, &config, &info).unwrap();

        assert!(sink.finalized);
        assert_eq!(sink.events[0], "heading:Assignment 1");
        assert!(sink.events.contains(&"heading:File: a.h".to_string()));
        assert!(sink.events.contains(&"heading:File: b.cpp".to_string()));
        // One page break, between the two files
        assert_eq!(sink.events.iter().filter(|e| *e == "page_break").count(), 1);
        // Each short file is a single chunk block
        assert_eq!(sink.events.iter().filter(|e| *e == "block").count(), 2);
    }

    #[test]
    fn test_long_file_yields_multiple_blocks() {
        let text: String = (0..120).map(|i| format!("int x{};\n", i)).collect();
        let files = vec![file("big.cpp", &text)];
        let theme = crate::theme::find("kanagawa-wave").unwrap();
        let config = Config::default();

        let mut sink = RecordingSink::default();
        render_run(
            &mut sink,
            &files,
            Path::new(""),
            &theme,
            &config,
            &RunInfo::default(),
        )
        .unwrap();

        // 121 split lines at 55 per chunk: three blocks
        assert_eq!(sink.events.iter().filter(|e| *e == "block").count(), 3);
    }

    #[test]
    fn test_cover_lists_files() {
        let files = vec![file("m.cpp", "")];
        let theme = crate::theme::find("kanagawa-lotus").unwrap();
        let config = Config::default();

        let mut sink = RecordingSink::default();
        render_run(
            &mut sink,
            &files,
            Path::new(""),
            &theme,
            &config,
            &RunInfo::default(),
        )
        .unwrap();

        assert!(sink.events.contains(&"heading:Files included: 1".to_string()));
        assert!(sink.events.contains(&"heading:  - m.cpp".to_string()));
    }
}
