//! Render targets.
//!
//! A target consumes a finished buffer row by row. It never writes back.

use std::io::{self, Write};

use crate::buffer::{ConsoleBuffer, ConsoleChar};
use crate::types::LineCharset;

/// Consumer of a painted buffer.
pub trait RenderTarget {
    fn render(&mut self, buffer: &ConsoleBuffer) -> io::Result<()>;
}

/// Writes the buffer as plain text, one line per row.
///
/// Each cell prints its character if it has one, otherwise the glyph of its
/// merged line flags, otherwise a space. Colors are dropped.
pub struct TextRenderTarget<W: Write> {
    writer: W,
    charset: LineCharset,
}

impl<W: Write> TextRenderTarget<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            charset: LineCharset::default(),
        }
    }

    pub fn with_charset(mut self, charset: LineCharset) -> Self {
        self.charset = charset;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderTarget for TextRenderTarget<W> {
    fn render(&mut self, buffer: &ConsoleBuffer) -> io::Result<()> {
        let mut line = String::with_capacity(buffer.width() * 3 + 1);
        for row in buffer.rows() {
            line.clear();
            push_row(&mut line, row, self.charset);
            self.writer.write_all(line.as_bytes())?;
        }
        self.writer.flush()
    }
}

/// Append one row and its newline.
fn push_row(out: &mut String, row: &[ConsoleChar], charset: LineCharset) {
    out.extend(row.iter().filter_map(|cell| cell.printable(charset)));
    out.push('\n');
}

/// Render a buffer to a `String`, in the same format as [`TextRenderTarget`].
pub fn buffer_to_text(buffer: &ConsoleBuffer, charset: LineCharset) -> String {
    let mut text = String::with_capacity((buffer.width() + 1) * buffer.height());
    for row in buffer.rows() {
        push_row(&mut text, row, charset);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::types::{CellAttrs, LineWidth};

    #[test]
    fn test_text_target() {
        let mut buffer = ConsoleBuffer::new(4, 3);
        buffer.draw_rectangle(Rect::new(0, 0, 4, 3), LineWidth::Single, None);
        buffer.draw_string(1, 1, "hi", CellAttrs::default(), None);
        assert_eq!(buffer_to_text(&buffer, LineCharset::Unicode), "┌──┐\n│hi│\n└──┘\n");
        assert_eq!(buffer_to_text(&buffer, LineCharset::Ascii), "+--+\n|hi|\n+--+\n");
    }

    #[test]
    fn test_wide_chars_take_two_cells() {
        let mut buffer = ConsoleBuffer::new(3, 1);
        buffer.draw_string(0, 0, "你a", CellAttrs::default(), None);
        assert_eq!(buffer_to_text(&buffer, LineCharset::Unicode), "你a\n");
    }

    #[test]
    fn test_writer_target() {
        let buffer = ConsoleBuffer::new(2, 2);
        let mut target = TextRenderTarget::new(Vec::new());
        target.render(&buffer).unwrap();
        assert_eq!(target.into_inner(), b"  \n  \n");
    }

    #[test]
    fn test_string_matches_writer_output() {
        let mut buffer = ConsoleBuffer::new(5, 3);
        buffer.draw_rectangle(Rect::new(0, 0, 5, 3), LineWidth::Double, None);
        buffer.draw_string(1, 1, "你x", CellAttrs::default(), None);
        let mut target = TextRenderTarget::new(Vec::new()).with_charset(LineCharset::Ascii);
        target.render(&buffer).unwrap();
        assert_eq!(
            String::from_utf8(target.into_inner()).unwrap(),
            buffer_to_text(&buffer, LineCharset::Ascii)
        );
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(buffer_to_text(&ConsoleBuffer::new(0, 0), LineCharset::Unicode), "");
    }
}
