//! Anonymous paragraphs.
//!
//! Consecutive inline children of a block are broken into lines together, so
//! a word may continue across span boundaries and a line may mix spans. The
//! paragraph concatenates the run texts, breaks the result once, and then
//! splits every line back into per-run [`TextFragment`]s.

use std::ops::Range;

use super::align::line_offset;
use super::text_measure::{break_lines, measure_lines, string_width};
use crate::geometry::{Rect, Size};
use crate::types::{TextAlign, TextWrap};

/// A piece of one run placed on one line, in absolute buffer coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub x: usize,
    pub y: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    text: String,
    runs: Vec<Range<usize>>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run; its fragments come back at the same index.
    pub fn push_run(&mut self, text: &str) {
        let start = self.text.len();
        self.text.push_str(text);
        self.runs.push(start..self.text.len());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size of the paragraph broken at `max_width`.
    pub fn measure(&self, max_width: usize, wrap: TextWrap) -> Size {
        measure_lines(&self.text, max_width, wrap)
    }

    /// Break the paragraph inside `bounds` and return the fragments of each run.
    ///
    /// Lines beyond the bounds are still produced; painting clips them.
    pub fn layout(&self, bounds: Rect, wrap: TextWrap, align: TextAlign) -> Vec<Vec<TextFragment>> {
        let mut fragments = vec![Vec::new(); self.runs.len()];

        for (row, line) in break_lines(&self.text, bounds.width, wrap).iter().enumerate() {
            let x = bounds.x + line_offset(align, bounds.width, line.width);
            for (run, range) in self.runs.iter().enumerate() {
                let start = range.start.max(line.start);
                let end = range.end.min(line.end);
                if start >= end {
                    continue;
                }
                fragments[run].push(TextFragment {
                    x: x + string_width(&self.text[line.start..start]),
                    y: bounds.y + row,
                    text: self.text[start..end].to_string(),
                });
            }
        }

        fragments
    }
}
