//! Line breaking.
//!
//! Three modes, selected by [`TextWrap`]:
//! - **NoWrap**: one line per hard line, never broken
//! - **WrapWords**: greedy packing of whitespace-delimited words; a word wider
//!   than the line sits alone and overflows
//! - **WrapChars**: greedy packing at grapheme boundaries
//!
//! Lines are returned as byte ranges into the source so callers can map them
//! back onto the runs a paragraph was built from. Explicit newlines (`\n`,
//! optionally preceded by `\r`) always break.

use super::width::{clusters, string_width};
use crate::geometry::Size;
use crate::types::TextWrap;

/// One broken line: a byte range of the source text and its cell width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
    pub width: usize,
}

impl LineRange {
    const fn empty(at: usize) -> Self {
        Self { start: at, end: at, width: 0 }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text of this line within `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Break `text` into lines no wider than `max_width` where the mode allows.
///
/// Always returns at least one line; empty text is a single empty line.
/// `max_width` may be `Size::INFINITY`.
pub fn break_lines(text: &str, max_width: usize, wrap: TextWrap) -> Vec<LineRange> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for raw_line in text.split('\n') {
        let hard = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        match wrap {
            TextWrap::NoWrap => lines.push(LineRange {
                start: offset,
                end: offset + hard.len(),
                width: string_width(hard),
            }),
            TextWrap::WrapWords => break_words(hard, offset, max_width, &mut lines),
            TextWrap::WrapChars => break_chars(hard, offset, max_width, &mut lines),
        }
        offset += raw_line.len() + 1;
    }

    lines
}

/// Size of `text` once broken: (widest line, line count).
pub fn measure_lines(text: &str, max_width: usize, wrap: TextWrap) -> Size {
    let lines = break_lines(text, max_width, wrap);
    let width = lines.iter().map(|l| l.width).max().unwrap_or(0);
    Size::new(width, lines.len())
}

fn break_chars(line: &str, base: usize, max_width: usize, lines: &mut Vec<LineRange>) {
    let mut current = LineRange::empty(base);

    for cluster in clusters(line) {
        let gw = cluster.width;
        if gw > 0 && !current.is_empty() && current.width.saturating_add(gw) > max_width {
            lines.push(current);
            current = LineRange::empty(base + cluster.offset);
        }
        current.end = base + cluster.end();
        current.width += gw;
    }

    lines.push(current);
}

fn break_words(line: &str, base: usize, max_width: usize, lines: &mut Vec<LineRange>) {
    let mut current: Option<LineRange> = None;
    // Whitespace seen since the last word on the current line.
    let mut gap = 0;

    for (idx, token, space) in tokenize(line) {
        let width = string_width(token);
        let token_range = LineRange {
            start: base + idx,
            end: base + idx + token.len(),
            width,
        };

        if space {
            // Leading whitespace of a hard line is kept as content.
            match current {
                Some(_) => gap += width,
                None => current = Some(token_range),
            }
            continue;
        }

        let fits = current.is_some_and(|l| l.width.saturating_add(gap).saturating_add(width) <= max_width);
        match current.as_mut() {
            Some(line) if fits => {
                line.end = token_range.end;
                line.width += gap + width;
            }
            _ => {
                if let Some(done) = current.take() {
                    lines.push(done);
                }
                current = Some(token_range);
            }
        }
        gap = 0;
    }

    lines.push(current.unwrap_or(LineRange::empty(base)));
}

/// Split a hard line into alternating word and whitespace runs.
fn tokenize(line: &str) -> Vec<(usize, &str, bool)> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for cluster in clusters(line) {
        let space = cluster.is_blank();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push((start, &line[start..cluster.offset], prev));
                start = cluster.offset;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if let Some(space) = in_space {
        tokens.push((start, &line[start..], space));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str, width: usize, mode: TextWrap) -> Vec<&str> {
        break_lines(text, width, mode).iter().map(|l| l.slice(text)).collect()
    }

    // ── NoWrap ──

    #[test]
    fn nowrap_ignores_width() {
        assert_eq!(wrap("hello world", 3, TextWrap::NoWrap), vec!["hello world"]);
    }

    #[test]
    fn nowrap_newlines() {
        assert_eq!(wrap("a\r\nbb\n", 1, TextWrap::NoWrap), vec!["a", "bb", ""]);
    }

    // ── WrapWords ──

    #[test]
    fn words_hello_world() {
        assert_eq!(wrap("hello world", 5, TextWrap::WrapWords), vec!["hello", "world"]);
        assert_eq!(wrap("hello world", 11, TextWrap::WrapWords), vec!["hello world"]);
    }

    #[test]
    fn words_long_word_overflows_alone() {
        let lines = break_lines("hello world", 4, TextWrap::WrapWords);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].width, 5);
        assert_eq!(measure_lines("hello world", 4, TextWrap::WrapWords), Size::new(5, 2));
    }

    #[test]
    fn words_multiple() {
        assert_eq!(
            wrap("one two three four", 9, TextWrap::WrapWords),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn words_keep_inner_spacing() {
        assert_eq!(wrap("a  b", 10, TextWrap::WrapWords), vec!["a  b"]);
    }

    #[test]
    fn words_leading_space_kept_on_hard_line() {
        assert_eq!(wrap("  ab cd", 5, TextWrap::WrapWords), vec!["  ab", "cd"]);
    }

    #[test]
    fn words_newline_forces_break() {
        assert_eq!(wrap("a\n\nb", 10, TextWrap::WrapWords), vec!["a", "", "b"]);
    }

    #[test]
    fn words_width_zero_terminates() {
        assert_eq!(wrap("ab cd", 0, TextWrap::WrapWords), vec!["ab", "cd"]);
    }

    #[test]
    fn words_unbounded() {
        assert_eq!(wrap("a b c", Size::INFINITY, TextWrap::WrapWords), vec!["a b c"]);
    }

    #[test]
    fn words_cjk_width() {
        assert_eq!(wrap("你好 世界", 4, TextWrap::WrapWords), vec!["你好", "世界"]);
    }

    // ── WrapChars ──

    #[test]
    fn chars_break_mid_word() {
        assert_eq!(wrap("abcdef", 4, TextWrap::WrapChars), vec!["abcd", "ef"]);
        assert_eq!(wrap("hello world", 5, TextWrap::WrapChars), vec!["hello", " worl", "d"]);
    }

    #[test]
    fn chars_wide() {
        assert_eq!(wrap("你好世界", 5, TextWrap::WrapChars), vec!["你好", "世界"]);
    }

    #[test]
    fn chars_width_zero_terminates() {
        assert_eq!(wrap("abc", 0, TextWrap::WrapChars), vec!["a", "b", "c"]);
    }

    // ── Edge cases ──

    #[test]
    fn empty_text_is_one_empty_line() {
        for mode in [TextWrap::NoWrap, TextWrap::WrapWords, TextWrap::WrapChars] {
            assert_eq!(measure_lines("", 10, mode), Size::new(0, 1));
        }
    }

    #[test]
    fn line_count_is_monotonic() {
        let text = "the quick brown fox jumps over the lazy dog";
        let mut previous = 0;
        for width in (0..=50).rev() {
            let count = break_lines(text, width, TextWrap::WrapWords).len();
            assert!(count >= previous, "width {width}: {count} < {previous}");
            previous = count;
        }
    }
}
