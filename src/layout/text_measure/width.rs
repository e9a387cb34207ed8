//! Cell width of text.
//!
//! Text is walked as grapheme clusters; each cluster occupies 0, 1 or 2
//! cells. A cluster is double width when any of its code points asks for
//! emoji presentation, otherwise it is as wide as its widest code point.

use std::ops::RangeInclusive;

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};
use unicode_width::UnicodeWidthChar;

/// Pictograph blocks terminals draw two cells wide even where East Asian
/// Width says otherwise.
const WIDE_PICTOGRAPHS: [RangeInclusive<u32>; 5] = [
    0x2600..=0x27BF,
    0x1F300..=0x1F64F,
    0x1F680..=0x1F6FF,
    0x1F900..=0x1F9FF,
    0x1FA70..=0x1FAFF,
];

/// Code points that turn the cluster they belong to into an emoji.
fn forces_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{200D}' | '\u{FE0F}' | '\u{20E3}' | '\u{1F3FB}'..='\u{1F3FF}' | '\u{1F1E6}'..='\u{1F1FF}'
    )
}

/// Cells taken by a single code point. Control characters take none.
#[inline]
pub fn char_width(c: char) -> usize {
    let code = c as u32;
    if WIDE_PICTOGRAPHS.iter().any(|range| range.contains(&code)) {
        return 2;
    }
    c.width().unwrap_or(0)
}

/// Cells taken by one grapheme cluster.
pub fn cluster_width(cluster: &str) -> usize {
    let mut widest = 0;
    for (i, c) in cluster.chars().enumerate() {
        if i > 0 && forces_emoji(c) {
            return 2;
        }
        widest = widest.max(char_width(c));
    }
    widest.min(2)
}

/// Cells taken by a whole string.
pub fn string_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|b| (0x20..0x7F).contains(b)).count();
    }
    clusters(s).map(|cluster| cluster.width).sum()
}

/// One grapheme cluster of a string with its byte offset and cell width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster<'a> {
    pub offset: usize,
    pub text: &'a str,
    pub width: usize,
}

impl Cluster<'_> {
    /// Whitespace clusters separate words.
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Byte offset just past this cluster.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// The character painted into a cell for this cluster.
    pub fn lead(&self) -> char {
        self.text.chars().next().unwrap_or(' ')
    }
}

/// Iterator over the clusters of a string.
pub struct Clusters<'a> {
    inner: GraphemeIndices<'a>,
}

impl<'a> Iterator for Clusters<'a> {
    type Item = Cluster<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(offset, text)| Cluster {
            offset,
            text,
            width: cluster_width(text),
        })
    }
}

/// Walk `text` cluster by cluster.
pub fn clusters(text: &str) -> Clusters<'_> {
    Clusters {
        inner: text.grapheme_indices(true),
    }
}
