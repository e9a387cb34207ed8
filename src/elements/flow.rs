//! Grouping of a block's children into layout segments.
//!
//! Container policies never see inline elements one by one: a run of
//! consecutive inline children is a single paragraph segment that measures,
//! arranges and occupies space like one block child.

use std::ops::Range;

use super::element::Element;
use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::layout::{Inherited, Paragraph};
use crate::types::TextWrap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Block(usize),
    Paragraph(Range<usize>),
}

/// Split children into block and paragraph segments, in order.
pub(crate) fn segments(children: &[Element]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut inline_start: Option<usize> = None;

    for (index, child) in children.iter().enumerate() {
        match child {
            Element::Inline(_) => {
                inline_start.get_or_insert(index);
            }
            Element::Block(_) => {
                if let Some(start) = inline_start.take() {
                    segments.push(Segment::Paragraph(start..index));
                }
                segments.push(Segment::Block(index));
            }
        }
    }
    if let Some(start) = inline_start {
        segments.push(Segment::Paragraph(start..children.len()));
    }

    segments
}

fn paragraph(children: &[Element], range: &Range<usize>, inherited: &Inherited) -> (Paragraph, TextWrap) {
    let mut paragraph = Paragraph::new();
    let mut wrap = None;
    for child in &children[range.clone()] {
        if let Element::Inline(inline) = child {
            paragraph.push_run(inline.text());
            wrap = wrap.or(inline.explicit_wrap());
        }
    }
    (paragraph, wrap.unwrap_or(inherited.wrap))
}

/// Measure a segment under `available`.
pub(crate) fn measure_segment(
    children: &mut [Element],
    segment: &Segment,
    available: Size,
    inherited: &Inherited,
) -> Size {
    match segment {
        Segment::Block(index) => children[*index].measure_with(available, inherited),
        Segment::Paragraph(range) => {
            for child in &mut children[range.clone()] {
                child.measure_with(available, inherited);
            }
            let (paragraph, wrap) = paragraph(children, range, inherited);
            paragraph.measure(available.width, wrap)
        }
    }
}

/// Size a measured segment occupies when offered `available`.
///
/// Blocks report their desired size; paragraphs are broken again at the
/// width they will actually get.
pub(crate) fn segment_extent(
    children: &[Element],
    segment: &Segment,
    available: Size,
    inherited: &Inherited,
) -> Size {
    match segment {
        Segment::Block(index) => children[*index].desired_size().unwrap_or_default(),
        Segment::Paragraph(range) => {
            let (paragraph, wrap) = paragraph(children, range, inherited);
            paragraph.measure(available.width, wrap)
        }
    }
}

/// Arrange a segment into `slot`.
pub(crate) fn arrange_segment(
    children: &mut [Element],
    segment: &Segment,
    slot: Rect,
    inherited: &Inherited,
) -> Result<()> {
    match segment {
        Segment::Block(index) => children[*index].arrange_with(slot, inherited),
        Segment::Paragraph(range) => {
            let (paragraph, wrap) = paragraph(children, range, inherited);
            let fragments = paragraph.layout(slot, wrap, inherited.text_align);
            for (child, fragments) in children[range.clone()].iter_mut().zip(fragments) {
                if let Element::Inline(inline) = child {
                    inline.arrange_fragments(slot, fragments)?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{BlockElement, InlineElement};

    #[test]
    fn test_segments() {
        let children: Vec<Element> = vec![
            InlineElement::span("a").into(),
            InlineElement::span("b").into(),
            BlockElement::div().into(),
            BlockElement::div().into(),
            InlineElement::line_break().into(),
        ];
        assert_eq!(
            segments(&children),
            vec![
                Segment::Paragraph(0..2),
                Segment::Block(2),
                Segment::Block(3),
                Segment::Paragraph(4..5),
            ]
        );
        assert!(segments(&[]).is_empty());
    }

    #[test]
    fn test_paragraph_wrap_from_first_explicit_run() {
        let children: Vec<Element> = vec![
            InlineElement::span("aaa ").into(),
            InlineElement::span("bbb").with_wrap(TextWrap::NoWrap).into(),
        ];
        let (_, wrap) = paragraph(&children, &(0..2), &Inherited::default());
        assert_eq!(wrap, TextWrap::NoWrap);
    }
}
