use super::block::BlockElement;
use super::inline::InlineElement;
use crate::buffer::ConsoleBuffer;
use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::layout::{Inherited, LayoutState};

/// A node of the element tree.
///
/// The set of node kinds is closed: blocks take part in box-model layout and
/// own children; inline elements are leaves laid out by their block.
#[derive(Debug, Clone)]
pub enum Element {
    Block(BlockElement),
    Inline(InlineElement),
}

impl Element {
    pub fn as_block(&self) -> Option<&BlockElement> {
        match self {
            Element::Block(block) => Some(block),
            Element::Inline(_) => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut BlockElement> {
        match self {
            Element::Block(block) => Some(block),
            Element::Inline(_) => None,
        }
    }

    pub fn as_inline(&self) -> Option<&InlineElement> {
        match self {
            Element::Inline(inline) => Some(inline),
            Element::Block(_) => None,
        }
    }

    pub fn as_inline_mut(&mut self) -> Option<&mut InlineElement> {
        match self {
            Element::Inline(inline) => Some(inline),
            Element::Block(_) => None,
        }
    }

    pub fn state(&self) -> LayoutState {
        match self {
            Element::Block(block) => block.state(),
            Element::Inline(inline) => inline.state(),
        }
    }

    pub fn desired_size(&self) -> Option<Size> {
        match self {
            Element::Block(block) => block.desired_size(),
            Element::Inline(inline) => inline.desired_size(),
        }
    }

    pub fn render_rect(&self) -> Option<Rect> {
        match self {
            Element::Block(block) => block.render_rect(),
            Element::Inline(inline) => inline.render_rect(),
        }
    }

    pub(crate) fn measure_with(&mut self, available: Size, inherited: &Inherited) -> Size {
        match self {
            Element::Block(block) => block.measure_with(available, inherited),
            Element::Inline(inline) => inline.measure_with(available, inherited),
        }
    }

    /// Arrange a block child. Inline children are arranged by their
    /// paragraph and never reach this.
    pub(crate) fn arrange_with(&mut self, rect: Rect, inherited: &Inherited) -> Result<()> {
        match self {
            Element::Block(block) => block.arrange_with(rect, inherited),
            Element::Inline(inline) => inline.arrange_fragments(rect, Vec::new()),
        }
    }

    pub(crate) fn render_with(&mut self, buffer: &mut ConsoleBuffer, inherited: &Inherited) -> Result<()> {
        match self {
            Element::Block(block) => block.render_with(buffer, inherited),
            Element::Inline(inline) => inline.render_with(buffer, inherited),
        }
    }

    pub(crate) fn reset_to_measured(&mut self) {
        match self {
            Element::Block(block) => block.reset_to_measured(),
            Element::Inline(inline) => inline.reset_to_measured(),
        }
    }
}

impl From<BlockElement> for Element {
    fn from(block: BlockElement) -> Self {
        Element::Block(block)
    }
}

impl From<InlineElement> for Element {
    fn from(inline: InlineElement) -> Self {
        Element::Inline(inline)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Inline(InlineElement::span(text))
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Inline(InlineElement::span(text))
    }
}
