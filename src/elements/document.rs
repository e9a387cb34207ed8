use super::block::{BlockElement, BlockKind};
use super::element::Element;
use super::style::BlockStyle;
use crate::buffer::ConsoleBuffer;
use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::layout::LayoutState;

/// Root of an element tree. Stacks its children vertically.
#[derive(Debug, Clone)]
pub struct Document {
    root: BlockElement,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            root: BlockElement::new(BlockKind::Document),
        }
    }

    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.root = self.root.with_style(style);
        self
    }

    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.root = self.root.with_child(child);
        self
    }

    pub fn with_children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.root = self.root.with_children(children);
        self
    }

    pub fn push(&mut self, child: impl Into<Element>) {
        self.root.push(child);
    }

    /// The root block.
    pub fn root(&self) -> &BlockElement {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut BlockElement {
        &mut self.root
    }

    pub fn children(&self) -> &[Element] {
        self.root.children()
    }

    pub fn state(&self) -> LayoutState {
        self.root.state()
    }

    pub fn desired_size(&self) -> Option<Size> {
        self.root.desired_size()
    }

    pub fn render_rect(&self) -> Option<Rect> {
        self.root.render_rect()
    }

    pub fn measure(&mut self, available: Size) -> Size {
        self.root.measure(available)
    }

    pub fn arrange(&mut self, rect: Rect) -> Result<()> {
        self.root.arrange(rect)
    }

    pub fn render(&mut self, buffer: &mut ConsoleBuffer) -> Result<()> {
        self.root.render(buffer)
    }
}
