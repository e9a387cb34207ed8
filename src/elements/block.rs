use log::trace;

use super::element::Element;
use super::grid::{Grid, GridLength};
use super::stack;
use super::style::BlockStyle;
use crate::buffer::ConsoleBuffer;
use crate::error::Result;
use crate::geometry::{Rect, Size, Thickness};
use crate::layout::{resolve_axis, Inherited, LayoutSlot, LayoutState};
use crate::types::{
    CellAttrs, Color, HorizontalAlign, LineWidth, Orientation, TextAlign, TextWrap, VerticalAlign,
};

// =============================================================================
// Block Kind
// =============================================================================

/// The layout policy of a block element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Root container; stacks vertically.
    Document,
    /// Generic container; stacks vertically.
    Div,
    Stack(Orientation),
    Grid(Grid),
    /// Paints a character over its whole box. No content size of its own.
    Fill(char),
}

// =============================================================================
// Block Element
// =============================================================================

/// A box-model element: margin, border, padding and a content area laid out
/// by its [`BlockKind`].
#[derive(Debug, Clone)]
pub struct BlockElement {
    kind: BlockKind,
    style: BlockStyle,
    children: Vec<Element>,
    slot: LayoutSlot,
}

impl BlockElement {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            style: BlockStyle::default(),
            children: Vec::new(),
            slot: LayoutSlot::default(),
        }
    }

    pub fn div() -> Self {
        Self::new(BlockKind::Div)
    }

    pub fn stack(orientation: Orientation) -> Self {
        Self::new(BlockKind::Stack(orientation))
    }

    pub fn grid(columns: impl IntoIterator<Item = GridLength>) -> Self {
        Self::new(BlockKind::Grid(Grid::new(columns)))
    }

    pub fn fill(ch: char) -> Self {
        Self::new(BlockKind::Fill(ch))
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn with_size(self, width: usize, height: usize) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_margin(mut self, margin: impl Into<Thickness>) -> Self {
        self.style.margin = margin.into();
        self
    }

    pub fn with_padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.style.padding = padding.into();
        self
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.style.align = Some(align);
        self
    }

    pub fn with_valign(mut self, valign: VerticalAlign) -> Self {
        self.style.valign = Some(valign);
        self
    }

    pub fn with_border(mut self, width: LineWidth) -> Self {
        self.style.border = Some(width);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn with_text_wrap(mut self, wrap: TextWrap) -> Self {
        self.style.text_wrap = Some(wrap);
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.style.text_align = Some(align);
        self
    }

    /// Draw lines around and between cells. No effect on non-grid blocks.
    pub fn with_grid_stroke(mut self, width: LineWidth) -> Self {
        if let BlockKind::Grid(grid) = &mut self.kind {
            *grid = std::mem::take(grid).with_stroke(width);
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn style(&self) -> &BlockStyle {
        &self.style
    }

    /// Mutable style. Invalidates the last measure.
    pub fn style_mut(&mut self) -> &mut BlockStyle {
        self.slot.invalidate();
        &mut self.style
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable children. Invalidates the last measure.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        self.slot.invalidate();
        &mut self.children
    }

    pub fn push(&mut self, child: impl Into<Element>) {
        self.children_mut().push(child.into());
    }

    pub fn state(&self) -> LayoutState {
        self.slot.state()
    }

    /// Size wanted by the last measure, margin included.
    pub fn desired_size(&self) -> Option<Size> {
        self.slot.desired()
    }

    /// Box assigned by the last arrange, margin excluded.
    pub fn render_rect(&self) -> Option<Rect> {
        self.slot.rect()
    }

    /// Content bounds of the last arrange: render rect minus border and padding.
    pub fn content_rect(&self) -> Option<Rect> {
        self.slot.rect().map(|rect| rect.deflate(self.style.chrome()))
    }

    pub(crate) fn name(&self) -> &'static str {
        match self.kind {
            BlockKind::Document => "Document",
            BlockKind::Div => "Div",
            BlockKind::Stack(_) => "Stack",
            BlockKind::Grid(_) => "Grid",
            BlockKind::Fill(_) => "Fill",
        }
    }

    // =========================================================================
    // Passes
    // =========================================================================

    /// Measure with nothing inherited.
    pub fn measure(&mut self, available: Size) -> Size {
        self.measure_with(available, &Inherited::default())
    }

    /// Arrange into `rect` with nothing inherited.
    pub fn arrange(&mut self, rect: Rect) -> Result<()> {
        self.arrange_with(rect, &Inherited::default())
    }

    /// Render with nothing inherited.
    pub fn render(&mut self, buffer: &mut ConsoleBuffer) -> Result<()> {
        self.render_with(buffer, &Inherited::default())
    }

    pub(crate) fn measure_with(&mut self, available: Size, parent: &Inherited) -> Size {
        if let Some(desired) = self.slot.cached(available, parent) {
            trace!(target: "console_format::layout", "measure {} {available} cached", self.name());
            self.reset_to_measured();
            return desired;
        }

        let inherited = self.style.inherit(parent);
        let chrome = self.style.chrome();

        let mut outer = available.deflate(self.style.margin);
        if let Some(width) = self.style.width {
            outer.width = width;
        }
        if let Some(height) = self.style.height {
            outer.height = height;
        }
        let content_available = outer.deflate(chrome);

        let content = match &mut self.kind {
            BlockKind::Document | BlockKind::Div => {
                stack::measure(&mut self.children, Orientation::Vertical, content_available, &inherited)
            }
            BlockKind::Stack(orientation) => {
                stack::measure(&mut self.children, *orientation, content_available, &inherited)
            }
            BlockKind::Grid(grid) => grid.measure(&mut self.children, content_available, &inherited),
            BlockKind::Fill(_) => Size::EMPTY,
        };

        let mut desired = content.inflate(chrome);
        if let Some(width) = self.style.width {
            desired.width = width;
        }
        if let Some(height) = self.style.height {
            desired.height = height;
        }
        let desired = desired.inflate(self.style.margin);

        trace!(target: "console_format::layout", "measure {} {available} -> {desired}", self.name());
        self.slot.set_measured(available, *parent, desired);
        desired
    }

    pub(crate) fn arrange_with(&mut self, rect: Rect, parent: &Inherited) -> Result<()> {
        self.slot.require(LayoutState::Measured, self.name(), "arrange")?;

        let style = &self.style;
        let desired = self.slot.desired().unwrap_or_default().deflate(style.margin);
        let area = rect.deflate(style.margin);
        let (x, width) = resolve_axis(area.width, desired.width, style.width, style.horizontal_align());
        let (y, height) = resolve_axis(area.height, desired.height, style.height, style.vertical_align());
        let bounds = Rect::new(area.x + x, area.y + y, width, height);
        let content = bounds.deflate(style.chrome());
        let inherited = style.inherit(parent);

        match &self.kind {
            BlockKind::Document | BlockKind::Div => {
                stack::arrange(&mut self.children, Orientation::Vertical, content, &inherited)?
            }
            BlockKind::Stack(orientation) => {
                stack::arrange(&mut self.children, *orientation, content, &inherited)?
            }
            BlockKind::Grid(grid) => grid.arrange(&mut self.children, content, &inherited)?,
            BlockKind::Fill(_) => {}
        }

        trace!(target: "console_format::layout", "arrange {} {rect} -> {bounds}", self.name());
        self.slot.set_arranged(bounds);
        Ok(())
    }

    pub(crate) fn render_with(&mut self, buffer: &mut ConsoleBuffer, parent: &Inherited) -> Result<()> {
        self.slot.require(LayoutState::Arranged, self.name(), "render")?;

        let bounds = self.slot.rect().unwrap_or_default();
        let inherited = self.style.inherit(parent);

        if self.style.background.is_some() {
            buffer.fill_background(bounds, self.style.background);
        }
        if let BlockKind::Fill(ch) = self.kind {
            let attrs = CellAttrs::new(inherited.color, inherited.background);
            buffer.fill_rectangle(bounds, attrs, ch);
        }
        if let Some(width) = self.style.border {
            buffer.draw_rectangle(bounds, width, inherited.color);
        }
        if let BlockKind::Grid(grid) = &self.kind {
            grid.render_strokes(buffer, bounds.deflate(self.style.chrome()), inherited.color);
        }

        for child in &mut self.children {
            child.render_with(buffer, &inherited)?;
        }

        self.slot.set_rendered();
        Ok(())
    }

    /// Keep the measure result of the whole subtree but drop arrange results.
    pub(crate) fn reset_to_measured(&mut self) {
        self.slot.mark_measured();
        for child in &mut self.children {
            child.reset_to_measured();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::InlineElement;
    use crate::error::{Error, LayoutError};

    #[test]
    fn test_explicit_size_wins() {
        let mut block = BlockElement::div()
            .with_size(10, 3)
            .with_child(InlineElement::span("abc"));
        assert_eq!(block.measure(Size::new(80, Size::INFINITY)), Size::new(10, 3));
    }

    #[test]
    fn test_chrome_and_margin_add_up() {
        let mut block = BlockElement::div()
            .with_margin(1)
            .with_padding((2, 0))
            .with_border(LineWidth::Single)
            .with_child(InlineElement::span("abc"));
        assert_eq!(block.measure(Size::new(80, Size::INFINITY)), Size::new(2 + 2 + 4 + 3, 2 + 2 + 1));
    }

    #[test]
    fn test_margin_padding_clamp() {
        let mut block = BlockElement::div()
            .with_margin(3)
            .with_padding(3)
            .with_child(InlineElement::span("abc"));
        // 12 cells of spacing offered 4: content gets zero width, never negative.
        let desired = block.measure(Size::new(4, 4));
        assert_eq!(desired.width, 12 + 3);
        assert_eq!(desired.height, 12 + 1);
    }

    #[test]
    fn test_measure_idempotent() {
        let mut block = BlockElement::div().with_child(InlineElement::span("hello world"));
        let first = block.measure(Size::new(5, 10));
        let second = block.measure(Size::new(5, 10));
        assert_eq!(first, second);
        assert_eq!(first, Size::new(5, 2));
    }

    #[test]
    fn test_arrange_before_measure_fails() {
        let mut block = BlockElement::div();
        let err = block.arrange(Rect::new(0, 0, 5, 5)).unwrap_err();
        assert!(matches!(
            err,
            Error::Layout(LayoutError::OutOfOrder {
                element: "Div",
                pass: "arrange",
                ..
            })
        ));
    }

    #[test]
    fn test_remeasure_resets_arrange() {
        let mut block = BlockElement::div().with_child(InlineElement::span("abc"));
        block.measure(Size::new(5, 5));
        block.arrange(Rect::new(0, 0, 5, 5)).unwrap();
        assert_eq!(block.state(), LayoutState::Arranged);

        block.measure(Size::new(5, 5));
        assert_eq!(block.state(), LayoutState::Measured);
        assert_eq!(block.children()[0].state(), LayoutState::Measured);

        let mut buffer = ConsoleBuffer::new(5, 5);
        assert!(block.render(&mut buffer).is_err());
    }

    #[test]
    fn test_style_mut_invalidates() {
        let mut block = BlockElement::div();
        block.measure(Size::new(5, 5));
        block.style_mut().width = Some(2);
        assert_eq!(block.state(), LayoutState::Unmeasured);
        assert_eq!(block.measure(Size::new(5, 5)), Size::new(2, 0));
    }

    #[test]
    fn test_alignment_in_arrange() {
        let mut block = BlockElement::div()
            .with_align(HorizontalAlign::Right)
            .with_valign(VerticalAlign::Center)
            .with_child(InlineElement::span("abc"));
        block.measure(Size::new(10, 5));
        block.arrange(Rect::new(0, 0, 10, 5)).unwrap();
        assert_eq!(block.render_rect(), Some(Rect::new(7, 2, 3, 1)));
    }

    #[test]
    fn test_content_rect() {
        let mut block = BlockElement::div().with_border(LineWidth::Single).with_padding((1, 0));
        block.measure(Size::new(10, 5));
        block.arrange(Rect::new(0, 0, 10, 5)).unwrap();
        assert_eq!(block.content_rect(), Some(Rect::new(2, 1, 6, 3)));
    }

    #[test]
    fn test_fill_paints_box() {
        let mut block = BlockElement::fill('#').with_size(3, 2);
        let mut buffer = ConsoleBuffer::new(4, 3);
        block.measure(Size::new(4, 3));
        block.arrange(Rect::new(0, 0, 4, 3)).unwrap();
        block.render(&mut buffer).unwrap();

        assert_eq!(buffer.cell(2, 1).unwrap().ch, Some('#'));
        assert_eq!(buffer.cell(3, 1).unwrap().ch, None);
        assert_eq!(buffer.cell(0, 2).unwrap().ch, None);
        assert_eq!(block.state(), LayoutState::Rendered);
    }
}
