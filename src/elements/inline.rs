use log::trace;

use super::style::InlineStyle;
use crate::buffer::ConsoleBuffer;
use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::layout::text_measure::measure_lines;
use crate::layout::{Inherited, LayoutSlot, LayoutState, TextFragment};
use crate::types::{CellAttrs, Color, TextWrap};

/// What an inline element contributes to its paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineKind {
    /// A run of text.
    Span(String),
    /// Forces the next run onto a new line.
    LineBreak,
}

/// A leaf of the element tree: text taking part in its block's line breaking.
///
/// Inline elements are laid out by the block that contains them. The block
/// groups consecutive inline children into one paragraph and hands each
/// element the fragments of the paragraph that belong to it.
#[derive(Debug, Clone)]
pub struct InlineElement {
    kind: InlineKind,
    style: InlineStyle,
    slot: LayoutSlot,
    fragments: Vec<TextFragment>,
}

impl InlineElement {
    fn new(kind: InlineKind) -> Self {
        Self {
            kind,
            style: InlineStyle::default(),
            slot: LayoutSlot::default(),
            fragments: Vec::new(),
        }
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(InlineKind::Span(text.into()))
    }

    pub fn line_break() -> Self {
        Self::new(InlineKind::LineBreak)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn with_wrap(mut self, wrap: TextWrap) -> Self {
        self.style.wrap = Some(wrap);
        self
    }

    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> &InlineKind {
        &self.kind
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut InlineStyle {
        self.slot.invalidate();
        &mut self.style
    }

    /// Text this element contributes to a paragraph.
    pub fn text(&self) -> &str {
        match &self.kind {
            InlineKind::Span(text) => text,
            InlineKind::LineBreak => "\n",
        }
    }

    /// Fragments placed by the last arrange, in buffer coordinates.
    pub fn fragments(&self) -> &[TextFragment] {
        &self.fragments
    }

    pub fn state(&self) -> LayoutState {
        self.slot.state()
    }

    pub fn desired_size(&self) -> Option<Size> {
        self.slot.desired()
    }

    pub fn render_rect(&self) -> Option<Rect> {
        self.slot.rect()
    }

    pub(crate) fn name(&self) -> &'static str {
        match self.kind {
            InlineKind::Span(_) => "Span",
            InlineKind::LineBreak => "LineBreak",
        }
    }

    /// Wrap mode this element asks for, if it overrides its block's.
    pub(crate) fn explicit_wrap(&self) -> Option<TextWrap> {
        self.style.wrap
    }

    // =========================================================================
    // Passes
    // =========================================================================

    /// Measure the run on its own: (widest line, line count).
    pub(crate) fn measure_with(&mut self, available: Size, parent: &Inherited) -> Size {
        if let Some(desired) = self.slot.cached(available, parent) {
            self.slot.mark_measured();
            return desired;
        }

        let desired = match self.kind {
            InlineKind::Span(ref text) => {
                let wrap = self.style.wrap.unwrap_or(parent.wrap);
                measure_lines(text, available.width, wrap)
            }
            InlineKind::LineBreak => Size::new(0, 1),
        };

        trace!(target: "console_format::layout", "measure {} {available} -> {desired}", self.name());
        self.slot.set_measured(available, *parent, desired);
        desired
    }

    pub(crate) fn reset_to_measured(&mut self) {
        self.slot.mark_measured();
        self.fragments.clear();
    }

    /// Accept the paragraph rect and this run's fragments.
    pub(crate) fn arrange_fragments(&mut self, rect: Rect, fragments: Vec<TextFragment>) -> Result<()> {
        self.slot.require(LayoutState::Measured, self.name(), "arrange")?;
        self.fragments = fragments;
        self.slot.set_arranged(rect);
        Ok(())
    }

    /// Paint the fragments, clipped to the paragraph rect.
    pub(crate) fn render_with(&mut self, buffer: &mut ConsoleBuffer, parent: &Inherited) -> Result<()> {
        self.slot.require(LayoutState::Arranged, self.name(), "render")?;
        let clip = self.slot.rect().unwrap_or_default();
        let attrs = CellAttrs::new(
            self.style.color.or(parent.color),
            self.style.background.or(parent.background),
        );

        for fragment in &self.fragments {
            buffer.draw_string(fragment.x, fragment.y, &fragment.text, attrs, Some(&clip));
        }

        self.slot.set_rendered();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_measure() {
        let mut span = InlineElement::span("hello world");
        let ctx = Inherited::default();
        assert_eq!(span.measure_with(Size::new(5, Size::INFINITY), &ctx), Size::new(5, 2));
        assert_eq!(span.measure_with(Size::UNBOUNDED, &ctx), Size::new(11, 1));
        assert_eq!(span.state(), LayoutState::Measured);
    }

    #[test]
    fn test_span_own_wrap_wins() {
        let mut span = InlineElement::span("hello world").with_wrap(TextWrap::NoWrap);
        let ctx = Inherited::default();
        assert_eq!(span.measure_with(Size::new(5, 5), &ctx), Size::new(11, 1));
    }

    #[test]
    fn test_line_break() {
        let mut br = InlineElement::line_break();
        assert_eq!(br.text(), "\n");
        assert_eq!(br.measure_with(Size::new(5, 5), &Inherited::default()), Size::new(0, 1));
    }

    #[test]
    fn test_render_before_arrange_fails() {
        let mut span = InlineElement::span("x");
        let mut buffer = ConsoleBuffer::new(2, 1);
        span.measure_with(Size::new(2, 1), &Inherited::default());
        assert!(span.render_with(&mut buffer, &Inherited::default()).is_err());
    }
}
