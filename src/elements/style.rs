use crate::geometry::Thickness;
use crate::layout::Inherited;
use crate::types::{
    AxisAlign, Color, HorizontalAlign, LineWidth, TextAlign, TextWrap, VerticalAlign,
};

// =============================================================================
// BlockStyle
// =============================================================================

/// Box-model constraints and inheritable attributes of a block element.
///
/// All fields are optional or zero by default: no explicit size, no
/// spacing, no border, stretch on both axes, everything else inherited.
///
/// ```ignore
/// let style = BlockStyle {
///     width: Some(10),
///     padding: Thickness::symmetric(1, 0),
///     border: Some(LineWidth::Single),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStyle {
    /// Explicit width including border and padding, excluding margin.
    pub width: Option<usize>,
    /// Explicit height including border and padding, excluding margin.
    pub height: Option<usize>,
    pub margin: Thickness,
    pub padding: Thickness,
    pub align: Option<HorizontalAlign>,
    pub valign: Option<VerticalAlign>,
    /// Border stroke; a border is one cell thick on every side.
    pub border: Option<LineWidth>,
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub text_wrap: Option<TextWrap>,
    pub text_align: Option<TextAlign>,
}

impl BlockStyle {
    /// Space taken between the box edge and the content: border + padding.
    pub fn chrome(&self) -> Thickness {
        let border = if self.border.is_some() { 1 } else { 0 };
        self.padding + Thickness::uniform(border)
    }

    pub(crate) fn horizontal_align(&self) -> Option<AxisAlign> {
        self.align.map(AxisAlign::from)
    }

    pub(crate) fn vertical_align(&self) -> Option<AxisAlign> {
        self.valign.map(AxisAlign::from)
    }

    /// Context handed to this block's children.
    pub(crate) fn inherit(&self, parent: &Inherited) -> Inherited {
        Inherited {
            color: self.color.or(parent.color),
            background: self.background.or(parent.background),
            wrap: self.text_wrap.unwrap_or(parent.wrap),
            text_align: self.text_align.unwrap_or(parent.text_align),
        }
    }
}

// =============================================================================
// InlineStyle
// =============================================================================

/// Attributes of an inline run. Unset values come from the enclosing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub wrap: Option<TextWrap>,
}
