//! Core types for console-format.
//!
//! Plain configuration values shared by the buffer, the layout engine and the
//! element tree. Colors are opaque attributes: the engine stores and inherits
//! them but never interprets them.

pub use crossterm::style::Color;

// =============================================================================
// Cell Attributes
// =============================================================================

/// Foreground/background attributes of a painted cell.
///
/// `None` means "terminal default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellAttrs {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl CellAttrs {
    pub const fn new(fg: Option<Color>, bg: Option<Color>) -> Self {
        Self { fg, bg }
    }

    pub const fn fg(color: Color) -> Self {
        Self::new(Some(color), None)
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Horizontal placement of an element inside the space offered to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HorizontalAlign {
    Left = 0,
    Center = 1,
    Right = 2,
    /// Occupy the full offered width.
    #[default]
    Stretch = 3,
}

/// Vertical placement of an element inside the space offered to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum VerticalAlign {
    Top = 0,
    Center = 1,
    Bottom = 2,
    /// Occupy the full offered height.
    #[default]
    Stretch = 3,
}

/// Where an element sits on one axis once alignment is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlign {
    Start,
    Center,
    End,
    Stretch,
}

impl From<HorizontalAlign> for AxisAlign {
    fn from(align: HorizontalAlign) -> Self {
        match align {
            HorizontalAlign::Left => Self::Start,
            HorizontalAlign::Center => Self::Center,
            HorizontalAlign::Right => Self::End,
            HorizontalAlign::Stretch => Self::Stretch,
        }
    }
}

impl From<VerticalAlign> for AxisAlign {
    fn from(align: VerticalAlign) -> Self {
        match align {
            VerticalAlign::Top => Self::Start,
            VerticalAlign::Center => Self::Center,
            VerticalAlign::Bottom => Self::End,
            VerticalAlign::Stretch => Self::Stretch,
        }
    }
}

// =============================================================================
// Text
// =============================================================================

/// Alignment of wrapped lines inside a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextAlign {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Text wrap mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextWrap {
    /// One line per explicit line break, never broken.
    NoWrap = 0,
    /// Break between whitespace-delimited words; long words overflow.
    #[default]
    WrapWords = 1,
    /// Break at any grapheme boundary.
    WrapChars = 2,
}

// =============================================================================
// Containers
// =============================================================================

/// Stacking direction of a stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

// =============================================================================
// Lines
// =============================================================================

/// Stroke width of box-drawing lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LineWidth {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single = 1,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 2,
}

/// Glyph set used when line flags are turned into characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCharset {
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// - | + and = for double horizontal strokes.
    Ascii,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(HorizontalAlign::default(), HorizontalAlign::Stretch);
        assert_eq!(VerticalAlign::default(), VerticalAlign::Stretch);
        assert_eq!(TextWrap::default(), TextWrap::WrapWords);
        assert_eq!(CellAttrs::default(), CellAttrs::new(None, None));
    }

    #[test]
    fn test_axis_align_from() {
        assert_eq!(AxisAlign::from(HorizontalAlign::Right), AxisAlign::End);
        assert_eq!(AxisAlign::from(VerticalAlign::Top), AxisAlign::Start);
        assert_eq!(AxisAlign::from(VerticalAlign::Stretch), AxisAlign::Stretch);
    }
}
