use crate::types::{CellAttrs, LineCharset, LineWidth};

// =============================================================================
// Line Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Edges of a box-drawing glyph present in a cell.
    ///
    /// Combine with bitwise OR. Double modifiers apply to the axis they name
    /// and are ignored when that axis has no edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LineFlags: u8 {
        const NONE = 0;
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
        const DOUBLE_HORIZONTAL = 1 << 4;
        const DOUBLE_VERTICAL = 1 << 5;

        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const EDGES = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

// Indexed by the low nibble: LEFT=1, TOP=2, RIGHT=4, BOTTOM=8.
const GLYPHS_SINGLE: [char; 16] = [
    ' ', '╴', '╵', '┘', '╶', '─', '└', '┴', '╷', '┐', '│', '┤', '┌', '┬', '├', '┼',
];
const GLYPHS_DOUBLE: [char; 16] = [
    ' ', '═', '║', '╝', '═', '═', '╚', '╩', '║', '╗', '║', '╣', '╔', '╦', '╠', '╬',
];
const GLYPHS_DOUBLE_H: [char; 16] = [
    ' ', '═', '╵', '╛', '═', '═', '╘', '╧', '╷', '╕', '│', '╡', '╒', '╤', '╞', '╪',
];
const GLYPHS_DOUBLE_V: [char; 16] = [
    ' ', '╴', '║', '╜', '╶', '─', '╙', '╨', '║', '╖', '║', '╢', '╓', '╥', '╟', '╫',
];

impl LineFlags {
    /// Flags for a stroke of the given width along the horizontal axis.
    pub const fn horizontal_stroke(width: LineWidth) -> Self {
        match width {
            LineWidth::Single => Self::NONE,
            LineWidth::Double => Self::DOUBLE_HORIZONTAL,
        }
    }

    /// Flags for a stroke of the given width along the vertical axis.
    pub const fn vertical_stroke(width: LineWidth) -> Self {
        match width {
            LineWidth::Single => Self::NONE,
            LineWidth::Double => Self::DOUBLE_VERTICAL,
        }
    }

    /// Resolve the merged flags into a single glyph.
    ///
    /// Returns `None` when no edge is present.
    pub fn glyph(self, charset: LineCharset) -> Option<char> {
        let edges = self & Self::EDGES;
        if edges.is_empty() {
            return None;
        }

        let has_h = edges.intersects(Self::HORIZONTAL);
        let has_v = edges.intersects(Self::VERTICAL);
        let double_h = has_h && self.contains(Self::DOUBLE_HORIZONTAL);
        let double_v = has_v && self.contains(Self::DOUBLE_VERTICAL);

        let glyph = match charset {
            LineCharset::Ascii => match (has_h, has_v) {
                (true, false) if double_h => '=',
                (true, false) => '-',
                (false, true) => '|',
                _ => '+',
            },
            LineCharset::Unicode => {
                let table = match (double_h, double_v) {
                    (false, false) => &GLYPHS_SINGLE,
                    (true, true) => &GLYPHS_DOUBLE,
                    (true, false) => &GLYPHS_DOUBLE_H,
                    (false, true) => &GLYPHS_DOUBLE_V,
                };
                table[(edges.bits() & 0x0F) as usize]
            }
        };
        Some(glyph)
    }
}

// =============================================================================
// ConsoleChar - The atomic unit of the buffer
// =============================================================================

/// A single buffer cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleChar {
    /// Printable character, `None` if nothing was painted.
    pub ch: Option<char>,
    /// Box-drawing edges merged into this cell.
    pub line: LineFlags,
    /// Foreground/background colors.
    pub attrs: CellAttrs,
    /// Second half of a wide character painted in the previous cell.
    pub continuation: bool,
}

impl ConsoleChar {
    #[inline]
    pub fn has_char(&self) -> bool {
        self.ch.is_some()
    }

    /// The character a target should print for this cell.
    ///
    /// A painted character wins over line flags; an empty cell is a space.
    /// Returns `None` for wide-character continuations.
    pub fn printable(&self, charset: LineCharset) -> Option<char> {
        if self.continuation {
            return None;
        }
        Some(match self.ch {
            Some(ch) => ch,
            None => self.line.glyph(charset).unwrap_or(' '),
        })
    }
}
