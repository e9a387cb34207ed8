use super::cell::{ConsoleChar, LineFlags};
use crate::geometry::Rect;
use crate::layout::text_measure::clusters;
use crate::types::{CellAttrs, Color, LineCharset, LineWidth};

// =============================================================================
// ConsoleBuffer
// =============================================================================

/// A fixed-size 2D grid of console cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleBuffer {
    width: usize,
    height: usize,
    cells: Vec<ConsoleChar>,
}

impl ConsoleBuffer {
    /// Create a new buffer of empty cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![ConsoleChar::default(); width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The full buffer bounds.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell (returns None if out of bounds).
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<&ConsoleChar> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a full row of cells.
    pub fn line(&self, y: usize) -> Option<&[ConsoleChar]> {
        if y < self.height {
            let start = self.index(0, y);
            Some(&self.cells[start..start + self.width])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ConsoleChar]> {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// The printable character of a cell, resolving line junctions.
    pub fn glyph(&self, x: usize, y: usize, charset: LineCharset) -> Option<char> {
        self.cell(x, y).and_then(|cell| cell.printable(charset))
    }

    /// Clip a rect to the buffer bounds.
    #[inline]
    fn clip(&self, rect: &Rect) -> Option<Rect> {
        rect.intersect(&self.bounds())
    }

    /// Prepare a cell for overwriting, breaking any wide character it is part of.
    fn release_wide(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        if self.cells[idx].continuation && x > 0 {
            self.cells[idx - 1].ch = None;
        }
        self.cells[idx].continuation = false;
        if x + 1 < self.width && self.cells[idx + 1].continuation {
            self.cells[idx + 1].continuation = false;
            self.cells[idx + 1].ch = None;
        }
    }

    // =========================================================================
    // Fills
    // =========================================================================

    /// Overwrite character and colors of every cell in `rect`.
    pub fn fill_rectangle(&mut self, rect: Rect, attrs: CellAttrs, ch: char) {
        let Some(area) = self.clip(&rect) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.release_wide(x, y);
                let idx = self.index(x, y);
                let cell = &mut self.cells[idx];
                cell.ch = Some(ch);
                cell.attrs = attrs;
            }
        }
    }

    /// Set the background color of every cell in `rect`.
    pub fn fill_background(&mut self, rect: Rect, bg: Option<Color>) {
        let Some(area) = self.clip(&rect) else {
            return;
        };
        for y in area.y..area.bottom() {
            let start = self.index(area.x, y);
            let end = self.index(area.right(), y);
            for cell in &mut self.cells[start..end] {
                cell.attrs.bg = bg;
            }
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Paint a single line of text starting at `(x, y)`.
    ///
    /// Only cells inside `clip` (and the buffer) are written. A background of
    /// `None` keeps whatever background the cell already has. Returns the
    /// number of columns the text advanced.
    pub fn draw_string(&mut self, x: usize, y: usize, text: &str, attrs: CellAttrs, clip: Option<&Rect>) -> usize {
        let area = match clip {
            Some(clip) => self.clip(clip),
            None => Some(self.bounds()),
        };
        let mut col = x;

        for cluster in clusters(text) {
            let width = cluster.width;
            if width == 0 {
                continue;
            }
            let visible = area.is_some_and(|a| (col..col + width).all(|c| a.contains(c, y)));
            if visible {
                self.put_char(col, y, cluster.lead(), attrs);
                if width == 2 {
                    self.release_wide(col + 1, y);
                    let idx = self.index(col + 1, y);
                    let tail = &mut self.cells[idx];
                    tail.ch = None;
                    tail.continuation = true;
                    tail.attrs.fg = attrs.fg;
                    if attrs.bg.is_some() {
                        tail.attrs.bg = attrs.bg;
                    }
                }
            }
            col += width;
        }

        col - x
    }

    fn put_char(&mut self, x: usize, y: usize, ch: char, attrs: CellAttrs) {
        self.release_wide(x, y);
        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.ch = Some(ch);
        cell.attrs.fg = attrs.fg;
        if attrs.bg.is_some() {
            cell.attrs.bg = attrs.bg;
        }
    }

    // =========================================================================
    // Lines
    // =========================================================================

    /// Merge `flags` into one cell. Clears any painted character.
    fn merge_line(&mut self, x: usize, y: usize, flags: LineFlags, fg: Option<Color>) {
        if !self.in_bounds(x, y) {
            return;
        }
        self.release_wide(x, y);
        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.line |= flags;
        cell.ch = None;
        if fg.is_some() {
            cell.attrs.fg = fg;
        }
    }

    /// Merge `flags` into every cell of `rect`.
    ///
    /// Flags are unioned with what is already there, so the order in which
    /// overlapping segments are drawn does not change the result.
    pub fn draw_line_segment(&mut self, rect: Rect, flags: LineFlags, fg: Option<Color>) {
        let Some(area) = self.clip(&rect) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.merge_line(x, y, flags, fg);
            }
        }
    }

    /// Draw a horizontal stroke of `length` cells.
    ///
    /// Inner cells connect both ways; the ends only connect inward so that
    /// they form corners and tees with crossing strokes.
    pub fn draw_horizontal_line(&mut self, x: usize, y: usize, length: usize, width: LineWidth, fg: Option<Color>) {
        if length == 0 || y >= self.height {
            return;
        }
        let stroke = LineFlags::horizontal_stroke(width);
        if length == 1 {
            self.merge_line(x, y, LineFlags::HORIZONTAL | stroke, fg);
            return;
        }
        let end = x.saturating_add(length).min(self.width);
        for col in x..end {
            let mut flags = stroke;
            if col > x {
                flags |= LineFlags::LEFT;
            }
            if col < x + length - 1 {
                flags |= LineFlags::RIGHT;
            }
            self.merge_line(col, y, flags, fg);
        }
    }

    /// Draw a vertical stroke of `length` cells.
    pub fn draw_vertical_line(&mut self, x: usize, y: usize, length: usize, width: LineWidth, fg: Option<Color>) {
        if length == 0 || x >= self.width {
            return;
        }
        let stroke = LineFlags::vertical_stroke(width);
        if length == 1 {
            self.merge_line(x, y, LineFlags::VERTICAL | stroke, fg);
            return;
        }
        let end = y.saturating_add(length).min(self.height);
        for row in y..end {
            let mut flags = stroke;
            if row > y {
                flags |= LineFlags::TOP;
            }
            if row < y + length - 1 {
                flags |= LineFlags::BOTTOM;
            }
            self.merge_line(x, row, flags, fg);
        }
    }

    /// Draw a box outline along the edges of `rect`.
    ///
    /// Rects narrower or shorter than two cells degrade to a single stroke.
    pub fn draw_rectangle(&mut self, rect: Rect, width: LineWidth, fg: Option<Color>) {
        if rect.is_empty() {
            return;
        }
        if rect.height == 1 {
            self.draw_horizontal_line(rect.x, rect.y, rect.width, width, fg);
            return;
        }
        if rect.width == 1 {
            self.draw_vertical_line(rect.x, rect.y, rect.height, width, fg);
            return;
        }

        let x2 = rect.right() - 1;
        let y2 = rect.bottom() - 1;
        self.draw_horizontal_line(rect.x, rect.y, rect.width, width, fg);
        self.draw_horizontal_line(rect.x, y2, rect.width, width, fg);
        self.draw_vertical_line(rect.x, rect.y, rect.height, width, fg);
        self.draw_vertical_line(x2, rect.y, rect.height, width, fg);
    }
}

// =============================================================================
// Tests
// =============================================================================
