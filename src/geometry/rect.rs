use super::{Size, Thickness};

/// An absolute, finite rectangle in buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// Rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a cell is inside this rect.
    #[inline]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if `other` lies fully inside this rect.
    ///
    /// Empty rects positioned on the boundary count as contained.
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Shrink by a thickness, clamping width and height at zero.
    ///
    /// The origin never moves past the far edge.
    pub fn deflate(&self, thickness: Thickness) -> Rect {
        let left = thickness.left.min(self.width);
        let top = thickness.top.min(self.height);
        Rect {
            x: self.x + left,
            y: self.y + top,
            width: self.width.saturating_sub(thickness.horizontal()),
            height: self.height.saturating_sub(thickness.vertical()),
        }
    }

    /// Move and shrink this rect until it lies inside `bounds`.
    ///
    /// Unlike [`Rect::intersect`] the result always exists; a rect entirely
    /// outside collapses to zero size on the nearest edge.
    pub fn clamp_to(&self, bounds: &Rect) -> Rect {
        let x = self.x.clamp(bounds.x, bounds.right());
        let y = self.y.clamp(bounds.y, bounds.bottom());
        let right = self.right().clamp(x, bounds.right());
        let bottom = self.bottom().clamp(y, bounds.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}
