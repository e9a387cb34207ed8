use super::Thickness;

// =============================================================================
// Extent arithmetic
// =============================================================================

/// Add two extents, saturating into the unbounded sentinel.
#[inline]
pub const fn add_extent(a: usize, b: usize) -> usize {
    a.saturating_add(b)
}

/// Subtract `b` from `a`.
///
/// Unbounded stays unbounded; finite values clamp at zero.
#[inline]
pub const fn sub_extent(a: usize, b: usize) -> usize {
    if a == Size::INFINITY {
        Size::INFINITY
    } else {
        a.saturating_sub(b)
    }
}

// =============================================================================
// Size
// =============================================================================

/// A width/height pair in cells.
///
/// Either component may be [`Size::INFINITY`], meaning "no constraint on
/// this axis". Arithmetic treats the sentinel as an absorbing maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    /// Unbounded extent sentinel.
    pub const INFINITY: usize = usize::MAX;

    /// Zero size.
    pub const EMPTY: Self = Self::new(0, 0);

    /// Unbounded on both axes.
    pub const UNBOUNDED: Self = Self::new(Self::INFINITY, Self::INFINITY);

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_width_infinite(&self) -> bool {
        self.width == Self::INFINITY
    }

    #[inline]
    pub const fn is_height_infinite(&self) -> bool {
        self.height == Self::INFINITY
    }

    /// Shrink by a thickness. Unbounded axes stay unbounded.
    pub const fn deflate(self, thickness: Thickness) -> Self {
        Self {
            width: sub_extent(self.width, thickness.horizontal()),
            height: sub_extent(self.height, thickness.vertical()),
        }
    }

    /// Grow by a thickness, saturating.
    pub const fn inflate(self, thickness: Thickness) -> Self {
        Self {
            width: add_extent(self.width, thickness.horizontal()),
            height: add_extent(self.height, thickness.vertical()),
        }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Replace unbounded components with the matching component of `fallback`.
    pub fn finite_or(self, fallback: Self) -> Self {
        Self {
            width: if self.is_width_infinite() { fallback.width } else { self.width },
            height: if self.is_height_infinite() { fallback.height } else { self.height },
        }
    }
}

impl std::ops::Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(add_extent(self.width, rhs.width), add_extent(self.height, rhs.height))
    }
}

impl std::ops::Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(sub_extent(self.width, rhs.width), sub_extent(self.height, rhs.height))
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn extent(v: usize) -> String {
            if v == Size::INFINITY { "inf".to_string() } else { v.to_string() }
        }
        write!(f, "{}x{}", extent(self.width), extent(self.height))
    }
}
