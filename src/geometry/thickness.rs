use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Per-edge spacing used for margin, padding and border width.
///
/// Non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Thickness {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Thickness {
    pub const ZERO: Self = Self::uniform(0);

    /// Explicit per-side values.
    pub const fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same value on all four sides.
    pub const fn uniform(value: usize) -> Self {
        Self::new(value, value, value, value)
    }

    /// `horizontal` on left/right, `vertical` on top/bottom.
    pub const fn symmetric(horizontal: usize, vertical: usize) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Left + right.
    #[inline]
    pub const fn horizontal(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Top + bottom.
    #[inline]
    pub const fn vertical(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }

    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}

impl std::ops::Add for Thickness {
    type Output = Thickness;

    fn add(self, rhs: Thickness) -> Thickness {
        Thickness::new(
            self.left.saturating_add(rhs.left),
            self.top.saturating_add(rhs.top),
            self.right.saturating_add(rhs.right),
            self.bottom.saturating_add(rhs.bottom),
        )
    }
}

impl From<usize> for Thickness {
    fn from(value: usize) -> Self {
        Self::uniform(value)
    }
}

impl From<(usize, usize)> for Thickness {
    fn from((horizontal, vertical): (usize, usize)) -> Self {
        Self::symmetric(horizontal, vertical)
    }
}

impl From<(usize, usize, usize, usize)> for Thickness {
    fn from((left, top, right, bottom): (usize, usize, usize, usize)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

/// Parses `"n"`, `"h v"` or `"l t r b"`; whitespace and commas both separate.
impl FromStr for Thickness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Thickness(s.to_string());

        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Self::uniform(*all)),
            [horizontal, vertical] => Ok(Self::symmetric(*horizontal, *vertical)),
            [left, top, right, bottom] => Ok(Self::new(*left, *top, *right, *bottom)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.left, self.top, self.right, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts() {
        assert_eq!("0".parse::<Thickness>().unwrap(), Thickness::uniform(0));
        assert_eq!("2".parse::<Thickness>().unwrap(), Thickness::uniform(2));
        assert_eq!("0 1".parse::<Thickness>().unwrap(), Thickness::symmetric(0, 1));
        assert_eq!("2 3".parse::<Thickness>().unwrap(), Thickness::new(2, 3, 2, 3));
        assert_eq!("1 2 3 4".parse::<Thickness>().unwrap(), Thickness::new(1, 2, 3, 4));
        assert_eq!("1,2, 3 ,4".parse::<Thickness>().unwrap(), Thickness::new(1, 2, 3, 4));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("&".parse::<Thickness>().is_err());
        assert!("0 0 0".parse::<Thickness>().is_err());
        assert!("".parse::<Thickness>().is_err());
        assert!("-1".parse::<Thickness>().is_err());
        assert!("1 2 3 4 5".parse::<Thickness>().is_err());
    }

    #[test]
    fn test_display_roundtrips_four_values() {
        assert_eq!(Thickness::new(1, 2, 3, 4).to_string(), "1 2 3 4");
    }

    #[test]
    fn test_from_tuples() {
        assert_eq!(Thickness::from((4, 3)), Thickness::new(4, 3, 4, 3));
        assert_eq!(Thickness::from(1), Thickness::uniform(1));
    }
}
