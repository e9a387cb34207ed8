//! Geometry primitives for cell-based layout.
//!
//! All extents are measured in terminal cells. [`Size`] may carry the
//! unbounded sentinel [`Size::INFINITY`] on either axis; [`Rect`] is always
//! finite and expressed in absolute buffer coordinates (origin top-left,
//! y growing downward).

mod rect;
mod size;
mod thickness;

pub use rect::Rect;
pub use size::{add_extent, sub_extent, Size};
pub use thickness::Thickness;
