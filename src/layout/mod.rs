//! Layout Engine
//!
//! Box-model layout for character cells in three passes.
//!
//! # Algorithm
//!
//! 1. **Measure** (bottom-up): each element reports the size it wants under
//!    an available size that may be unbounded on either axis
//! 2. **Arrange** (top-down): each element receives a final rect and places
//!    its children inside its content bounds
//! 3. **Render** (pre-order): each element paints into the cell buffer
//!
//! The passes themselves live on the element types; this module holds the
//! pieces they share: pass state and the measure cache ([`LayoutState`]),
//! inherited values ([`Inherited`]), axis alignment, paragraph building and
//! text measurement.
//!
//! # Design Decisions
//!
//! - **Measure cache**: keyed by available size and inherited values. A
//!   repeat measure with the same inputs skips the subtree but still resets
//!   it to `Measured`.
//! - **Overflow is not an error**: explicit sizes may exceed the offered
//!   space; the render pass clips.

mod align;
mod paragraph;
mod state;
pub mod text_measure;

pub use align::{line_offset, resolve_axis};
pub use paragraph::{Paragraph, TextFragment};
pub use state::{Inherited, LayoutState};
pub(crate) use state::LayoutSlot;
