//! Styled cell buffer.
//!
//! The [`ConsoleBuffer`] is a fixed-size 2D grid of [`ConsoleChar`] cells
//! that the render pass paints into. Box-drawing is stored as [`LineFlags`]
//! and merged on every draw, so two borders meeting at a cell resolve to a
//! single junction glyph when the buffer is read.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<ConsoleChar>` with row-major indexing.
//! - **Silent clipping**: every paint operation is clipped to the buffer
//!   bounds; out-of-range coordinates are a no-op, never an error.
//! - **Lines are flags, not glyphs**: junctions are computed at read time.
//! - **Wide characters**: CJK and emoji take two cells; the second cell is
//!   a continuation marker that targets skip.

mod cell;
mod console_buffer;

pub use cell::{ConsoleChar, LineFlags};
pub use console_buffer::ConsoleBuffer;
