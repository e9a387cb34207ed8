//! # console-format
//!
//! Box-model layout and compositing for character-cell grids.
//!
//! ## Architecture
//!
//! A tree of elements with size, alignment and spacing constraints is turned
//! into a painted grid of styled cells in three passes:
//!
//! ```text
//! Document → measure(available) → arrange(rect) → render(&mut ConsoleBuffer) → RenderTarget
//! ```
//!
//! Box-drawing lines are stored as edge flags and merged on every draw, so
//! borders that meet resolve to a single junction glyph (┬ ┼ ╬ ...).
//!
//! ## Example
//!
//! ```ignore
//! use console_format::{BlockElement, ConsoleRenderer, Document, LineWidth, Rect, Size};
//!
//! let mut doc = Document::new()
//!     .with_child(BlockElement::div().with_border(LineWidth::Single).with_child("hello"));
//! let text = ConsoleRenderer::render_document_to_text(&mut doc, Rect::new(0, 0, 20, Size::INFINITY))?;
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (alignment, wrap modes, line widths, colors)
//! - [`geometry`] - Size, Rect, Thickness
//! - [`buffer`] - Styled cell buffer with line merging
//! - [`elements`] - Element tree and container policies
//! - [`layout`] - Pass state, alignment, paragraphs, text measurement
//! - [`renderer`] - Document rendering and render targets

pub mod buffer;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use buffer::{ConsoleBuffer, ConsoleChar, LineFlags};

pub use elements::{
    BlockElement, BlockKind, BlockStyle, Document, Element, Grid, GridLength, InlineElement,
    InlineKind, InlineStyle,
};

pub use error::{Error, LayoutError, ParseError, Result};

pub use geometry::{Rect, Size, Thickness};

pub use layout::text_measure::{break_lines, measure_lines, string_width, LineRange};
pub use layout::{Inherited, LayoutState};

pub use renderer::{buffer_to_text, ConsoleRenderer, RenderTarget, TextRenderTarget};
