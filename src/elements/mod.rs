//! Element tree.
//!
//! # Architecture
//!
//! ```text
//! Document
//! └── BlockElement (Div | Stack | Grid | Fill)
//!     ├── BlockElement ...
//!     └── InlineElement (Span | LineBreak)   <- leaves only
//! ```
//!
//! Each element carries its own pass results (desired size, render rect,
//! state). Parents own their children exclusively and keep no back-pointers;
//! inherited values travel down the passes as an [`Inherited`] context.
//!
//! # Design Decisions
//!
//! - **Closed set of kinds**: container behavior is a policy selected by
//!   [`BlockKind`] (`stack` or `grid`), not a trait object per node.
//! - **Anonymous paragraphs**: consecutive inline children are broken into
//!   lines together; containers treat the run as one child.
//! - **Inline elements have no children**: enforced by the type.
//!
//! [`Inherited`]: crate::layout::Inherited

mod block;
mod document;
mod element;
mod flow;
mod grid;
mod inline;
mod stack;
mod style;

pub use block::{BlockElement, BlockKind};
pub use document::Document;
pub use element::Element;
pub use grid::{Grid, GridLength};
pub use inline::{InlineElement, InlineKind};
pub use style::{BlockStyle, InlineStyle};
