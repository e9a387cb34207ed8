//! Rendering: driving the passes and handing buffers to targets.
//!
//! [`ConsoleRenderer`] runs measure, arrange and render over a document and
//! returns the painted [`ConsoleBuffer`](crate::buffer::ConsoleBuffer).
//! [`RenderTarget`] implementations consume that buffer; the crate ships a
//! plain-text target.

mod console;
mod target;

pub use console::ConsoleRenderer;
pub use target::{buffer_to_text, RenderTarget, TextRenderTarget};
