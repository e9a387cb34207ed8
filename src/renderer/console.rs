//! One-call document rendering.

use log::debug;

use super::target::{buffer_to_text, RenderTarget};
use crate::buffer::ConsoleBuffer;
use crate::elements::Document;
use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::types::LineCharset;

/// Drives measure, arrange and render for a whole document.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Lay out and paint `document` into a fresh buffer.
    ///
    /// `rect` gives the origin and the available size. A height of
    /// [`Size::INFINITY`] is replaced by the document's desired height, so the
    /// buffer grows to fit the content. The buffer covers `rect` from the
    /// origin: its size is `(x + width, y + height)`.
    pub fn render_document(document: &mut Document, rect: Rect) -> Result<ConsoleBuffer> {
        let available = Size::new(rect.width, rect.height);
        debug!(target: "console_format::renderer", "measure document in {available}");
        let desired = document.measure(available);

        let resolved = available.finite_or(desired);
        let rect = Rect::new(rect.x, rect.y, resolved.width, resolved.height);
        debug!(target: "console_format::renderer", "arrange document into {rect} (desired {desired})");
        document.arrange(rect)?;

        let mut buffer = ConsoleBuffer::new(rect.right(), rect.bottom());
        debug!(target: "console_format::renderer", "render document into {}x{} buffer", buffer.width(), buffer.height());
        document.render(&mut buffer)?;
        Ok(buffer)
    }

    /// Render `document` and hand the buffer to `target`.
    pub fn render_document_to<T: RenderTarget>(document: &mut Document, rect: Rect, target: &mut T) -> Result<()> {
        let buffer = Self::render_document(document, rect)?;
        target.render(&buffer)?;
        Ok(())
    }

    /// Render `document` to plain text with Unicode line glyphs.
    pub fn render_document_to_text(document: &mut Document, rect: Rect) -> Result<String> {
        let buffer = Self::render_document(document, rect)?;
        Ok(buffer_to_text(&buffer, LineCharset::Unicode))
    }
}
