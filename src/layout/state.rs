use log::trace;

use crate::error::LayoutError;
use crate::geometry::{Rect, Size};
use crate::types::{Color, TextAlign, TextWrap};

// =============================================================================
// Layout State
// =============================================================================

/// How far an element has progressed through the layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LayoutState {
    #[default]
    Unmeasured,
    Measured,
    Arranged,
    Rendered,
}

// =============================================================================
// Inherited values
// =============================================================================

/// Values flowing from a block down to its descendants.
///
/// Elements keep no parent pointers; each pass hands the resolved context of
/// the parent to its children instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inherited {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub wrap: TextWrap,
    pub text_align: TextAlign,
}

// =============================================================================
// Layout Slot
// =============================================================================

/// Per-element pass results plus the measure cache key.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct LayoutSlot {
    state: LayoutState,
    measured_with: Option<(Size, Inherited)>,
    desired: Option<Size>,
    rect: Option<Rect>,
}

impl LayoutSlot {
    #[inline]
    pub fn state(&self) -> LayoutState {
        self.state
    }

    #[inline]
    pub fn desired(&self) -> Option<Size> {
        self.desired
    }

    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Previous measure result for the same inputs, if any.
    pub fn cached(&self, available: Size, inherited: &Inherited) -> Option<Size> {
        match self.measured_with {
            Some((size, ctx)) if size == available && ctx == *inherited => self.desired,
            _ => None,
        }
    }

    pub fn set_measured(&mut self, available: Size, inherited: Inherited, desired: Size) {
        self.measured_with = Some((available, inherited));
        self.desired = Some(desired);
        self.mark_measured();
    }

    /// Drop any arrange result, keeping the measure result.
    pub fn mark_measured(&mut self) {
        self.state = LayoutState::Measured;
        self.rect = None;
    }

    /// Forget everything; the element must be measured again.
    pub fn invalidate(&mut self) {
        *self = Self::default();
    }

    pub fn set_arranged(&mut self, rect: Rect) {
        self.state = LayoutState::Arranged;
        self.rect = Some(rect);
    }

    pub fn set_rendered(&mut self) {
        self.state = LayoutState::Rendered;
    }

    /// Fail unless the element reached `required`.
    pub fn require(
        &self,
        required: LayoutState,
        element: &'static str,
        pass: &'static str,
    ) -> Result<(), LayoutError> {
        if self.state >= required {
            return Ok(());
        }
        trace!(target: "console_format::layout", "{pass} {element} rejected in state {:?}", self.state);
        Err(LayoutError::OutOfOrder {
            element,
            pass,
            state: self.state,
            required,
        })
    }
}
