//! Error types for console-format.
//!
//! Layout input is valid by type, so the errors here cover two things only:
//! protocol misuse (arranging or rendering an element that has not been
//! through the previous pass) and text conversion of configuration values.
//! Overflow and out-of-range painting are never errors.

use thiserror::Error;

use crate::layout::LayoutState;

/// Result type alias for console-format operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Measure/arrange/render called out of order
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration value could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Render target failed to write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Layout protocol violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A pass was invoked before the pass it depends on.
    #[error("cannot {pass} {element}: element is {state:?}, requires {required:?}")]
    OutOfOrder {
        element: &'static str,
        pass: &'static str,
        state: LayoutState,
        required: LayoutState,
    },
}

/// Configuration value conversion failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid thickness {0:?}: expected 1, 2 or 4 non-negative integers")]
    Thickness(String),
}
