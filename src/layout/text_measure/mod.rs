//! Text measurement for character-cell layout.
//!
//! Provides Unicode-aware width calculation and line breaking.
//!
//! # Capabilities
//!
//! - **Width calculation**: Correct cell width for any Unicode text
//! - **Grapheme awareness**: Never breaks in the middle of a grapheme cluster
//! - **Emoji sequences**: ZWJ families, skin tones, flags measured as width 2
//! - **Line breaking**: NoWrap, word-break and character-break modes
//!
//! # Implementation
//!
//! Uses `unicode-width` (East Asian Width tables) and `unicode-segmentation`
//! (UAX #29 grapheme cluster boundaries) as the foundation.

mod width;
mod wrap;

pub use width::{char_width, cluster_width, clusters, string_width, Cluster, Clusters};
pub use wrap::{break_lines, measure_lines, LineRange};
