use crate::geometry::Size;
use crate::types::{AxisAlign, TextAlign};

/// Resolve one axis of an element box inside the space offered to it.
///
/// `desired` is the measured box extent (margin excluded). Returns the
/// offset from the start of the offered space and the final extent.
///
/// An explicit extent always wins and may overflow. Without an explicit
/// extent an unset alignment stretches; with one it starts.
pub fn resolve_axis(
    available: usize,
    desired: usize,
    explicit: Option<usize>,
    align: Option<AxisAlign>,
) -> (usize, usize) {
    let available = if available == Size::INFINITY { desired } else { available };
    let align = align.unwrap_or(if explicit.is_some() {
        AxisAlign::Start
    } else {
        AxisAlign::Stretch
    });

    let extent = match (explicit, align) {
        (Some(extent), _) => extent,
        (None, AxisAlign::Stretch) => available,
        (None, _) => desired.min(available),
    };

    let slack = available.saturating_sub(extent);
    let offset = match align {
        AxisAlign::Start | AxisAlign::Stretch => 0,
        AxisAlign::Center => slack / 2,
        AxisAlign::End => slack,
    };

    (offset, extent)
}

/// Column at which a line of `line_width` starts inside `width`.
pub fn line_offset(align: TextAlign, width: usize, line_width: usize) -> usize {
    let slack = width.saturating_sub(line_width);
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => slack / 2,
        TextAlign::Right => slack,
    }
}
