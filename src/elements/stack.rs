//! Stacking policy shared by documents, divs and stacks.
//!
//! Vertical: each segment gets the content width and unbounded height;
//! desired = (widest segment, sum of heights).
//! Horizontal: each segment gets unbounded width and the content height;
//! desired = (sum of widths, tallest segment).

use super::element::Element;
use super::flow::{arrange_segment, measure_segment, segment_extent, segments};
use crate::error::Result;
use crate::geometry::{add_extent, Rect, Size};
use crate::layout::Inherited;
use crate::types::Orientation;

pub(crate) fn measure(
    children: &mut [Element],
    orientation: Orientation,
    available: Size,
    inherited: &Inherited,
) -> Size {
    let offered = offered(orientation, available);
    let mut desired = Size::EMPTY;

    for segment in segments(children) {
        let size = measure_segment(children, &segment, offered, inherited);
        desired = match orientation {
            Orientation::Vertical => Size::new(
                desired.width.max(size.width),
                add_extent(desired.height, size.height),
            ),
            Orientation::Horizontal => Size::new(
                add_extent(desired.width, size.width),
                desired.height.max(size.height),
            ),
        };
    }

    desired
}

pub(crate) fn arrange(
    children: &mut [Element],
    orientation: Orientation,
    content: Rect,
    inherited: &Inherited,
) -> Result<()> {
    let offered = offered(orientation, content.size());
    let mut cursor = match orientation {
        Orientation::Vertical => content.y,
        Orientation::Horizontal => content.x,
    };

    for segment in segments(children) {
        let size = segment_extent(children, &segment, offered, inherited);
        let slot = match orientation {
            Orientation::Vertical => Rect::new(content.x, cursor, content.width, size.height),
            Orientation::Horizontal => Rect::new(cursor, content.y, size.width, content.height),
        };
        arrange_segment(children, &segment, slot.clamp_to(&content), inherited)?;
        cursor = match orientation {
            Orientation::Vertical => slot.bottom(),
            Orientation::Horizontal => slot.right(),
        };
    }

    Ok(())
}

fn offered(orientation: Orientation, available: Size) -> Size {
    match orientation {
        Orientation::Vertical => Size::new(available.width, Size::INFINITY),
        Orientation::Horizontal => Size::new(Size::INFINITY, available.height),
    }
}
