//! Grid container policy.
//!
//! Children (one per cell, a run of inline children counting as one cell)
//! are placed row-major into the declared columns. Rows are as tall as their
//! tallest cell. With a stroke, one-cell lines run around and between all
//! cells and are merged like any other box drawing, so inner crossings come
//! out as ┼ and outer ones as ┬ ┤ ┴ ├.

use log::trace;

use super::element::Element;
use super::flow::{arrange_segment, measure_segment, segments};
use crate::buffer::ConsoleBuffer;
use crate::error::Result;
use crate::geometry::{Rect, Size, Thickness};
use crate::layout::Inherited;
use crate::types::{Color, LineWidth};

/// Width definition of one grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLength {
    /// As wide as the widest cell measured without constraint.
    #[default]
    Auto,
    /// Exactly this many cells.
    Fixed(usize),
    /// A weighted share of the width left by the other columns.
    /// Behaves as `Auto` when the available width is unbounded.
    Star(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Tracks {
    columns: Vec<usize>,
    rows: Vec<usize>,
}

/// Column definitions plus the track sizes of the last measure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    columns: Vec<GridLength>,
    stroke: Option<LineWidth>,
    tracks: Tracks,
}

impl Grid {
    /// A grid with the given columns. No columns means one `Auto` column.
    pub fn new(columns: impl IntoIterator<Item = GridLength>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Draw lines around and between cells.
    pub fn with_stroke(mut self, width: LineWidth) -> Self {
        self.stroke = Some(width);
        self
    }

    pub fn columns(&self) -> &[GridLength] {
        &self.columns
    }

    pub fn stroke(&self) -> Option<LineWidth> {
        self.stroke
    }

    /// Column widths resolved by the last measure.
    pub fn column_widths(&self) -> &[usize] {
        &self.tracks.columns
    }

    /// Row heights resolved by the last measure.
    pub fn row_heights(&self) -> &[usize] {
        &self.tracks.rows
    }

    fn column_count(&self) -> usize {
        self.columns.len().max(1)
    }

    fn definition(&self, column: usize) -> GridLength {
        self.columns.get(column).copied().unwrap_or_default()
    }

    fn gap(&self) -> usize {
        usize::from(self.stroke.is_some())
    }

    /// Total extent of a list of tracks including the lines around them.
    fn span(&self, tracks: &[usize]) -> usize {
        if tracks.is_empty() {
            return 0;
        }
        let gap = self.gap();
        tracks.iter().fold(gap, |total, track| total.saturating_add(track + gap))
    }

    /// Start offset of every track relative to the grid origin.
    fn offsets(&self, tracks: &[usize]) -> Vec<usize> {
        let gap = self.gap();
        let mut offset = gap;
        tracks
            .iter()
            .map(|track| {
                let start = offset;
                offset += track + gap;
                start
            })
            .collect()
    }

    // =========================================================================
    // Passes
    // =========================================================================

    pub(crate) fn measure(&mut self, children: &mut [Element], available: Size, inherited: &Inherited) -> Size {
        let cells = segments(children);
        if cells.is_empty() {
            self.tracks = Tracks::default();
            return Size::EMPTY;
        }

        let count = self.column_count();
        let star_total = (0..count)
            .filter_map(|col| match self.definition(col) {
                GridLength::Star(weight) => Some(weight),
                _ => None,
            })
            .fold(0usize, usize::saturating_add);
        let stars_are_auto = available.is_width_infinite() || star_total == 0;

        let mut columns = vec![0; count];
        for (col, width) in columns.iter_mut().enumerate() {
            if let GridLength::Fixed(fixed) = self.definition(col) {
                *width = fixed;
            }
        }

        for (index, cell) in cells.iter().enumerate() {
            let col = index % count;
            let content_sized = match self.definition(col) {
                GridLength::Auto => true,
                GridLength::Star(_) => stars_are_auto,
                GridLength::Fixed(_) => false,
            };
            if content_sized {
                let size = measure_segment(children, cell, Size::UNBOUNDED, inherited);
                columns[col] = columns[col].max(size.width);
            }
        }

        if !stars_are_auto {
            let used = (0..count)
                .filter(|&col| !matches!(self.definition(col), GridLength::Star(_)))
                .fold(self.gap() * (count + 1), |total, col| total.saturating_add(columns[col]));
            let remaining = available.width.saturating_sub(used);
            let stars: Vec<usize> = (0..count)
                .filter(|&col| matches!(self.definition(col), GridLength::Star(_)))
                .collect();
            let mut distributed = 0;
            for (n, &col) in stars.iter().enumerate() {
                let left = remaining - distributed;
                let share = if n + 1 == stars.len() {
                    left
                } else {
                    match self.definition(col) {
                        GridLength::Star(weight) => star_share(remaining, weight, star_total).min(left),
                        _ => 0,
                    }
                };
                columns[col] = share;
                distributed += share;
            }
        }

        let mut rows = vec![0; cells.len().div_ceil(count)];
        for (index, cell) in cells.iter().enumerate() {
            let offered = Size::new(columns[index % count], Size::INFINITY);
            let size = measure_segment(children, cell, offered, inherited);
            let row = &mut rows[index / count];
            *row = (*row).max(size.height);
        }

        trace!(target: "console_format::layout", "grid columns {columns:?} rows {rows:?}");
        let desired = Size::new(self.span(&columns), self.span(&rows));
        self.tracks = Tracks { columns, rows };
        desired
    }

    pub(crate) fn arrange(&self, children: &mut [Element], content: Rect, inherited: &Inherited) -> Result<()> {
        let count = self.column_count();
        let inner = content.deflate(Thickness::uniform(self.gap()));
        let xs = self.offsets(&self.tracks.columns);
        let ys = self.offsets(&self.tracks.rows);

        for (index, cell) in segments(children).iter().enumerate() {
            let (col, row) = (index % count, index / count);
            let (Some(&x), Some(&y)) = (xs.get(col), ys.get(row)) else {
                continue;
            };
            let slot = Rect::new(
                content.x + x,
                content.y + y,
                self.tracks.columns[col],
                self.tracks.rows[row],
            );
            arrange_segment(children, cell, slot.clamp_to(&inner), inherited)?;
        }

        Ok(())
    }

    /// Draw the stroke lines, clipped to the grid's content box.
    ///
    /// When the tracks overflow the box the frame closes at the box edge and
    /// separators past it are dropped.
    pub(crate) fn render_strokes(&self, buffer: &mut ConsoleBuffer, content: Rect, fg: Option<Color>) {
        let Some(width) = self.stroke else {
            return;
        };
        let Tracks { columns, rows } = &self.tracks;
        if columns.is_empty() || rows.is_empty() {
            return;
        }

        let frame = Rect::new(
            content.x,
            content.y,
            self.span(columns).min(content.width),
            self.span(rows).min(content.height),
        );
        if frame.is_empty() {
            return;
        }
        buffer.draw_rectangle(frame, width, fg);

        let bottom = frame.bottom() - 1;
        let mut y = frame.y;
        for row in rows {
            y = y.saturating_add(row + 1);
            if y >= bottom {
                break;
            }
            buffer.draw_horizontal_line(frame.x, y, frame.width, width, fg);
        }

        let right = frame.right() - 1;
        let mut x = frame.x;
        for column in columns {
            x = x.saturating_add(column + 1);
            if x >= right {
                break;
            }
            buffer.draw_vertical_line(x, frame.y, frame.height, width, fg);
        }
    }
}

/// `remaining * weight / total` without overflowing.
fn star_share(remaining: usize, weight: usize, total: usize) -> usize {
    let share = remaining as u128 * weight as u128 / total.max(1) as u128;
    usize::try_from(share).unwrap_or(remaining)
}
