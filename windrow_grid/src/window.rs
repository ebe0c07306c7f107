// Copyright 2025 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-window computation over a row-major grid.

use core::ops::Range;

use crate::RowGrid;

/// Result of a visibility query over a row-major grid.
///
/// The `[start, end)` range names the items to materialize; `lead_height` and
/// `tail_height` are the spacer extents standing in for the unrealized rows
/// before and after them. The sum of the spacers and the realized rows always
/// equals `content_height`, so a host that emits exactly these three pieces
/// keeps its scrollbar geometry independent of the scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// First materialized index (inclusive).
    pub start: usize,
    /// One past the last materialized index (exclusive).
    pub end: usize,

    /// Spacer height standing in for the rows before `start`.
    pub lead_height: f64,
    /// Spacer height standing in for the rows at or after `end`.
    pub tail_height: f64,
    /// Total height of the entire grid (all items `0..len`).
    pub content_height: f64,
}

impl Window {
    /// The window over an empty grid.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        lead_height: 0.0,
        tail_height: 0.0,
        content_height: 0.0,
    };

    /// Returns `true` if no items are materialized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the number of materialized items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the materialized index range.
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Computes the window of a `len`-item grid to materialize, given scroll
/// position, viewport height, and a buffer of extra rows on each side.
///
/// - `scroll_top`: top of the viewport in grid coordinates (`>= 0`).
/// - `viewport_height`: height of the viewport in grid coordinates (`>= 0`).
/// - `buffer_rows`: extra rows realized above and below the viewport to
///   reduce popping during fast scrolls.
///
/// The realized range always covers whole rows: `start` is the first index of
/// its row and `end` is either a row boundary or `len`. Degenerate inputs
/// (no items, a collapsed row height, negative or NaN scroll positions) yield
/// a clamped window rather than a panic.
#[must_use]
pub fn compute_window(
    grid: &RowGrid,
    len: usize,
    scroll_top: f64,
    viewport_height: f64,
    buffer_rows: usize,
) -> Window {
    let row_height = grid.row_height();
    if len == 0 || row_height <= 0.0 {
        return Window::EMPTY;
    }

    let scroll_top = scroll_top.max(0.0);
    let viewport_height = viewport_height.max(0.0);
    let rows = grid.row_count(len);

    let first_row = grid.row_at_offset(scroll_top);
    let last_row = rows_to_cover(scroll_top + viewport_height, row_height);

    let start_row = first_row.saturating_sub(buffer_rows).min(rows);
    let end_row = last_row.saturating_add(buffer_rows).min(rows);

    let columns = grid.columns();
    let start = start_row.saturating_mul(columns).min(len);
    let end = end_row.saturating_mul(columns).min(len);

    // Lead height comes from the row bound rather than `start / columns` so
    // the spacer-sum invariant holds even when `start` was clamped to `len`.
    let lead_height = grid.offset_of_row(start_row);
    let tail_height = (len - end).div_ceil(columns) as f64 * row_height;
    let content_height = grid.content_height(len);

    Window {
        start,
        end,
        lead_height,
        tail_height,
        content_height,
    }
}

/// Number of whole rows needed to cover `extent` of vertical space.
fn rows_to_cover(extent: f64, row_height: f64) -> usize {
    let ratio = extent / row_height;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The ratio is non-negative, so the saturating cast is a floor"
    )]
    let whole = ratio as usize;
    if (whole as f64) < ratio {
        whole.saturating_add(1)
    } else {
        whole
    }
}
