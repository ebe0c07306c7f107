// Copyright 2025 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windrow_grid --heading-base-level=0

//! Windrow Grid: pure layout math for windowed (virtualized) grid lists.
//!
//! This crate provides the renderer-agnostic core for windowing a dense,
//! row-major grid of items indexed `0..len`: given a scroll position and a
//! viewport height, it answers which contiguous index range should be
//! materialized and how much spacer extent stands in for everything else.
//! It is intended to be shared across different UI stacks and list/grid
//! implementations.
//!
//! The core concepts are:
//!
//! - [`RowGrid`]: the geometry of a row-major grid with a uniform row height
//!   and a fixed number of columns. Maps between flat item indices, rows, and
//!   vertical pixel offsets.
//! - [`Window`]: the result of a visibility query. Carries the materialized
//!   index range `[start, end)` together with the spacer geometry
//!   (`lead_height`, `tail_height`) and the total `content_height` that keeps
//!   scrollbar proportions exact.
//! - [`compute_window`]: a pure function that, given a grid, an item count, a
//!   scroll offset, a viewport height, and a buffer of extra rows, returns
//!   the [`Window`] to realize.
//! - [`columns_for_width`]: the conventional `max(1, floor(width / item))`
//!   column computation used by hosts that derive their column count from the
//!   container width.
//!
//! This crate deliberately does **not** know about items, elements, or any
//! particular UI framework. Host-facing layers (such as `windrow_list`) are
//! responsible for:
//!
//! - Owning the item collection and the element factory.
//! - Calling [`compute_window`] when scroll, viewport, or data changes.
//! - Materializing elements for `[start, end)` and emitting spacer nodes
//!   sized to `lead_height` and `tail_height`.
//!
//! ## Minimal example
//!
//! A 37-item grid, five items per row, 180 pixel rows, viewed through a
//! 600 pixel viewport with three buffer rows:
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use windrow_grid::{RowGrid, compute_window};
//!
//! let grid = RowGrid::new(180.0, NonZeroUsize::new(5).unwrap());
//! let window = compute_window(&grid, 37, 0.0, 600.0, 3);
//!
//! // Rows 0..7 are realized (4 visible + 3 buffered), clamped to the data.
//! assert_eq!((window.start, window.end), (0, 35));
//! // The two unrealized items occupy one trailing row of spacer.
//! assert_eq!(window.tail_height, 180.0);
//! // Scrollbar geometry is independent of the scroll position.
//! assert_eq!(window.content_height, 8.0 * 180.0);
//! ```
//!
//! All offsets and heights live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite; non-finite and
//! negative inputs are clamped rather than propagated.
//!
//! This crate is `no_std` and dependency-free.

#![no_std]

mod grid;
mod window;

pub use grid::{RowGrid, columns_for_width};
pub use window::{Window, compute_window};
