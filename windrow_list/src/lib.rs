// Copyright 2025 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windrow_list --heading-base-level=0

//! Windrow List: a windowed list renderer over a host viewport.
//!
//! This crate renders large, arbitrarily-ordered collections into a
//! scrollable container while keeping the number of live elements bounded by
//! the viewport, not the collection. Only the rows intersecting the viewport
//! (plus a configurable buffer) are materialized; spacer nodes stand in for
//! everything else so the scrollbar geometry stays exact.
//!
//! The core concepts are:
//!
//! - [`Viewport`]: the host-side contract for a scrollable container. The
//!   renderer owns its viewport outright, which is how the "nothing else may
//!   touch these children" discipline is expressed in the type system.
//! - [`WindowedList`]: the renderer. It owns the item collection, the layout
//!   parameters, and the element factory; every scroll event, data update, or
//!   layout refresh replaces the viewport's children with the freshly
//!   computed window in a single operation.
//! - [`ListNode`] / [`Spacer`]: what the viewport receives — materialized
//!   elements bracketed by up to two spacers.
//! - [`ListLayout`]: row height, items per row, and buffer rows, with the
//!   conventional card-grid defaults.
//! - [`HeadlessViewport`]: an in-memory [`Viewport`] used by tests, doctests,
//!   and headless hosts.
//!
//! The window math itself (which rows a scroll position covers, and how much
//! spacer extent brackets them) lives in the dependency-free `windrow_grid`
//! crate; this crate binds it to items, elements, and a live container.
//!
//! ## Minimal example
//!
//! ```rust
//! use windrow_list::{HeadlessViewport, ListLayout, ScrollBehavior, WindowedList};
//!
//! let names: Vec<String> = (0..1_000).map(|i| format!("card {i}")).collect();
//!
//! // 600px viewport over 150px rows, five items per row.
//! let viewport: HeadlessViewport<String> = HeadlessViewport::new(600.0);
//! let mut list = WindowedList::new(
//!     viewport,
//!     names,
//!     ListLayout::default(),
//!     Box::new(|name: &String| name.clone()),
//! )
//! .unwrap();
//!
//! list.mount();
//! // Thirty live elements represent a thousand items.
//! assert_eq!(list.window().len(), 30);
//!
//! // A selection elsewhere in the UI can target unrendered rows; spacers
//! // reserve their height, so the offset is exact.
//! list.scroll_to_key("card 512", |name| name.as_str(), ScrollBehavior::Auto);
//! list.handle_scroll();
//! assert!(list.visible_indices().contains(&512));
//! ```
//!
//! ## Wiring into a host
//!
//! Hosts are responsible for the event plumbing the renderer stays out of:
//!
//! - Deliver the container's scroll events to [`WindowedList::handle_scroll`]
//!   while the list is mounted.
//! - Observe container resizes, recompute the column count (for example with
//!   `windrow_grid::columns_for_width`), and apply it via
//!   [`WindowedList::set_columns`] followed by [`WindowedList::refresh`].
//! - Feed re-filtered or re-sorted collections in through
//!   [`WindowedList::set_items`]; the renderer never mutates or reorders the
//!   collection itself.

mod error;
mod headless;
mod layout;
mod list;
mod viewport;

pub use error::ListError;
pub use headless::HeadlessViewport;
pub use layout::{DEFAULT_BUFFER_ROWS, DEFAULT_COLUMNS, DEFAULT_ROW_HEIGHT, ListLayout};
pub use list::{RenderItem, ScrollAlign, WindowedList};
pub use viewport::{ListNode, ScrollBehavior, Spacer, Viewport};
