// Copyright 2025 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The windowed list renderer.

use core::fmt;
use core::num::NonZeroUsize;
use core::ops::Range;

use tracing::{debug, trace, warn};
use windrow_grid::{RowGrid, Window, compute_window};

use crate::{ListError, ListLayout, ListNode, ScrollBehavior, Spacer, Viewport};

/// Element factory: maps one item to one host element.
///
/// The factory must be pure with respect to shared layout state and is called
/// exactly once per materialized item per render pass. Context the elements
/// need (selection state, thumbnail resolvers, …) is captured by the closure
/// when the list is constructed rather than read from ambient globals.
pub type RenderItem<T, E> = Box<dyn Fn(&T) -> E>;

/// Alignment mode when scrolling a specific index into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top of the item's row with the top of the viewport.
    Start,
    /// Center the item's row within the viewport.
    Center,
    /// Align the bottom of the item's row with the bottom of the viewport.
    End,
    /// Move just enough to make the row fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// A windowed list renderer over a host [`Viewport`].
///
/// The renderer owns a logical item collection, a viewport, and layout
/// parameters; on scroll, resize-driven refresh, or data change it computes
/// which contiguous index range is visible plus buffer, materializes only
/// that range through the element factory, and synthesizes spacers above and
/// below so the total scroll height and scrollbar proportions stay exact no
/// matter how large the collection is.
///
/// The item collection is replaced wholesale via [`WindowedList::set_items`]
/// whenever upstream filtering or sorting changes; no diffing is performed.
/// Re-render cost is dominated by the visible-range size, not the collection
/// size.
///
/// All operations run synchronously to completion and take `&mut self`, so
/// overlapping renders are unrepresentable. [`WindowedList::destroy`]
/// consumes the renderer and hands the emptied viewport back.
pub struct WindowedList<T, V: Viewport> {
    viewport: V,
    items: Vec<T>,
    grid: RowGrid,
    buffer_rows: usize,
    render_item: RenderItem<T, V::Element>,
    window: Window,
}

impl<T, V: Viewport> WindowedList<T, V> {
    /// Creates a renderer over `viewport` with an initial collection.
    ///
    /// Nothing is rendered until [`WindowedList::mount`] is called. The
    /// viewport is owned by the renderer from here on: nothing else may
    /// mutate its children until [`WindowedList::destroy`] returns it.
    ///
    /// # Errors
    ///
    /// Returns a [`ListError`] when `layout.row_height` is not positive and
    /// finite, or when the viewport reports a client height that is not
    /// finite and non-negative. On error the viewport is not touched.
    pub fn new(
        viewport: V,
        items: Vec<T>,
        layout: ListLayout,
        render_item: RenderItem<T, V::Element>,
    ) -> Result<Self, ListError> {
        if !layout.row_height.is_finite() || layout.row_height <= 0.0 {
            return Err(ListError::InvalidRowHeight(layout.row_height));
        }
        let client_height = viewport.client_height();
        if !client_height.is_finite() || client_height < 0.0 {
            return Err(ListError::InvalidViewportHeight(client_height));
        }
        Ok(Self {
            viewport,
            items,
            grid: RowGrid::new(layout.row_height, layout.columns),
            buffer_rows: layout.buffer_rows,
            render_item,
            window: Window::EMPTY,
        })
    }

    /// Performs the first render, replacing whatever children the viewport
    /// currently has.
    ///
    /// While mounted, the host routes the viewport's scroll events to
    /// [`WindowedList::handle_scroll`].
    pub fn mount(&mut self) {
        debug!(items = self.items.len(), "mounting windowed list");
        self.render(false);
    }

    /// Recomputes the window and replaces the viewport's children.
    ///
    /// With `preserve_scroll`, the scroll offset is snapshotted before the
    /// replacement and restored afterwards; hosts clamp or reset the offset
    /// when content shrinks above the viewport, so restoration has to be
    /// explicit. Without it, the offset is left to whatever the replacement
    /// produces, which is what a scroll-event-driven render wants.
    pub fn render(&mut self, preserve_scroll: bool) {
        let saved = preserve_scroll.then(|| self.viewport.scroll_top());
        let window = compute_window(
            &self.grid,
            self.items.len(),
            self.viewport.scroll_top(),
            self.viewport.client_height(),
            self.buffer_rows,
        );
        trace!(start = window.start, end = window.end, "render pass");

        let render_item = &self.render_item;
        let lead =
            (window.lead_height > 0.0).then(|| ListNode::Spacer(Spacer::new(window.lead_height)));
        let tail =
            (window.tail_height > 0.0).then(|| ListNode::Spacer(Spacer::new(window.tail_height)));
        let materialized = self.items[window.indices()]
            .iter()
            .map(|item| ListNode::Item(render_item(item)));
        self.viewport.set_children(
            lead.into_iter().chain(materialized).chain(tail),
            window.content_height,
        );

        if let Some(scroll_top) = saved {
            self.viewport.set_scroll_top(scroll_top, ScrollBehavior::Auto);
        }
        self.window = window;
    }

    /// Scroll-event entry point: re-renders at the viewport's new offset.
    ///
    /// No scroll preservation is involved; the offset is already correct, it
    /// is what caused the event.
    pub fn handle_scroll(&mut self) {
        self.render(false);
    }

    /// Replaces the entire item collection and re-renders.
    ///
    /// This is the only sanctioned way to reflect upstream filter or sort
    /// changes; the previous collection is discarded without diffing.
    pub fn set_items(&mut self, items: Vec<T>, preserve_scroll: bool) {
        self.items = items;
        self.render(preserve_scroll);
    }

    /// Re-renders with scroll preservation.
    ///
    /// Used after layout changes (for example a column count recomputed from
    /// the container width) so the same logical position stays visually
    /// stable, clamped to the new scrollable range.
    pub fn refresh(&mut self) {
        self.render(true);
    }

    /// Sets the number of items per row, clamped to at least one.
    ///
    /// Takes effect on the next render; resize drivers follow up with
    /// [`WindowedList::refresh`].
    pub fn set_columns(&mut self, columns: usize) {
        self.grid
            .set_columns(NonZeroUsize::new(columns).unwrap_or(NonZeroUsize::MIN));
    }

    /// Sets the row height.
    ///
    /// Finite negative values are clamped to `0.0`, and a collapsed row
    /// height renders an empty window until a real height is set again.
    /// Takes effect on the next render.
    pub fn set_row_height(&mut self, row_height: f64) {
        self.grid.set_row_height(row_height);
    }

    /// Sets the number of buffer rows rendered beyond the viewport on each
    /// side. Takes effect on the next render.
    pub fn set_buffer_rows(&mut self, buffer_rows: usize) {
        self.buffer_rows = buffer_rows;
    }

    /// Returns the first index whose item matches `key` under `key_fn`, by
    /// linear scan.
    pub fn index_of<K, F>(&self, key: &K, key_fn: F) -> Option<usize>
    where
        K: PartialEq + ?Sized,
        F: Fn(&T) -> &K,
    {
        self.items.iter().position(|item| key_fn(item) == key)
    }

    /// Scrolls the item matching `key` to the top of the viewport.
    ///
    /// Returns the resolved index, or `None` (with a logged warning and no
    /// scrolling) when no item matches. Because spacers reserve the height of
    /// every unrendered row, the target offset is exact even when the row is
    /// not currently materialized.
    pub fn scroll_to_key<K, F>(
        &mut self,
        key: &K,
        key_fn: F,
        behavior: ScrollBehavior,
    ) -> Option<usize>
    where
        K: PartialEq + fmt::Debug + ?Sized,
        F: Fn(&T) -> &K,
    {
        match self.index_of(key, key_fn) {
            Some(index) => {
                self.scroll_to_index(index, ScrollAlign::Start, behavior);
                Some(index)
            }
            None => {
                warn!(key = ?key, "scroll target not present in the collection");
                None
            }
        }
    }

    /// Scrolls so that the row holding `index` is brought into view with the
    /// given alignment.
    ///
    /// Out-of-range indices are clamped to the last item; an empty collection
    /// scrolls to the top. Hosts deliver a scroll event for the resulting
    /// movement (headless callers follow up with
    /// [`WindowedList::handle_scroll`]), which is what re-renders the window
    /// at the new position.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign, behavior: ScrollBehavior) {
        if self.items.is_empty() {
            self.viewport.set_scroll_top(0.0, behavior);
            return;
        }
        let index = index.min(self.items.len() - 1);
        let row_start = self.grid.offset_of_row(self.grid.row_of(index));
        let row_end = row_start + self.grid.row_height();
        let viewport_height = self.viewport.client_height();

        let target = match align {
            ScrollAlign::Start => row_start,
            ScrollAlign::End => (row_end - viewport_height).max(0.0),
            ScrollAlign::Center => {
                ((row_start + row_end) / 2.0 - viewport_height / 2.0).max(0.0)
            }
            ScrollAlign::Nearest => {
                let current = self.viewport.scroll_top();
                if row_start >= current && row_end <= current + viewport_height {
                    // Already fully visible: stay put.
                    current
                } else if row_start < current {
                    row_start
                } else {
                    (row_end - viewport_height).max(0.0)
                }
            }
        };
        self.viewport.set_scroll_top(target, behavior);
    }

    /// Empties the viewport and hands it back, consuming the renderer.
    pub fn destroy(mut self) -> V {
        debug!("destroying windowed list");
        self.viewport.set_children(core::iter::empty(), 0.0);
        self.viewport
    }

    /// Returns the most recently computed window.
    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Convenience range over the most recently materialized indices.
    #[must_use]
    pub const fn visible_indices(&self) -> Range<usize> {
        self.window.indices()
    }

    /// Returns the item collection, in render order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current layout parameters.
    #[must_use]
    pub fn layout(&self) -> ListLayout {
        ListLayout {
            row_height: self.grid.row_height(),
            columns: NonZeroUsize::new(self.grid.columns()).unwrap_or(NonZeroUsize::MIN),
            buffer_rows: self.buffer_rows,
        }
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Returns the viewport mutably, for hosts that feed scroll state in
    /// through it.
    ///
    /// Mutating the viewport's *children* through this reference corrupts the
    /// renderer's bookkeeping; child management belongs to the renderer alone
    /// for as long as it owns the viewport.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

impl<T, V: Viewport> fmt::Debug for WindowedList<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedList")
            .field("items", &self.items.len())
            .field("grid", &self.grid)
            .field("buffer_rows", &self.buffer_rows)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{ScrollAlign, WindowedList};
    use crate::{HeadlessViewport, ListError, ListLayout, ListNode, ScrollBehavior, Viewport};

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        avatar: String,
        name: String,
    }

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                avatar: format!("card-{i}.png"),
                name: format!("Card {i}"),
            })
            .collect()
    }

    fn card_list(
        n: usize,
        layout: ListLayout,
        client_height: f64,
    ) -> WindowedList<Card, HeadlessViewport<String>> {
        WindowedList::new(
            HeadlessViewport::new(client_height),
            cards(n),
            layout,
            Box::new(|card: &Card| card.name.clone()),
        )
        .expect("valid configuration")
    }

    fn spacer_heights(viewport: &HeadlessViewport<String>) -> Vec<f64> {
        viewport
            .children()
            .iter()
            .filter_map(|node| match node {
                ListNode::Spacer(spacer) => Some(spacer.height),
                ListNode::Item(_) => None,
            })
            .collect()
    }

    fn item_count(viewport: &HeadlessViewport<String>) -> usize {
        viewport
            .children()
            .iter()
            .filter(|node| node.as_item().is_some())
            .count()
    }

    #[test]
    fn mount_materializes_only_the_window() {
        let mut list = card_list(1000, ListLayout::default(), 600.0);
        list.mount();

        // 4 rows cover 600px at 150px each, plus 2 buffer rows below.
        let window = list.window();
        assert_eq!((window.start, window.end), (0, 30));
        assert_eq!(item_count(list.viewport()), 30);
        assert_eq!(spacer_heights(list.viewport()), vec![(200.0 - 6.0) * 150.0]);
        assert_eq!(list.viewport().content_height(), 200.0 * 150.0);
    }

    #[test]
    fn scroll_event_moves_the_window() {
        let mut list = card_list(1000, ListLayout::default(), 600.0);
        list.mount();

        list.viewport_mut().set_scroll_top(900.0, ScrollBehavior::Auto);
        list.handle_scroll();

        // First covered row is 6, buffered back to 4.
        let window = list.window();
        assert_eq!(window.start, 4 * 5);
        assert_eq!(list.viewport().scroll_top(), 900.0);
        assert_eq!(spacer_heights(list.viewport())[0], 4.0 * 150.0);
    }

    #[test]
    fn render_is_idempotent_with_preserved_scroll() {
        let mut list = card_list(200, ListLayout::default(), 600.0);
        list.mount();
        list.viewport_mut().set_scroll_top(1200.0, ScrollBehavior::Auto);
        list.handle_scroll();

        list.render(true);
        let children = list.viewport().children().to_vec();
        let scroll_top = list.viewport().scroll_top();

        list.render(true);
        assert_eq!(list.viewport().children(), &children[..]);
        assert_eq!(list.viewport().scroll_top(), scroll_top);
    }

    #[test]
    fn set_items_at_top_starts_at_zero() {
        let mut list = card_list(100, ListLayout::default(), 600.0);
        list.mount();

        list.set_items(cards(37), false);
        assert_eq!(list.window().start, 0);
        assert_eq!(list.len(), 37);
    }

    #[test]
    fn set_items_preserving_scroll_clamps_to_new_range() {
        let mut list = card_list(1000, ListLayout::default(), 600.0);
        list.mount();
        list.viewport_mut()
            .set_scroll_top(10_000.0, ScrollBehavior::Auto);
        list.handle_scroll();

        // 10 items fit well inside one viewport; the offset collapses to 0.
        list.set_items(cards(10), true);
        assert_eq!(list.viewport().scroll_top(), 0.0);

        // Real hosts fire a scroll event for the clamp; deliver it.
        list.handle_scroll();
        assert_eq!(list.window().indices(), 0..10);
    }

    #[test]
    fn refresh_after_column_change_preserves_scroll() {
        let mut list = card_list(1000, ListLayout::default(), 600.0);
        list.mount();
        list.viewport_mut()
            .set_scroll_top(10_000.0, ScrollBehavior::Auto);
        list.handle_scroll();

        // Widening to 10 columns halves the content height; the offset is
        // still in range and must survive the re-render exactly.
        list.set_columns(10);
        list.refresh();
        assert_eq!(list.viewport().scroll_top(), 10_000.0);
        assert_eq!(list.layout().columns.get(), 10);

        // Widening further shrinks content below the offset; it clamps.
        list.set_columns(50);
        list.refresh();
        let max = list.viewport().max_scroll_top();
        assert_eq!(list.viewport().scroll_top(), max);
        assert!(max < 10_000.0);
    }

    #[test]
    fn zero_columns_are_clamped_to_one() {
        let mut list = card_list(10, ListLayout::default(), 600.0);
        list.set_columns(0);
        list.refresh();
        assert_eq!(list.layout().columns.get(), 1);
        assert_eq!(list.window().content_height, 10.0 * 150.0);
    }

    #[test]
    fn spacer_sum_keeps_scrollbar_geometry() {
        let layout = ListLayout::new(180.0, 5, 3);
        let mut list = card_list(37, layout, 600.0);
        list.mount();
        assert_eq!(list.viewport().max_scroll_top(), 840.0);

        let mut scroll = 0.0;
        while scroll <= list.viewport().max_scroll_top() {
            list.viewport_mut().set_scroll_top(scroll, ScrollBehavior::Auto);
            list.handle_scroll();

            let realized_rows = list.window().len().div_ceil(5);
            let spacers: f64 = spacer_heights(list.viewport()).iter().sum();
            assert_eq!(
                spacers + realized_rows as f64 * 180.0,
                list.viewport().content_height(),
                "geometry diverged at scroll {scroll}"
            );
            scroll += 97.0;
        }
    }

    #[test]
    fn scroll_to_key_lands_on_the_row() {
        let mut list = card_list(100, ListLayout::default(), 600.0);
        list.mount();

        let index = list.scroll_to_key("card-37.png", |card| card.avatar.as_str(), ScrollBehavior::Auto);
        assert_eq!(index, Some(37));
        // Item 37 sits in row 7 of a 5-wide grid.
        assert_eq!(list.viewport().scroll_top(), 7.0 * 150.0);
    }

    #[test]
    fn scroll_to_missing_key_is_a_no_op() {
        let mut list = card_list(100, ListLayout::default(), 600.0);
        list.mount();
        list.viewport_mut().set_scroll_top(450.0, ScrollBehavior::Auto);
        list.handle_scroll();

        let index = list.scroll_to_key("nope.png", |card| card.avatar.as_str(), ScrollBehavior::Auto);
        assert_eq!(index, None);
        assert_eq!(list.viewport().scroll_top(), 450.0);
    }

    #[test]
    fn scroll_to_index_alignment_behaves_as_expected() {
        // Single column, 10 rows of 10px, 30px viewport.
        let mut list = card_list(10, ListLayout::new(10.0, 1, 0), 30.0);
        list.mount();

        list.scroll_to_index(3, ScrollAlign::Start, ScrollBehavior::Auto);
        assert_eq!(list.viewport().scroll_top(), 30.0);

        list.scroll_to_index(3, ScrollAlign::End, ScrollBehavior::Auto);
        assert_eq!(list.viewport().scroll_top(), 10.0);

        list.scroll_to_index(3, ScrollAlign::Center, ScrollBehavior::Auto);
        assert_eq!(list.viewport().scroll_top(), 20.0);

        let before = list.viewport().scroll_top();
        list.scroll_to_index(3, ScrollAlign::Nearest, ScrollBehavior::Auto);
        assert_eq!(list.viewport().scroll_top(), before);

        // Clamped out-of-range index resolves to the last row.
        list.scroll_to_index(999, ScrollAlign::Start, ScrollBehavior::Auto);
        assert_eq!(
            list.viewport().scroll_top(),
            list.viewport().max_scroll_top()
        );
    }

    #[test]
    fn empty_collection_renders_nothing() {
        let mut list = card_list(0, ListLayout::default(), 600.0);
        list.mount();

        assert!(list.viewport().children().is_empty());
        assert!(list.window().is_empty());
        assert_eq!(list.viewport().content_height(), 0.0);

        // Lookups against the empty collection stay no-ops.
        let index = list.scroll_to_key("card-0.png", |card| card.avatar.as_str(), ScrollBehavior::Auto);
        assert_eq!(index, None);
    }

    #[test]
    fn factory_runs_once_per_materialized_item() {
        let calls = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&calls);
        let mut list = WindowedList::new(
            HeadlessViewport::new(600.0),
            cards(1000),
            ListLayout::default(),
            Box::new(move |card: &Card| {
                counter.set(counter.get() + 1);
                card.name.clone()
            }),
        )
        .expect("valid configuration");

        list.mount();
        assert_eq!(calls.get(), list.window().len());
    }

    #[test]
    fn construction_rejects_bad_geometry() {
        let layout = ListLayout::new(f64::NAN, 5, 2);
        let result = WindowedList::new(
            HeadlessViewport::new(600.0),
            cards(5),
            layout,
            Box::new(|card: &Card| card.name.clone()),
        );
        assert!(matches!(
            result.err(),
            Some(ListError::InvalidRowHeight(height)) if height.is_nan()
        ));

        let result = WindowedList::new(
            HeadlessViewport::new(f64::NAN),
            cards(5),
            ListLayout::default(),
            Box::new(|card: &Card| card.name.clone()),
        );
        assert!(matches!(
            result.err(),
            Some(ListError::InvalidViewportHeight(_))
        ));

        let result = WindowedList::new(
            HeadlessViewport::new(600.0),
            cards(5),
            ListLayout::new(0.0, 5, 2),
            Box::new(|card: &Card| card.name.clone()),
        );
        assert_eq!(result.err(), Some(ListError::InvalidRowHeight(0.0)));
    }

    #[test]
    fn destroy_empties_and_returns_the_viewport() {
        let mut list = card_list(100, ListLayout::default(), 600.0);
        list.mount();
        list.viewport_mut().set_scroll_top(900.0, ScrollBehavior::Auto);

        let viewport = list.destroy();
        assert!(viewport.children().is_empty());
        assert_eq!(viewport.content_height(), 0.0);
        assert_eq!(viewport.scroll_top(), 0.0);
    }
}
