// Copyright 2025 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A plain in-memory [`Viewport`] for tests and headless hosts.

use crate::{ListNode, ScrollBehavior, Viewport};

/// An in-memory [`Viewport`] with no real rendering behind it.
///
/// The viewport stores the children it is handed and models the scroll
/// clamping of a real scrollable element: programmatic scrolls are clamped to
/// the scrollable range, and replacing the children with shorter content
/// clamps the current offset the same way browsers clamp `scrollTop` when
/// content shrinks above the viewport.
///
/// This is the reference implementation used by this crate's tests and
/// examples; it is also useful for headless hosts that only need the window
/// bookkeeping, not real elements.
#[derive(Debug, Clone)]
pub struct HeadlessViewport<E> {
    client_height: f64,
    scroll_top: f64,
    content_height: f64,
    children: Vec<ListNode<E>>,
}

impl<E> HeadlessViewport<E> {
    /// Creates a viewport with the given client height and no content.
    #[must_use]
    pub fn new(client_height: f64) -> Self {
        Self {
            client_height,
            scroll_top: 0.0,
            content_height: 0.0,
            children: Vec::new(),
        }
    }

    /// Returns the current children, in order.
    #[must_use]
    pub fn children(&self) -> &[ListNode<E>] {
        &self.children
    }

    /// Returns the content height from the most recent child replacement.
    #[must_use]
    pub const fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Sets the client height, as an external resize would.
    ///
    /// Resize handling is the host's job: after changing the geometry, drive
    /// the owning list with its `refresh`.
    pub fn set_client_height(&mut self, client_height: f64) {
        self.client_height = client_height;
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }

    /// Largest reachable scroll offset for the current content.
    #[must_use]
    pub fn max_scroll_top(&self) -> f64 {
        (self.content_height - self.client_height).max(0.0)
    }
}

impl<E> Viewport for HeadlessViewport<E> {
    type Element = E;

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn client_height(&self) -> f64 {
        self.client_height
    }

    fn set_scroll_top(&mut self, offset: f64, _behavior: ScrollBehavior) {
        // A headless viewport has no animation; `Smooth` lands immediately.
        if !offset.is_finite() {
            return;
        }
        self.scroll_top = offset.clamp(0.0, self.max_scroll_top());
    }

    fn set_children<I>(&mut self, children: I, content_height: f64)
    where
        I: IntoIterator<Item = ListNode<E>>,
    {
        self.children.clear();
        self.children.extend(children);
        self.content_height = content_height.max(0.0);
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }
}
