// Copyright 2025 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration errors.

use thiserror::Error;

/// Errors surfaced when constructing a [`WindowedList`].
///
/// Construction is the only fallible seam; every other operation is total
/// over its valid input domain, and lookup misses are reported as `None`
/// plus a logged warning rather than an error.
///
/// [`WindowedList`]: crate::WindowedList
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ListError {
    /// The configured row height was not a positive, finite pixel value.
    #[error("row height must be positive and finite, got {0}")]
    InvalidRowHeight(f64),

    /// The viewport reported a client height that is not finite and
    /// non-negative, so no visible window can be computed from it.
    #[error("viewport client height must be finite and non-negative, got {0}")]
    InvalidViewportHeight(f64),
}
