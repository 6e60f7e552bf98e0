// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A capacity request, distinct from a length.
///
/// `GrowVec::from(reserve(n))` builds an empty vector with room for `n`
/// elements, where `GrowVec::with_len(n)` would build `n` default elements.
///
/// # Example
///
/// ```rust
/// use growvec_alloc::{GrowVec, reserve};
///
/// let vec: GrowVec<u32> = GrowVec::from(reserve(8));
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    capacity: usize,
}

impl Reservation {
    /// Requests room for `capacity` elements.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`Reservation::new`].
pub const fn reserve(capacity: usize) -> Reservation {
    Reservation::new(capacity)
}
