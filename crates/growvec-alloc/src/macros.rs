// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Builds a [`GrowVec`](crate::GrowVec) from a literal list, like `vec!`.
///
/// - `growvec![]` is an empty vector.
/// - `growvec![a, b, c]` holds the listed elements in order, capacity equal to
///   their count.
/// - `growvec![value; n]` holds `n` clones of `value` (`T: Clone + Default`).
///
/// # Example
///
/// ```rust
/// use growvec_alloc::{GrowVec, growvec};
///
/// let listed = growvec![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
/// assert_eq!(listed.capacity(), 3);
///
/// let filled = growvec!['x'; 2];
/// assert_eq!(filled, ['x', 'x']);
///
/// let empty: GrowVec<u8> = growvec![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::GrowVec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($x),+])
    };
}
