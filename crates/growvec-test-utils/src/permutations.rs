// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive testing.

/// Heap's algorithm, permuting `indices[..k]` in place.
fn heap_permute<F>(indices: &mut [usize], k: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if k == 1 {
        callback(indices);
        return;
    }

    heap_permute(indices, k - 1, callback);

    for i in 0..k - 1 {
        if k % 2 == 0 {
            indices.swap(i, k - 1);
        } else {
            indices.swap(0, k - 1);
        }
        heap_permute(indices, k - 1, callback);
    }
}

/// Calls `callback` once for every permutation of `[0, 1, ..., len - 1]`.
///
/// `len == 0` produces no calls.
///
/// # Example
/// ```
/// use growvec_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(3, |_perm| {
///     count += 1;
/// });
/// assert_eq!(count, 6);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }
    let mut indices: Vec<usize> = (0..len).collect();
    heap_permute(&mut indices, len, &mut callback);
}

/// Returns `values` reordered so that position `i` holds `values[perm[i]]`.
///
/// # Example
/// ```
/// use growvec_test_utils::permuted;
///
/// assert_eq!(permuted(&['a', 'b', 'c'], &[2, 0, 1]), vec!['c', 'a', 'b']);
/// ```
pub fn permuted<T: Clone>(values: &[T], perm: &[usize]) -> Vec<T> {
    assert_eq!(values.len(), perm.len(), "permutation length mismatch");

    perm.iter().map(|&i| values[i].clone()).collect()
}
