// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use growvec_test_utils::DropCounter;

use crate::{GrowVec, growvec};

// =============================================================================
// IntoIterator for GrowVec
// =============================================================================

#[test]
fn test_into_iter_yields_live_elements_in_order() {
    let mut vec = growvec![String::from("a"), String::from("b"), String::from("c")];
    vec.pop_back();

    let collected: Vec<String> = vec.into_iter().collect();

    assert_eq!(collected, ["a", "b"]);
}

#[test]
fn test_into_iter_empty() {
    let vec: GrowVec<u8> = GrowVec::with_capacity(4);
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_into_iter_double_ended() {
    let vec = growvec![1, 2, 3, 4];
    let mut iter = vec.into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.as_slice(), &[2, 3]);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_rev() {
    let vec = growvec![1, 2, 3];

    let reversed: Vec<i32> = vec.into_iter().rev().collect();

    assert_eq!(reversed, [3, 2, 1]);
}

#[test]
fn test_into_iter_size_hint() {
    let vec = growvec![1, 2, 3];
    let mut iter = vec.into_iter();

    assert_eq!(iter.size_hint(), (3, Some(3)));
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

// =============================================================================
// drop accounting
// =============================================================================

#[test]
fn test_into_iter_drops_each_element_once() {
    let counter = DropCounter::new();
    let mut vec = GrowVec::new();
    for i in 0..4 {
        vec.push(counter.track(i));
    }

    let mut iter = vec.into_iter();
    let first = iter.next().expect("Failed to take first element");
    assert_eq!(first.value(), 0);
    assert_eq!(counter.drops(), 0);

    drop(iter);
    assert_eq!(counter.drops(), 3);

    drop(first);
    assert_eq!(counter.drops(), 4);
}

#[test]
fn test_into_iter_fully_consumed_drops_nothing_twice() {
    let counter = DropCounter::new();
    let vec: GrowVec<_> = (0..3).map(|i| counter.track(i)).collect();

    for value in vec {
        assert!(value.is_tracked());
    }

    assert_eq!(counter.drops(), 3);
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_into_iter_debug_shows_remaining() {
    let vec = growvec![1, 2, 3];
    let mut iter = vec.into_iter();
    iter.next();

    assert_eq!(format!("{iter:?}"), "IntoIter([2, 3])");
}
