// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::GrowVec;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    PopBack,
    Insert(usize, u8),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Push),
        2 => Just(Op::PopBack),
        2 => (any::<usize>(), any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0..64usize).prop_map(Op::Resize),
        1 => (0..64usize).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

/// Applies `op` to both the vector and a `Vec` model. Indices are folded into
/// range so every generated op is valid.
fn apply(vec: &mut GrowVec<u8>, model: &mut Vec<u8>, op: &Op) {
    match *op {
        Op::Push(value) => {
            vec.push(value);
            model.push(value);
        }
        Op::PopBack => {
            vec.pop_back();
            model.pop();
        }
        Op::Insert(index, value) => {
            let index = index % (model.len() + 1);
            vec.insert(index, value);
            model.insert(index, value);
        }
        Op::Erase(index) => {
            if !model.is_empty() {
                let index = index % model.len();
                vec.erase(index);
                model.remove(index);
            }
        }
        Op::Resize(new_len) => {
            vec.resize(new_len);
            model.resize(new_len, 0);
        }
        Op::Reserve(capacity) => {
            vec.reserve(capacity);
        }
        Op::Clear => {
            vec.clear();
            model.clear();
        }
    }
}

proptest! {
    #[test]
    fn ops_match_vec_model(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut vec = GrowVec::new();
        let mut model = Vec::new();

        for op in &ops {
            let capacity_before = vec.capacity();

            apply(&mut vec, &mut model, op);

            prop_assert_eq!(vec.as_slice(), model.as_slice(), "after {:?}", op);
            prop_assert!(vec.len() <= vec.capacity());
            prop_assert!(vec.capacity() >= capacity_before);
        }
    }

    #[test]
    fn push_growth_at_least_doubles(n in 1..2000usize) {
        let mut vec = GrowVec::new();
        let mut moved = 0usize;

        for i in 0..n {
            let capacity_before = vec.capacity();
            let len_before = vec.len();

            vec.push(i);

            if vec.capacity() != capacity_before {
                prop_assert!(vec.capacity() >= 2 * capacity_before);
                moved += len_before;
            }
        }

        prop_assert_eq!(vec.len(), n);
        prop_assert!(moved <= 2 * n);
        prop_assert!(vec.capacity() < 2 * n);
    }

    #[test]
    fn insert_then_erase_restores(
        values in proptest::collection::vec(any::<i16>(), 0..64),
        index in any::<usize>(),
        value in any::<i16>(),
    ) {
        let mut vec = GrowVec::from(values.as_slice());
        let index = index % (values.len() + 1);

        prop_assert_eq!(*vec.insert(index, value), value);
        prop_assert_eq!(vec.len(), values.len() + 1);

        vec.erase(index);

        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }

    #[test]
    fn at_agrees_with_index(
        values in proptest::collection::vec(any::<u32>(), 0..64),
        index in 0..128usize,
    ) {
        let vec = GrowVec::from(values.as_slice());

        match vec.at(index) {
            Ok(value) => {
                prop_assert!(index < values.len());
                prop_assert_eq!(*value, vec[index]);
            }
            Err(_) => prop_assert!(index >= values.len()),
        }
    }

    #[test]
    fn clone_is_independent(
        values in proptest::collection::vec(any::<u8>(), 0..64),
        extra in any::<u8>(),
    ) {
        let original = GrowVec::from(values.as_slice());
        let mut copy = original.clone();

        copy.push(extra);
        for value in &mut copy {
            *value = value.wrapping_add(1);
        }

        prop_assert_eq!(original.as_slice(), values.as_slice());
        prop_assert_eq!(copy.len(), values.len() + 1);
    }

    #[test]
    fn reserve_never_shrinks_or_changes_contents(
        values in proptest::collection::vec(any::<u8>(), 0..32),
        capacity in 0..128usize,
    ) {
        let mut vec = GrowVec::from(values.as_slice());
        let capacity_before = vec.capacity();

        vec.reserve(capacity);

        prop_assert_eq!(vec.capacity(), capacity_before.max(capacity));
        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }
}
