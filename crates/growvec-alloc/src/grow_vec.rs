// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::handle_alloc_error;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use growvec_buffer::{ArrayBuf, BufferError};
use tracing::trace;

use crate::error::GrowVecError;
use crate::into_iter::IntoIter;
use crate::reservation::Reservation;

/// Test behaviour for injecting failures in `GrowVec` growth.
///
/// This is only available with the `test-utils` feature and allows users
/// to test allocation-failure paths in their code.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// use growvec_alloc::{GrowVec, GrowVecBehaviour};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_growth_failure() {
///         let mut vec = GrowVec::<u8>::new();
///         vec.change_behaviour(GrowVecBehaviour::FailAtGrow);
///
///         assert!(vec.try_push(1).is_err());
///         assert!(vec.is_empty());
///     }
/// }
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every reallocation fails with `BufferError::AllocFailed` before any
    /// state is touched.
    FailAtGrow,
}

/// A growable array over a single exclusively owned [`ArrayBuf`].
///
/// `GrowVec` tracks a logical length `len` inside a block of `capacity`
/// default-initialized slots (`len <= capacity` always). Slots past `len` hold
/// valid but logically dead values.
///
/// # Growth
///
/// When `k` more elements are needed than the block can hold, the new capacity
/// is `max(len + k, 2 * capacity)`. Pushing from empty therefore walks
/// capacities 1, 2, 4, 8, ..., and `n` pushes move O(n) elements in total.
/// Growth allocates the new block first and only then moves the live elements
/// across, so a failed allocation leaves the vector untouched.
///
/// # Fallibility
///
/// Every allocating operation comes in two forms: `try_*` returns
/// [`GrowVecError`]; the plain form reports allocation failure the way `alloc`
/// collections do (`handle_alloc_error` or a `"capacity overflow"` panic).
///
/// # Example
///
/// ```rust
/// use growvec_alloc::{GrowVec, GrowVecError};
///
/// fn example() -> Result<(), GrowVecError> {
///     let mut vec = GrowVec::new();
///     vec.try_push(1)?;
///     vec.try_push(2)?;
///     vec.try_push(3)?;
///
///     vec.try_insert(1, 9)?;
///     assert_eq!(vec, [1, 9, 2, 3]);
///
///     vec.erase(2);
///     assert_eq!(vec, [1, 9, 3]);
///
///     assert!(vec.at(3).is_err());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowVec<T> {
    buf: ArrayBuf<T>,
    len: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: GrowVecBehaviour,
}

/// Reports a failed allocation the way `alloc` collections do.
#[cold]
#[inline(never)]
fn alloc_failure(err: GrowVecError) -> ! {
    match err {
        GrowVecError::Buffer(BufferError::AllocFailed { layout }) => handle_alloc_error(layout),
        err => panic!("{err}"),
    }
}

impl<T> GrowVec<T> {
    fn from_parts(buf: ArrayBuf<T>, len: usize) -> Self {
        debug_assert!(len <= buf.len());

        Self {
            buf,
            len,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: GrowVecBehaviour::default(),
        }
    }

    pub(crate) fn into_parts(self) -> (ArrayBuf<T>, usize) {
        (self.buf, self.len)
    }

    /// Creates an empty `GrowVec`. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: ArrayBuf::new(),
            len: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: GrowVecBehaviour::None,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// Returns the live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf.as_mut_slice()[..self.len]
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, GrowVecError> {
        let len = self.len;

        if index >= len {
            return Err(GrowVecError::OutOfRange { index, len });
        }

        // SAFETY: `index < len <= buf.len()`.
        Ok(unsafe { self.buf.get_unchecked(index) })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GrowVecError> {
        let len = self.len;

        if index >= len {
            return Err(GrowVecError::OutOfRange { index, len });
        }

        // SAFETY: `index < len <= buf.len()`.
        Ok(unsafe { self.buf.get_unchecked_mut(index) })
    }

    /// Sets the length to zero. Capacity and slot contents are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Drops the last element from the logical range. No-op when empty.
    ///
    /// The value stays in its slot until overwritten or the block is dropped.
    pub fn pop_back(&mut self) {
        if self.len != 0 {
            self.len -= 1;
        }
    }

    /// Removes the element at `index`, shifting everything after it one slot
    /// to the left.
    ///
    /// Returns the element that now occupies `index`, or `None` if the erased
    /// element was the last one. The erased value is parked in the slot just
    /// past the new length.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Option<&mut T> {
        let len = self.len;
        assert!(
            index < len,
            "erase index (is {index}) should be < len (is {len})"
        );

        let slots = self.as_mut_slice();

        // Lowest index first: every slot is read before it is overwritten.
        for i in index..len - 1 {
            slots.swap(i, i + 1);
        }

        self.len -= 1;

        self.as_mut_slice().get_mut(index)
    }

    /// Exchanges contents with `other` in constant time.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap_with(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Converts into a `Vec` holding exactly the live elements.
    ///
    /// The block is handed over with [`ArrayBuf::release`]; dead slots are
    /// dropped.
    pub fn into_vec(self) -> Vec<T> {
        let (mut buf, len) = self.into_parts();

        match buf.release() {
            Some(block) => {
                let mut vec = block.into_vec();
                vec.truncate(len);
                vec
            }
            None => Vec::new(),
        }
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test-utils` feature and allows injecting
    /// growth failures for testing error handling paths.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: GrowVecBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T: Default> GrowVec<T> {
    /// Creates an empty `GrowVec` with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::Buffer`] if the block cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, GrowVecError> {
        Ok(Self::from_parts(ArrayBuf::try_new(capacity)?, 0))
    }

    /// Infallible form of [`try_with_capacity`](Self::try_with_capacity).
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(vec) => vec,
            Err(err) => alloc_failure(err),
        }
    }

    /// Creates a `GrowVec` of `len` default elements.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::Buffer`] if the block cannot be allocated.
    pub fn try_with_len(len: usize) -> Result<Self, GrowVecError> {
        Ok(Self::from_parts(ArrayBuf::try_new(len)?, len))
    }

    /// Infallible form of [`try_with_len`](Self::try_with_len).
    pub fn with_len(len: usize) -> Self {
        match Self::try_with_len(len) {
            Ok(vec) => vec,
            Err(err) => alloc_failure(err),
        }
    }

    /// Creates a `GrowVec` of `len` copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::Buffer`] if the block cannot be allocated.
    pub fn try_from_elem(value: T, len: usize) -> Result<Self, GrowVecError>
    where
        T: Clone,
    {
        let mut buf = ArrayBuf::try_new(len)?;
        buf.as_mut_slice().fill(value);

        Ok(Self::from_parts(buf, len))
    }

    /// Infallible form of [`try_from_elem`](Self::try_from_elem).
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        match Self::try_from_elem(value, len) {
            Ok(vec) => vec,
            Err(err) => alloc_failure(err),
        }
    }

    /// Moves every live element into a fresh block of `new_capacity` slots.
    ///
    /// The fresh block is fully allocated before the current one is touched.
    #[cold]
    #[inline(never)]
    fn realloc(&mut self, new_capacity: usize) -> Result<(), GrowVecError> {
        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, GrowVecBehaviour::FailAtGrow) {
            let layout = core::alloc::Layout::array::<T>(new_capacity)
                .map_err(|_| BufferError::CapacityOverflow)?;
            return Err(BufferError::AllocFailed { layout }.into());
        }

        trace!(
            len = self.len,
            old_capacity = self.capacity(),
            new_capacity,
            "reallocating"
        );

        let mut fresh = ArrayBuf::try_new(new_capacity)?;

        for (old, new) in self.as_mut_slice().iter_mut().zip(fresh.as_mut_slice()) {
            mem::swap(old, new);
        }

        self.buf = fresh;

        Ok(())
    }

    /// Makes room for `additional` more elements under the doubling policy.
    fn grow_by(&mut self, additional: usize) -> Result<(), GrowVecError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(BufferError::CapacityOverflow)?;

        let new_capacity = self
            .capacity()
            .checked_mul(2)
            .map_or(required, |doubled| doubled.max(required));

        self.realloc(new_capacity)
    }

    /// Appends `value`, growing first if the block is full.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::Buffer`] if growth fails; the vector is unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), GrowVecError> {
        if self.len == self.capacity() {
            self.grow_by(1)?;
        }

        let len = self.len;
        self.buf.as_mut_slice()[len] = value;
        self.len += 1;

        Ok(())
    }

    /// Infallible form of [`try_push`](Self::try_push).
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            alloc_failure(err);
        }
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// The vacated slot is reset to `T::default()`.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let len = self.len;

        Some(mem::take(&mut self.buf.as_mut_slice()[len]))
    }

    /// Inserts `value` at `index`, shifting everything from `index` on one slot
    /// to the right. Returns the inserted element.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::Buffer`] if growth fails; the vector is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`, before anything is modified.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, GrowVecError> {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );

        if len == self.capacity() {
            self.grow_by(1)?;
        }

        let slots = self.buf.as_mut_slice();
        slots[len] = value;

        // Highest index first, carrying the new value down to `index`: every
        // slot is read before it is overwritten.
        for i in (index..len).rev() {
            slots.swap(i, i + 1);
        }

        self.len += 1;

        Ok(&mut self.buf.as_mut_slice()[index])
    }

    /// Infallible form of [`try_insert`](Self::try_insert).
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        match self.try_insert(index, value) {
            Ok(slot) => slot,
            Err(err) => alloc_failure(err),
        }
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        self.erase(index);
        let len = self.len;

        mem::take(&mut self.buf.as_mut_slice()[len])
    }

    /// Sets the length to `new_len`.
    ///
    /// Shrinking only moves the length. Growing resets every newly exposed slot
    /// to `T::default()`, reallocating first if `new_len` exceeds capacity.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::Buffer`] if growth fails; the vector is unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), GrowVecError> {
        let len = self.len;

        if new_len <= len {
            self.len = new_len;
            return Ok(());
        }

        if new_len > self.capacity() {
            self.grow_by(new_len - len)?;
        }

        for slot in &mut self.buf.as_mut_slice()[len..new_len] {
            *slot = T::default();
        }

        self.len = new_len;

        Ok(())
    }

    /// Infallible form of [`try_resize`](Self::try_resize).
    pub fn resize(&mut self, new_len: usize) {
        if let Err(err) = self.try_resize(new_len) {
            alloc_failure(err);
        }
    }

    /// Ensures capacity is at least `new_capacity`, reallocating to exactly
    /// `new_capacity` if it is not. Never shrinks, never changes the length.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::Buffer`] if growth fails; the vector is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), GrowVecError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.realloc(new_capacity)
    }

    /// Infallible form of [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            alloc_failure(err);
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Deep-copies the live elements. The copy's capacity equals its length.
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

/// Unchecked against the logical length in release builds.
///
/// `index < len()` is the caller's contract and is only verified by a debug
/// assertion. An index in `[len, capacity)` reaches a dead but initialized
/// slot; an index past capacity panics.
impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(
            index < self.len,
            "index (is {index}) should be < len (is {})",
            self.len
        );

        &self.buf.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(
            index < self.len,
            "index (is {index}) should be < len (is {})",
            self.len
        );

        &mut self.buf.as_mut_slice()[index]
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }

        self.len == other.len && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U> PartialEq<Vec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic over the live elements; a proper prefix orders first.
///
/// An instance compares `Equal` to itself, matching `PartialEq`.
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if core::ptr::eq(self, other) {
            return Some(Ordering::Equal);
        }

        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if core::ptr::eq(self, other) {
            return Ordering::Equal;
        }

        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Default> From<Reservation> for GrowVec<T> {
    fn from(reservation: Reservation) -> Self {
        Self::with_capacity(reservation.capacity())
    }
}

/// Adopts the block of the boxed slice. Capacity equals length.
impl<T> From<Box<[T]>> for GrowVec<T> {
    fn from(block: Box<[T]>) -> Self {
        let len = block.len();

        Self::from_parts(ArrayBuf::wrap(block), len)
    }
}

/// Adopts the vector's allocation after shrinking it to its length.
impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from(vec.into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(array: [T; N]) -> Self {
        Self::from(Vec::from(array))
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(slice: &[T]) -> Self {
        Self::from(slice.to_vec())
    }
}

impl<T> From<GrowVec<T>> for Vec<T> {
    fn from(vec: GrowVec<T>) -> Self {
        vec.into_vec()
    }
}

impl<T: Default> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        if lower > self.capacity() - self.len {
            if let Err(err) = self.grow_by(lower) {
                alloc_failure(err);
            }
        }

        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Default> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Default> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_parts();

        IntoIter::new(buf, len)
    }
}
