// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::mem;

use growvec_buffer::ArrayBuf;

/// Owning iterator over the live elements of a `GrowVec`.
///
/// Elements are moved out with `mem::take`, leaving defaults behind in the
/// block. Elements not yet yielded are dropped together with the block.
pub struct IntoIter<T> {
    buf: ArrayBuf<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: ArrayBuf<T>, len: usize) -> Self {
        debug_assert!(len <= buf.len());

        Self {
            buf,
            front: 0,
            back: len,
        }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[self.front..self.back]
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        let value = mem::take(&mut self.buf.as_mut_slice()[self.front]);
        self.front += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;

        Some(mem::take(&mut self.buf.as_mut_slice()[self.back]))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
