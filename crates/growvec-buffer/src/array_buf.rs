// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ArrayBuf - exclusively owned, fixed-size block of default-initialized elements.

use alloc::alloc::{alloc, dealloc};
use alloc::boxed::Box;
use core::alloc::Layout;
use core::mem;
use core::ptr::{self, NonNull};
use core::slice;

use tracing::debug;

use crate::error::BufferError;

/// An exclusively owned heap block of `len` elements of `T`.
///
/// The block is allocated once, at its final size, with every slot
/// default-constructed. It never grows or shrinks: callers that need a bigger
/// block allocate a new `ArrayBuf` and move elements across.
///
/// Ownership is transfer-only. `ArrayBuf` is not `Clone`; moving it hands the
/// block over, and [`release()`](Self::release) / [`core::mem::take`] leave the
/// source empty. An empty `ArrayBuf` owns no block and frees nothing on drop.
///
/// # Example
///
/// ```rust
/// use growvec_buffer::{ArrayBuf, BufferError};
///
/// fn example() -> Result<(), BufferError> {
///     let mut buf = ArrayBuf::<u32>::try_new(4)?;
///     assert_eq!(buf.as_slice(), &[0, 0, 0, 0]);
///
///     buf.as_mut_slice()[2] = 7;
///
///     let block = buf.release().expect("block is owned");
///     assert_eq!(&*block, &[0, 0, 7, 0]);
///     assert!(!buf.is_allocated());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct ArrayBuf<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
}

// Safety: ArrayBuf uniquely owns its elements, exactly like Box<[T]>.
unsafe impl<T: Send> Send for ArrayBuf<T> {}
unsafe impl<T: Sync> Sync for ArrayBuf<T> {}

/// Drops the initialized prefix and frees the block if construction unwinds.
struct PartialBlock<T> {
    ptr: NonNull<T>,
    layout: Layout,
    initialized: usize,
}

impl<T> Drop for PartialBlock<T> {
    fn drop(&mut self) {
        let init = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.initialized);

        unsafe {
            // SAFETY: exactly `initialized` leading slots were written.
            ptr::drop_in_place(init);
        }

        if self.layout.size() != 0 {
            unsafe {
                // SAFETY: the block was obtained from `alloc` with this layout.
                dealloc(self.ptr.as_ptr().cast(), self.layout);
            }
        }
    }
}

impl<T> ArrayBuf<T> {
    /// Creates an empty `ArrayBuf` that owns no block.
    pub const fn new() -> Self {
        Self { ptr: None, len: 0 }
    }

    /// Allocates a block of `len` elements, each set to `T::default()`.
    ///
    /// `len == 0` yields an empty `ArrayBuf` without touching the allocator.
    /// Zero-sized `T` never allocates either.
    ///
    /// If `T::default()` panics, the elements constructed so far are dropped
    /// and the block is freed before the panic continues.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `len` elements cannot be described
    ///   by a valid [`Layout`].
    /// - [`BufferError::AllocFailed`] if the global allocator returns null.
    pub fn try_new(len: usize) -> Result<Self, BufferError>
    where
        T: Default,
    {
        if len == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(len).map_err(|_| BufferError::CapacityOverflow)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: `layout` has a non-zero size.
            let raw = unsafe { alloc(layout) }.cast::<T>();

            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => {
                    debug!(len, size = layout.size(), "block allocation refused");
                    return Err(BufferError::AllocFailed { layout });
                }
            }
        };

        let mut block = PartialBlock {
            ptr,
            layout,
            initialized: 0,
        };

        while block.initialized < len {
            unsafe {
                // SAFETY: `initialized < len`, so the slot lies inside the block.
                ptr.add(block.initialized).write(T::default());
            }
            block.initialized += 1;
        }

        mem::forget(block);

        Ok(Self {
            ptr: Some(ptr),
            len,
        })
    }

    /// Takes ownership of an already allocated block. No allocation occurs.
    ///
    /// An empty block produces an empty `ArrayBuf`.
    pub fn wrap(block: Box<[T]>) -> Self {
        let len = block.len();

        if len == 0 {
            return Self::new();
        }

        Self {
            ptr: Some(NonNull::from(Box::leak(block)).cast::<T>()),
            len,
        }
    }

    /// Relinquishes the block, leaving this `ArrayBuf` empty.
    ///
    /// The caller becomes responsible for the returned block; dropping the
    /// `Box` frees it. Returns `None` if no block was owned.
    #[must_use = "dropping the released block frees it immediately"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        let ptr = self.ptr.take()?;
        let len = mem::take(&mut self.len);
        let raw = ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len);

        // SAFETY: the block holds `len` initialized elements and was allocated by
        // the global allocator with `Layout::array::<T>(len)` (or adopted from a
        // `Box<[T]>`), which is the layout `Box<[T]>` frees with.
        Some(unsafe { Box::from_raw(raw) })
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the block has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if a block is owned.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.ptr.is_some()
    }

    /// Returns every slot of the block.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.ptr {
            // SAFETY: an owned block always holds `len` initialized elements.
            Some(ptr) => unsafe { slice::from_raw_parts(ptr.as_ptr(), self.len) },
            None => &[],
        }
    }

    /// Returns every slot of the block, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.ptr {
            // SAFETY: an owned block always holds `len` initialized elements, and
            // `&mut self` guarantees the view is unique.
            Some(ptr) => unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), self.len) },
            None => &mut [],
        }
    }

    /// Returns a reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "ArrayBuf::get_unchecked: index out of bounds");

        // SAFETY: the caller guarantees `index < len`.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "ArrayBuf::get_unchecked_mut: index out of bounds"
        );

        // SAFETY: the caller guarantees `index < len`.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Exchanges blocks with `other` in constant time. No element is touched.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T> Drop for ArrayBuf<T> {
    fn drop(&mut self) {
        mem::drop(self.release());
    }
}

impl<T> Default for ArrayBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for ArrayBuf<T> {
    fn from(block: Box<[T]>) -> Self {
        Self::wrap(block)
    }
}

impl<T> core::fmt::Debug for ArrayBuf<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayBuf")
            .field("len", &self.len)
            .field("allocated", &self.is_allocated())
            .finish_non_exhaustive()
    }
}
