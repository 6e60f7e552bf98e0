// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growvec-buffer.

use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur when allocating a block.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The requested element count does not describe a valid allocation.
    ///
    /// Raised when `len * size_of::<T>()` would exceed `isize::MAX` bytes, or
    /// when a caller's length arithmetic overflows `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The global allocator could not provide a block for `layout`.
    #[error("allocation of {} bytes failed", .layout.size())]
    AllocFailed {
        /// Layout of the refused allocation.
        layout: Layout,
    },
}
