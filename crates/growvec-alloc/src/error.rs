// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growvec-alloc.

use growvec_buffer::BufferError;
use thiserror::Error;

/// Error type for `GrowVec` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GrowVecError {
    /// Checked access past the logical length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length at the time of the access.
        len: usize,
    },

    /// The backing block could not be allocated.
    ///
    /// The vector is left exactly as it was before the failed call.
    #[error("BufferError: {0}")]
    Buffer(#[from] BufferError),
}
