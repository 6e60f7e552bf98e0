// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusively owned, fixed-size heap blocks.
//!
//! [`ArrayBuf<T>`] is the raw storage layer under `GrowVec<T>`: one contiguous
//! block of `T`, allocated at its final size with every slot default-constructed,
//! owned by exactly one handle at a time.
//!
//! # Ownership
//!
//! - **Transfer-only**: `ArrayBuf` is not `Clone`. Moves hand the block over;
//!   [`ArrayBuf::release`] and [`core::mem::take`] leave the source empty.
//! - **Always initialized**: every slot holds a valid `T` for the whole life of
//!   the block, so safe slice views over the full block are always sound.
//! - **Fallible allocation**: [`ArrayBuf::try_new`] reports allocator refusal as
//!   [`BufferError`] instead of aborting.
//!
//! # Example
//!
//! ```rust
//! use growvec_buffer::{ArrayBuf, BufferError};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut a = ArrayBuf::<u8>::try_new(3)?;
//!     let mut b = ArrayBuf::<u8>::new();
//!
//!     a.as_mut_slice().copy_from_slice(&[1, 2, 3]);
//!     a.swap_with(&mut b);
//!
//!     assert!(!a.is_allocated());
//!     assert_eq!(b.as_slice(), &[1, 2, 3]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod array_buf;
mod error;

pub use array_buf::ArrayBuf;
pub use error::BufferError;
