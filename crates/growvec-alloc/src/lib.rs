// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with an explicit amortized-doubling growth contract.
//!
//! `GrowVec<T>` keeps a logical length inside an exclusively owned,
//! default-initialized block ([`growvec_buffer::ArrayBuf`]) and manages the
//! block itself rather than delegating to `Vec`.
//!
//! # Core Guarantees
//!
//! - **Amortized O(1) push**: forced growth for `k` more elements allocates
//!   `max(len + k, 2 * capacity)` slots.
//! - **Strong error safety**: growth allocates the new block before touching
//!   the old one; a failed `try_push`, `try_insert`, `try_resize` or
//!   `try_reserve` leaves the vector exactly as it was.
//! - **No uninitialized memory**: every slot, live or not, holds a valid `T`.
//! - **Checked vs. unchecked access**: [`GrowVec::at`] returns
//!   [`GrowVecError::OutOfRange`]; indexing only debug-asserts the logical length.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use growvec_alloc::{GrowVec, GrowVecError, growvec};
//!
//! fn example() -> Result<(), GrowVecError> {
//!     let mut vec = GrowVec::new();
//!     vec.try_push(1)?;
//!     vec.try_push(2)?;
//!     vec.try_push(3)?;
//!     assert_eq!(vec, growvec![1, 2, 3]);
//!
//!     vec.pop_back();
//!     vec.try_resize(4)?;
//!     assert_eq!(vec, [1, 2, 0, 0]);
//!     assert!(vec.capacity() >= 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reserving Without Length
//!
//! ```rust
//! use growvec_alloc::{GrowVec, reserve};
//!
//! let mut vec: GrowVec<u64> = GrowVec::from(reserve(100));
//! assert!(vec.is_empty());
//!
//! for i in 0..100 {
//!     vec.push(i);
//! }
//! assert_eq!(vec.capacity(), 100);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject growth failures for testing error
//! handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! growvec-alloc = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use [`GrowVecBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test-utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use growvec_alloc::{GrowVec, GrowVecBehaviour};
//!
//!     #[test]
//!     fn test_handles_growth_failure() {
//!         let mut vec = GrowVec::<u8>::new();
//!         vec.change_behaviour(GrowVecBehaviour::FailAtGrow);
//!
//!         assert!(vec.try_push(1).is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod grow_vec;
mod into_iter;
mod macros;
mod reservation;

#[cfg(test)]
mod tests;

pub use error::GrowVecError;
pub use grow_vec::GrowVec;
pub use into_iter::IntoIter;
pub use reservation::{Reservation, reserve};

#[cfg(any(test, feature = "test-utils"))]
pub use grow_vec::GrowVecBehaviour;
