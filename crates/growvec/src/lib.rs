// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>A growable array that owns its buffer and says exactly how it grows.</em></p>
//!
//! ---
//!
//! GrowVec is a `Vec`-like container built on a single, exclusively owned heap
//! block. It manages that block itself, so the growth contract is part of the
//! API rather than an implementation detail.
//!
//! # Features
//!
//! - ✨ **Explicit growth**: Forced growth for `k` elements allocates `max(len + k, 2 * capacity)` slots
//! - 🔒 **Strong error safety**: A failed `try_*` operation leaves the vector exactly as it was
//! - 🧹 **No uninitialized memory**: Every slot holds a valid, default-constructed `T`
//! - 🎯 **Checked and unchecked access**: `at` returns an error, `[]` only debug-asserts
//! - 📦 **`no_std` compatible**: Needs only `alloc`
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! growvec = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use growvec::{GrowVec, GrowVecError, growvec};
//!
//! fn main() -> Result<(), GrowVecError> {
//!     let mut vec = GrowVec::new();
//!     vec.try_push(1)?;
//!     vec.try_push(2)?;
//!     vec.try_push(3)?;
//!     assert_eq!(vec.capacity(), 4);
//!
//!     vec.try_insert(1, 9)?;
//!     assert_eq!(vec, growvec![1, 9, 2, 3]);
//!
//!     vec.erase(2);
//!     vec.pop_back();
//!     assert_eq!(vec, [1, 9]);
//!
//!     vec.try_resize(4)?;
//!     assert_eq!(vec, [1, 9, 0, 0]);
//!
//!     assert!(vec.at(4).is_err());
//!     Ok(())
//! }
//! ```
//!
//! # Types
//!
//! - **[`GrowVec<T>`]**: the growable array. Length lives inside a block of
//!   `capacity` slots; slots past the length are valid but dead.
//! - **[`ArrayBuf<T>`]**: the block itself. Fixed size, default-filled,
//!   transfer-only ownership (`wrap` adopts a `Box<[T]>`, `release` hands one back).
//! - **[`Reservation`]**: a capacity request. `GrowVec::from(reserve(n))` is
//!   empty with room for `n`; `GrowVec::with_len(n)` holds `n` defaults.
//!
//! # Element requirements
//!
//! Operations that create slots (`push`, `insert`, `resize`, `reserve`,
//! construction with a length) need `T: Default`. Reading, erasing, comparing
//! and moving a `GrowVec` need nothing from `T`.
//!
//! # Testing
//!
//! The `test-utils` feature injects growth failures so error paths can be
//! tested without exhausting memory:
//!
//! ```rust,ignore
//! use growvec::GrowVec;
//! use growvec::support::test_utils::GrowVecBehaviour;
//!
//! let mut vec = GrowVec::<u8>::new();
//! vec.change_behaviour(GrowVecBehaviour::FailAtGrow);
//!
//! assert!(vec.try_push(1).is_err());
//! assert!(vec.is_empty());
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use growvec_alloc as alloc;
pub use growvec_buffer as buffer;

pub use growvec_alloc::{GrowVec, GrowVecError, IntoIter, Reservation, growvec, reserve};
pub use growvec_buffer::{ArrayBuf, BufferError};
