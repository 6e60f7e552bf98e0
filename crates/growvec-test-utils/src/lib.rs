// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for growvec crates.
//!
//! - [`DropCounter`] / [`Tracked`]: element type that tallies its drops, for
//!   checking that storage layers drop every element exactly once.
//! - [`Fragile`]: element type whose `Default` impl can be armed to panic, for
//!   exercising unwind paths during block construction.
//! - [`index_permutations`] / [`permuted`]: exhaustive orderings of small inputs.
//!
//! ## License
//!
//! GPL-3.0-only

mod drop_counter;
mod fragile;
mod permutations;

pub use drop_counter::{DropCounter, Tracked};
pub use fragile::Fragile;
pub use permutations::{index_permutations, permuted};
