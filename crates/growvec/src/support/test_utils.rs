// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure injection re-exported from growvec-alloc.

#[cfg(feature = "test-utils")]
pub use growvec_alloc::GrowVecBehaviour;
