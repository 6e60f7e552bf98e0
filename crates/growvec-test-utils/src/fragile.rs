// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element type with a panicking `Default`, for unwind-path tests.

use std::cell::Cell;

thread_local! {
    static DEFAULTS_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

/// Element type whose `Default` impl panics once armed.
///
/// State is per thread, so tests running in parallel do not interfere.
/// [`Fragile::live()`] counts values currently alive on this thread; a value
/// leaked by a broken unwind path keeps it above its starting point.
///
/// # Example
/// ```
/// use growvec_test_utils::Fragile;
///
/// Fragile::arm(1);
/// let first = Fragile::default();
/// assert!(std::panic::catch_unwind(Fragile::default).is_err());
/// Fragile::disarm();
///
/// drop(first);
/// assert_eq!(Fragile::live(), 0);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Fragile(u32);

impl Fragile {
    /// Creates a value, counted by [`Fragile::live()`].
    pub fn new(value: u32) -> Self {
        Self::born(value)
    }

    /// The payload.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Lets `defaults` more `Fragile::default()` calls succeed, then panics.
    pub fn arm(defaults: usize) {
        DEFAULTS_LEFT.with(|left| left.set(Some(defaults)));
    }

    /// Makes `Fragile::default()` infallible again.
    pub fn disarm() {
        DEFAULTS_LEFT.with(|left| left.set(None));
    }

    /// Number of `Fragile` values alive on this thread.
    pub fn live() -> isize {
        LIVE.with(Cell::get)
    }

    fn born(value: u32) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Self(value)
    }
}

impl Default for Fragile {
    fn default() -> Self {
        let left = DEFAULTS_LEFT.with(Cell::get);

        match left {
            Some(0) => panic!("Fragile::default armed to panic"),
            Some(n) => DEFAULTS_LEFT.with(|cell| cell.set(Some(n - 1))),
            None => {}
        }

        Self::born(0)
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        Self::born(self.0)
    }
}

impl Drop for Fragile {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}
