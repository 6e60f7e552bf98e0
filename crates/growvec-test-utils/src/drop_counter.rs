// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop accounting for container tests.

use std::cell::Cell;
use std::rc::Rc;

/// Shared tally of how many [`Tracked`] values created from it were dropped.
///
/// # Example
/// ```
/// use growvec_test_utils::DropCounter;
///
/// let counter = DropCounter::new();
/// let a = counter.track(1);
/// let b = a.clone();
///
/// drop(a);
/// drop(b);
/// assert_eq!(counter.drops(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    /// Creates a counter with a zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value whose drop is counted by this counter.
    pub fn track(&self, value: u32) -> Tracked {
        Tracked {
            value,
            counter: Some(self.clone()),
        }
    }

    /// Number of tracked drops so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// Element type that reports its drop to a [`DropCounter`].
///
/// `Tracked::default()` is detached: it carries value `0` and counts nowhere,
/// so default-filled storage slots never show up in a tally. Clones share the
/// original's counter. Equality and ordering look at the value only.
#[derive(Debug, Clone, Default)]
pub struct Tracked {
    value: u32,
    counter: Option<DropCounter>,
}

impl Tracked {
    /// The payload.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns `true` if this value reports to a counter.
    pub fn is_tracked(&self) -> bool {
        self.counter.is_some()
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.drops.set(counter.drops.get() + 1);
        }
    }
}
