//! Move-indexed bitsets and the pool that recycles them.
//!
//! Building the "teachable afterwards" set touches every learn source the
//! creature can reach, so the set itself is leased from a [`PermitPool`]
//! rather than allocated per call. A [`PermitLease`] clears its set and hands
//! it back on drop, so an early return or an abandoned iterator cannot leave
//! dirty capacity behind.

use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};

use crate::game::MAX_MOVE_ID;
use crate::moves::MoveId;

const WORDS: usize = MAX_MOVE_ID as usize / 64 + 1;

// ============================================================================
// MovePermitSet
// ============================================================================

/// Fixed-size set over the whole move-id space.
#[derive(Clone, PartialEq, Eq)]
pub struct MovePermitSet {
    bits: [u64; WORDS],
}

impl Default for MovePermitSet {
    fn default() -> Self {
        Self { bits: [0; WORDS] }
    }
}

impl std::fmt::Debug for MovePermitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl MovePermitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a move as permitted. Ids outside the move space are ignored.
    #[inline]
    pub fn insert(&mut self, mv: MoveId) {
        let index = mv.0 as usize;
        if let Some(word) = self.bits.get_mut(index / 64) {
            *word |= 1u64 << (index % 64);
        }
    }

    #[inline]
    pub fn contains(&self, mv: MoveId) -> bool {
        let index = mv.0 as usize;
        self.bits
            .get(index / 64)
            .is_some_and(|word| word & (1u64 << (index % 64)) != 0)
    }

    pub fn extend<I: IntoIterator<Item = MoveId>>(&mut self, moves: I) {
        for mv in moves {
            self.insert(mv);
        }
    }

    pub fn clear(&mut self) {
        self.bits = [0; WORDS];
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|w| *w == 0)
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Permitted moves in id order
    pub fn iter(&self) -> impl Iterator<Item = MoveId> + '_ {
        self.bits.iter().enumerate().flat_map(|(i, &word)| {
            (0..64u16)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| MoveId(i as u16 * 64 + bit))
        })
    }
}

// ============================================================================
// PermitPool
// ============================================================================

/// Arena of reusable permit sets.
///
/// Single-threaded by construction; each generator owns its own pool.
#[derive(Debug, Default)]
pub struct PermitPool {
    free: RefCell<Vec<MovePermitSet>>,
    outstanding: Cell<usize>,
}

impl PermitPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check out a cleared set
    pub fn lease(&self) -> PermitLease<'_> {
        let set = self.free.borrow_mut().pop().unwrap_or_default();
        self.outstanding.set(self.outstanding.get() + 1);
        PermitLease { pool: self, set }
    }

    /// Leases currently checked out
    pub fn outstanding(&self) -> usize {
        self.outstanding.get()
    }

    /// Sets waiting for reuse
    pub fn available(&self) -> usize {
        self.free.borrow().len()
    }
}

/// A set checked out of a [`PermitPool`]; returned cleared on drop.
pub struct PermitLease<'p> {
    pool: &'p PermitPool,
    set: MovePermitSet,
}

impl Deref for PermitLease<'_> {
    type Target = MovePermitSet;

    fn deref(&self) -> &MovePermitSet {
        &self.set
    }
}

impl DerefMut for PermitLease<'_> {
    fn deref_mut(&mut self) -> &mut MovePermitSet {
        &mut self.set
    }
}

impl Drop for PermitLease<'_> {
    fn drop(&mut self) {
        let mut set = std::mem::take(&mut self.set);
        set.clear();
        self.pool.free.borrow_mut().push(set);
        self.pool.outstanding.set(self.pool.outstanding.get() - 1);
    }
}
