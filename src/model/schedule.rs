//! The mutable search state.
//!
//! A schedule is a flat `slots x employees` bit matrix. A slot is one
//! required position of one shift (see [`Roster::slots`](super::Roster::slots)),
//! and a set bit means the employee works that slot. Set semantics come for
//! free, and a deep copy is a single `Vec<u64>` clone.

use std::ops::Range;

/// Index of an employee in the roster.
pub type EmployeeId = usize;

/// Index of a (shift, position) slot in the roster.
pub type SlotId = usize;

const WORD_BITS: usize = 64;

/// Employee-to-slot assignment matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    slot_count: usize,
    employee_count: usize,
    words_per_slot: usize,
    bits: Vec<u64>,
}

impl Schedule {
    /// Creates a schedule with every slot empty.
    pub fn new(slot_count: usize, employee_count: usize) -> Self {
        let words_per_slot = employee_count.div_ceil(WORD_BITS);
        Self {
            slot_count,
            employee_count,
            words_per_slot,
            bits: vec![0; slot_count * words_per_slot],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn employee_count(&self) -> usize {
        self.employee_count
    }

    fn words(&self, slot: SlotId) -> &[u64] {
        let start = slot * self.words_per_slot;
        &self.bits[start..start + self.words_per_slot]
    }

    fn locate(&self, slot: SlotId, employee: EmployeeId) -> (usize, u64) {
        debug_assert!(slot < self.slot_count && employee < self.employee_count);
        (
            slot * self.words_per_slot + employee / WORD_BITS,
            1u64 << (employee % WORD_BITS),
        )
    }

    /// Whether `employee` is assigned to `slot`.
    pub fn contains(&self, slot: SlotId, employee: EmployeeId) -> bool {
        let (word, mask) = self.locate(slot, employee);
        self.bits[word] & mask != 0
    }

    /// Whether `employee` is assigned to any slot in `slots`.
    pub fn contains_any(&self, slots: Range<SlotId>, employee: EmployeeId) -> bool {
        slots.into_iter().any(|slot| self.contains(slot, employee))
    }

    /// Assigns `employee` to `slot`. Returns `false` if already assigned.
    pub fn insert(&mut self, slot: SlotId, employee: EmployeeId) -> bool {
        let (word, mask) = self.locate(slot, employee);
        let fresh = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        fresh
    }

    /// Unassigns `employee` from `slot`. Returns `false` if not assigned.
    pub fn remove(&mut self, slot: SlotId, employee: EmployeeId) -> bool {
        let (word, mask) = self.locate(slot, employee);
        let present = self.bits[word] & mask != 0;
        self.bits[word] &= !mask;
        present
    }

    /// Number of employees assigned to `slot`.
    pub fn count(&self, slot: SlotId) -> usize {
        self.words(slot)
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }

    /// Employees assigned to `slot`, in ascending id order.
    pub fn members(&self, slot: SlotId) -> Members<'_> {
        let words = self.words(slot);
        Members {
            words,
            index: 0,
            current: words.first().copied().unwrap_or(0),
        }
    }

    /// The `n`-th assigned employee of `slot` in ascending id order.
    pub fn nth_member(&self, slot: SlotId, n: usize) -> Option<EmployeeId> {
        self.members(slot).nth(n)
    }

    /// Total number of (slot, employee) assignments.
    pub fn total_assignments(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Iterator over the employees of one slot.
#[derive(Debug, Clone)]
pub struct Members<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Members<'_> {
    type Item = EmployeeId;

    fn next(&mut self) -> Option<EmployeeId> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.index * WORD_BITS + bit);
            }
            self.index += 1;
            if self.index >= self.words.len() {
                return None;
            }
            self.current = self.words[self.index];
        }
    }
}
