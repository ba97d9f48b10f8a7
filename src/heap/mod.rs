// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Array-backed binary heap used as a priority queue.
//!
//! Position `i` has children `2i + 1` and `2i + 2` and parent `(i - 1) / 2`.
//! Every entry's priority is no worse than either child's, where "better" is
//! decided by the queue's [`HeapOrder`].
//!
//! Sifting is written as explicit step loops so that each comparison and swap
//! can be reported to a [`Recorder`].
//!
//! # Tie-breaks
//!
//! - Sift-up only swaps on a strictly better priority, so equal priorities
//!   never overtake an earlier entry on the way up.
//! - Sift-down prefers the left child when both children have equal priority.
//!
//! # Example
//!
//! ```
//! use dsa_engines::heap::PriorityQueue;
//!
//! let mut er = PriorityQueue::new();
//! er.insert(3, "broken arm");
//! er.insert(1, "heart attack");
//! er.insert(5, "common cold");
//!
//! assert_eq!(er.peek().map(|e| *e.payload()), Ok("heart attack"));
//! let order: Vec<_> = er.into_sorted_vec().into_iter().map(|e| e.into_payload()).collect();
//! assert_eq!(order, vec!["heart attack", "broken arm", "common cold"]);
//! ```

use crate::error::{Error, Result};
use crate::trace::{Recorder, Step};
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter, IntoStaticStr};
use tracing::{debug, trace};

/// Which end of the priority scale is served first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapOrder {
    /// Smallest priority first.
    #[default]
    Min,
    /// Largest priority first.
    Max,
}

impl HeapOrder {
    /// True if `a` must sit above `b`. Equal priorities are never better.
    #[inline]
    pub fn is_better<P: Ord>(self, a: &P, b: &P) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}

/// A payload together with its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapEntry<T, P> {
    priority: P,
    payload: T,
}

impl<T, P> HeapEntry<T, P> {
    pub fn new(priority: P, payload: T) -> Self {
        Self { priority, payload }
    }

    pub fn priority(&self) -> &P {
        &self.priority
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub fn into_parts(self) -> (P, T) {
        (self.priority, self.payload)
    }
}

/// One elementary action of an insert or extraction.
///
/// Indices refer to positions in [`PriorityQueue::as_slice`] at the moment
/// the step happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDiscriminants)]
#[strum_discriminants(name(HeapStepKind))]
#[strum_discriminants(derive(Hash, EnumCountMacro, EnumIter, IntoStaticStr))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapStep {
    /// A new entry was pushed at `index`, the end of the array.
    Append { index: usize },
    /// The entry at `index` was compared against the one at `other`.
    Compare { index: usize, other: usize },
    /// The entries at `index` and `other` traded places.
    Swap { index: usize, other: usize },
    /// The last entry, previously at `from`, was moved into the root.
    MoveLastToRoot { from: usize },
    /// The root was taken out and the array shrank by one.
    RemoveRoot,
    /// The moving entry came to rest at `index`.
    Settled { index: usize },
}

impl Step for HeapStep {
    type Kind = HeapStepKind;

    fn kind(&self) -> HeapStepKind {
        self.into()
    }

    fn kind_index(kind: HeapStepKind) -> usize {
        kind as usize
    }
}

/// Binary heap priority queue.
///
/// # Memory Model
///
/// The queue owns one contiguous `Vec` of entries. Entries are appended on
/// insert and removed only from the last position, after being swapped into
/// the root.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    entries: Vec<HeapEntry<T, P>>,
    order: HeapOrder,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Create an empty min-heap.
    pub fn new() -> Self {
        Self::with_order(HeapOrder::Min)
    }

    /// Create an empty heap serving `order` first.
    pub fn with_order(order: HeapOrder) -> Self {
        debug!(?order, "created priority queue");
        Self {
            entries: Vec::new(),
            order,
        }
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in array order. Position encodes the tree shape.
    pub fn as_slice(&self) -> &[HeapEntry<T, P>] {
        &self.entries
    }

    /// Entries in array order, not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, HeapEntry<T, P>> {
        self.entries.iter()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        debug!(dropped = self.entries.len(), "cleared priority queue");
        self.entries.clear();
    }

    /// Add an entry. O(log n).
    pub fn insert(&mut self, priority: P, payload: T) {
        self.insert_traced(priority, payload, &mut ());
    }

    /// Add an entry, reporting each step to `recorder`.
    pub fn insert_traced(
        &mut self,
        priority: P,
        payload: T,
        recorder: &mut impl Recorder<HeapStep>,
    ) {
        let index = self.entries.len();
        self.entries.push(HeapEntry::new(priority, payload));
        recorder.record(HeapStep::Append { index });
        let settled = self.sift_up(index, recorder);
        trace!(appended = index, settled, len = self.entries.len(), "heap insert");
    }

    /// The best entry, without removing it. O(1).
    pub fn peek(&self) -> Result<&HeapEntry<T, P>> {
        self.entries.first().ok_or(Error::EmptyStructure)
    }

    /// Remove and return the best entry. O(log n).
    pub fn extract_best(&mut self) -> Result<HeapEntry<T, P>> {
        self.extract_best_traced(&mut ())
    }

    /// Remove and return the best entry, reporting each step to `recorder`.
    ///
    /// The heap is unchanged, and nothing is recorded, when it is empty.
    pub fn extract_best_traced(
        &mut self,
        recorder: &mut impl Recorder<HeapStep>,
    ) -> Result<HeapEntry<T, P>> {
        if self.entries.is_empty() {
            return Err(Error::EmptyStructure);
        }
        let last = self.entries.len() - 1;
        // swap_remove moves the last entry into the root in one step
        let best = self.entries.swap_remove(0);
        recorder.record(HeapStep::RemoveRoot);
        if last > 0 {
            recorder.record(HeapStep::MoveLastToRoot { from: last });
            let settled = self.sift_down(0, recorder);
            trace!(settled, len = self.entries.len(), "heap extract");
        }
        Ok(best)
    }

    /// Drain the queue into a vector, best first.
    pub fn into_sorted_vec(mut self) -> Vec<HeapEntry<T, P>> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Ok(entry) = self.extract_best() {
            sorted.push(entry);
        }
        sorted
    }

    /// Check the heap property over every parent/child pair.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.is_better(child, parent)
        })
    }

    #[inline]
    fn is_better(&self, a: usize, b: usize) -> bool {
        self.order
            .is_better(&self.entries[a].priority, &self.entries[b].priority)
    }

    /// Move the entry at `index` up while it beats its parent. Returns its final position.
    fn sift_up(&mut self, mut index: usize, recorder: &mut impl Recorder<HeapStep>) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            recorder.record(HeapStep::Compare { index, other: parent });
            if !self.is_better(index, parent) {
                break;
            }
            self.entries.swap(index, parent);
            recorder.record(HeapStep::Swap { index, other: parent });
            index = parent;
        }
        recorder.record(HeapStep::Settled { index });
        index
    }

    /// Move the entry at `index` down while a child beats it. Returns its final position.
    fn sift_down(&mut self, mut index: usize, recorder: &mut impl Recorder<HeapStep>) -> usize {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut best_child = left;
            if right < len {
                recorder.record(HeapStep::Compare { index: right, other: left });
                if self.is_better(right, left) {
                    best_child = right;
                }
            }

            recorder.record(HeapStep::Compare { index: best_child, other: index });
            if !self.is_better(best_child, index) {
                break;
            }
            self.entries.swap(index, best_child);
            recorder.record(HeapStep::Swap { index, other: best_child });
            index = best_child;
        }
        recorder.record(HeapStep::Settled { index });
        index
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(P, T)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, payload) in iter {
            self.insert(priority, payload);
        }
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
