// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step traces for replaying engine operations.
//!
//! Every mutating operation in this crate is written once as a step loop that
//! reports each elementary action (a comparison, a swap, a created edge, a
//! re-parented element) to a [`Recorder`]. The plain entry points pass `()`,
//! which discards the steps. The `*_traced` entry points accept any recorder,
//! usually a [`Trace`], which keeps them as inert values that an animator can
//! pace on its own schedule.
//!
//! # Example
//!
//! ```
//! use dsa_engines::heap::{HeapStep, PriorityQueue};
//! use dsa_engines::trace::Trace;
//!
//! let mut heap = PriorityQueue::new();
//! heap.insert(5, "triage");
//!
//! let mut trace = Trace::new();
//! heap.insert_traced(1, "cardiac arrest", &mut trace);
//!
//! assert_eq!(
//!     trace.steps(),
//!     &[
//!         HeapStep::Append { index: 1 },
//!         HeapStep::Compare { index: 1, other: 0 },
//!         HeapStep::Swap { index: 1, other: 0 },
//!         HeapStep::Settled { index: 0 },
//!     ]
//! );
//! ```

pub mod statistics;

pub use statistics::{Step, StepCounts};

/// Sink for the steps emitted by a traced operation.
pub trait Recorder<S> {
    /// Receive the next step.
    fn record(&mut self, step: S);
}

/// Discards every step. Used by the untraced entry points.
impl<S> Recorder<S> for () {
    #[inline]
    fn record(&mut self, _step: S) {}
}

impl<S> Recorder<S> for Vec<S> {
    fn record(&mut self, step: S) {
        self.push(step);
    }
}

impl<S, R: Recorder<S> + ?Sized> Recorder<S> for &mut R {
    fn record(&mut self, step: S) {
        (**self).record(step);
    }
}

/// An ordered list of recorded steps.
///
/// A trace may span several operations. Take a [`mark`](Trace::mark) before
/// each one and use [`since`](Trace::since) to slice out its steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn record(&mut self, step: S) {
        self.steps.push(step);
    }

    /// Current position, for use with [`since`](Trace::since).
    pub fn mark(&self) -> usize {
        self.steps.len()
    }

    /// Steps recorded after `mark`.
    ///
    /// A mark beyond the end (e.g. taken before a [`clear`](Trace::clear))
    /// yields an empty slice.
    pub fn since(&self, mark: usize) -> &[S] {
        self.steps.get(mark..).unwrap_or(&[])
    }

    /// All recorded steps, oldest first.
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Forget all recorded steps.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Recorder<S> for Trace<S> {
    fn record(&mut self, step: S) {
        Trace::record(self, step);
    }
}

impl<S> IntoIterator for Trace<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<S> From<Vec<S>> for Trace<S> {
    fn from(steps: Vec<S>) -> Self {
        Self { steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_new() {
        let trace: Trace<u32> = Trace::new();
        assert_eq!(trace.len(), 0);
        assert!(trace.is_empty());
        assert_eq!(trace.mark(), 0);
    }

    #[test]
    fn test_mark_and_since() {
        let mut trace = Trace::new();
        trace.record(1);
        trace.record(2);

        let mark = trace.mark();
        assert_eq!(mark, 2);

        trace.record(3);
        trace.record(4);
        assert_eq!(trace.since(mark), &[3, 4]);
        assert_eq!(trace.since(0), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_since_after_clear() {
        let mut trace = Trace::new();
        trace.record('a');
        let mark = trace.mark();
        trace.clear();
        assert!(trace.since(mark).is_empty());
    }

    #[test]
    fn test_unit_recorder_discards() {
        <() as Recorder<i32>>::record(&mut (), 10);
        <() as Recorder<&str>>::record(&mut (), "ignored");
    }

    #[test]
    fn test_recorder_through_mut_ref() {
        fn emit(rec: &mut impl Recorder<u8>) {
            rec.record(1);
            rec.record(2);
        }

        let mut trace = Trace::new();
        let mut by_ref = &mut trace;
        emit(&mut by_ref);
        emit(&mut trace);
        assert_eq!(trace.into_steps(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_vec_recorder() {
        let mut steps: Vec<u8> = Vec::new();
        steps.record(9);
        assert_eq!(steps, vec![9]);
    }
}
