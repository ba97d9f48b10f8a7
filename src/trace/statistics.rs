// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Tallies of recorded steps by kind, so a caller can report how much work an
//! operation did ("3 comparisons, 2 swaps") without walking the trace itself.
//! A [`StepCounts`] is also a [`Recorder`], so it can count steps directly
//! without keeping them.

use super::Recorder;
use std::marker::PhantomData;
use strum::{EnumCount, IntoEnumIterator};

/// A step with a fieldless kind.
///
/// The kind enums are derived with strum's `EnumDiscriminants`, which gives
/// them a variant count, an iterator and a static label.
pub trait Step {
    type Kind: Copy + EnumCount + IntoEnumIterator + Into<&'static str>;

    /// The kind of this step.
    fn kind(&self) -> Self::Kind;

    /// Dense index of `kind`, below `Kind::COUNT`.
    fn kind_index(kind: Self::Kind) -> usize;
}

/// Per-kind step counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCounts<S> {
    counts: Vec<u64>,
    _step: PhantomData<fn(S)>,
}

impl<S: Step> StepCounts<S> {
    pub fn new() -> Self {
        Self {
            counts: vec![0; <S::Kind as EnumCount>::COUNT],
            _step: PhantomData,
        }
    }

    /// Count every step in `steps`.
    pub fn from_steps<'a, I>(steps: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut counts = Self::new();
        for step in steps {
            counts.add(step);
        }
        counts
    }

    /// Increment the counter for `step`'s kind.
    pub fn add(&mut self, step: &S) {
        self.counts[S::kind_index(step.kind())] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, kind: S::Kind) -> u64 {
        self.counts[S::kind_index(kind)]
    }

    /// Sum over all kinds.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Every kind with its count, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (S::Kind, u64)> + '_ {
        S::Kind::iter().map(|kind| (kind, self.get(kind)))
    }

    /// Kinds with a non-zero count, as `(label, count)`.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.iter()
            .filter(|&(_, count)| count > 0)
            .map(|(kind, count)| (kind.into(), count))
    }
}

impl<S: Step> Default for StepCounts<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Step> Recorder<S> for StepCounts<S> {
    fn record(&mut self, step: S) {
        self.add(&step);
    }
}
