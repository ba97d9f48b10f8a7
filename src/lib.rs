// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact data-structure engines for step-by-step algorithm visualizers.
//!
//! Three independent, synchronous, in-memory structures:
//!
//! - [`Trie`]: prefix-indexed string set with insert, exact search, prefix
//!   test and ordered enumeration of words under a prefix.
//! - [`DisjointSet`]: union-find over a fixed universe `0..n` with full path
//!   compression and union by rank.
//! - [`PriorityQueue`]: array-backed binary heap with insert, peek and
//!   extract-best.
//!
//! None of them share state, and none holds any presentation state.
//!
//! # Step traces
//!
//! Every mutating operation has a `*_traced` variant that reports each
//! elementary step (a created edge, a compressed link, a swap) to a
//! [`Recorder`]. A [`Trace`] keeps those steps as inert values, so a renderer
//! can replay an operation at its own pace after it has completed. The plain
//! operations run the same code with a no-op recorder.
//!
//! # Concurrency
//!
//! The structures do no locking. Mutating calls on one instance must be
//! serialized by the caller, e.g. by keeping a single owner or wrapping the
//! instance in a mutex.
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for steps, traces, heap entries
//!   and [`HeapOrder`].

pub mod disjoint_set;
pub mod error;
pub mod heap;
pub mod trace;
pub mod trie;

// Re-export commonly used types
pub use disjoint_set::{DisjointSet, DisjointSetStep};
pub use error::{Error, Result};
pub use heap::{HeapEntry, HeapOrder, HeapStep, PriorityQueue};
pub use trace::{Recorder, StepCounts, Trace};
pub use trie::{Trie, TrieStep};
