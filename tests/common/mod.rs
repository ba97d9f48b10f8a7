// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The replay helpers rebuild a structure's raw layout from nothing but its
//! step trace, the way a renderer would.

#![allow(dead_code)]

use dsa_engines::{DisjointSetStep, HeapStep};

/// Apply heap steps to a shadow copy of the priority array.
///
/// `appended` supplies the priority of each `Append`, in order.
pub fn replay_heap<P: Clone>(shadow: &mut Vec<P>, steps: &[HeapStep], appended: &[P]) {
    let mut appended = appended.iter();
    for step in steps {
        match *step {
            HeapStep::Append { index } => {
                assert_eq!(index, shadow.len(), "append must target the end");
                shadow.push(appended.next().expect("priority for append").clone());
            }
            HeapStep::Swap { index, other } => shadow.swap(index, other),
            HeapStep::RemoveRoot => {
                shadow.swap_remove(0);
            }
            HeapStep::MoveLastToRoot { from } => {
                assert_eq!(from, shadow.len(), "last entry moved from the old end");
            }
            HeapStep::Compare { .. } | HeapStep::Settled { .. } => {}
        }
    }
}

/// Apply disjoint-set steps to a shadow parent array.
pub fn replay_parents(parents: &mut [usize], steps: &[DisjointSetStep]) {
    for step in steps {
        match *step {
            DisjointSetStep::Link { child, parent } => parents[child] = parent,
            DisjointSetStep::Compress { element, root, .. } => parents[element] = root,
            _ => {}
        }
    }
}
