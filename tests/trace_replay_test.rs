// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Replaying recorded steps must reproduce the engine's own layout.
//!
//! This is what an external animator relies on: it sees only the steps, never
//! the structure, yet ends up drawing the same picture.

mod common;

use common::{replay_heap, replay_parents};
use dsa_engines::disjoint_set::DisjointSetStepKind;
use dsa_engines::heap::HeapStepKind;
use dsa_engines::trie::TrieStepKind;
use dsa_engines::{DisjointSet, PriorityQueue, StepCounts, Trace, Trie, TrieStep};

#[test]
fn test_heap_replay_matches_layout() {
    let inserts = [7, 2, 9, 4, 4, 1, 8, 3];
    let mut heap = PriorityQueue::new();
    let mut trace = Trace::new();
    for (i, p) in inserts.iter().enumerate() {
        heap.insert_traced(*p, i, &mut trace);
    }
    for _ in 0..3 {
        heap.extract_best_traced(&mut trace).unwrap();
    }

    let mut shadow = Vec::new();
    replay_heap(&mut shadow, trace.steps(), &inserts);
    let actual: Vec<i32> = heap.iter().map(|e| *e.priority()).collect();
    assert_eq!(shadow, actual);
}

#[test]
fn test_heap_trace_slices_per_operation() {
    let mut heap = PriorityQueue::new();
    let mut trace = Trace::new();

    heap.insert_traced(5, "a", &mut trace);
    let mark = trace.mark();
    heap.insert_traced(3, "b", &mut trace);

    let counts = StepCounts::from_steps(trace.since(mark));
    assert_eq!(counts.get(HeapStepKind::Append), 1);
    assert_eq!(counts.get(HeapStepKind::Swap), 1);
}

#[test]
fn test_disjoint_set_replay_matches_parents() {
    let n = 10;
    let mut sets = DisjointSet::new(n);
    let mut trace = Trace::new();
    for (a, b) in [(0, 1), (2, 3), (0, 2), (4, 5), (6, 7), (4, 6), (0, 4), (9, 3), (8, 7)] {
        sets.union_traced(a, b, &mut trace).unwrap();
    }
    for x in 0..n {
        sets.find_traced(x, &mut trace).unwrap();
    }

    let counts = StepCounts::from_steps(&trace);
    assert_eq!(counts.get(DisjointSetStepKind::Link) as usize, n - 1);
    assert_eq!(counts.get(DisjointSetStepKind::AlreadyConnected), 0);
    assert_eq!(sets.component_count(), 1);

    let mut parents: Vec<usize> = (0..n).collect();
    replay_parents(&mut parents, trace.steps());
    for (x, parent) in parents.iter().enumerate() {
        assert_eq!(sets.parent(x).unwrap(), *parent, "parent of {x}");
    }
}

#[test]
fn test_trie_created_edges_match_node_count() {
    let mut trie = Trie::new();
    let mut trace = Trace::new();
    for word in ["care", "careful", "car", "cat", "", "dog"] {
        trie.insert_traced(word, &mut trace);
    }
    let created = trace
        .iter()
        .filter(|step| matches!(step, TrieStep::CreateEdge { .. }))
        .count();
    assert_eq!(created + 1, trie.node_count());

    let marks = trace
        .iter()
        .filter(|step| matches!(step, TrieStep::MarkWord { already_stored: false, .. }))
        .count();
    assert_eq!(marks, trie.len());

    let counts = StepCounts::from_steps(&trace);
    assert_eq!(counts.get(TrieStepKind::CreateEdge) as usize, created);
    assert_eq!(counts.get(TrieStepKind::MarkWord), 6);
}
