// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Traces serialize to plain JSON for a renderer running elsewhere.

#![cfg(feature = "serde")]

use dsa_engines::{DisjointSet, DisjointSetStep, HeapOrder, PriorityQueue, Trace};

#[test]
fn test_union_trace_to_json() {
    let mut sets = DisjointSet::new(2);
    let mut trace = Trace::new();
    sets.union_traced(0, 1, &mut trace).unwrap();

    let json = serde_json::to_string(&trace).unwrap();
    let back: Trace<DisjointSetStep> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, trace);
    assert!(json.contains("\"Link\":{\"child\":1,\"parent\":0}"));
}

#[test]
fn test_heap_entries_to_json() {
    let mut heap = PriorityQueue::with_order(HeapOrder::Max);
    heap.insert(2, "low".to_string());
    heap.insert(7, "high".to_string());
    let json = serde_json::to_string(heap.as_slice()).unwrap();
    assert_eq!(
        json,
        r#"[{"priority":7,"payload":"high"},{"priority":2,"payload":"low"}]"#
    );
    assert_eq!(serde_json::to_string(&heap.order()).unwrap(), "\"Max\"");
}
