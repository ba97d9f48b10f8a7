// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type shared by the engines.
//!
//! Only genuinely invalid requests are errors. A trie miss or a union of two
//! already-connected elements is an ordinary `false`.

use thiserror::Error;

/// Errors returned by engine operations.
///
/// A failed call never leaves the structure modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A disjoint-set id outside `0..len`.
    #[error("element {index} is out of range for a disjoint set of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// `peek` or `extract_best` on an empty heap.
    #[error("priority queue is empty")]
    EmptyStructure,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::IndexOutOfRange { index: 7, len: 6 };
        assert_eq!(
            err.to_string(),
            "element 7 is out of range for a disjoint set of 6 elements"
        );
        assert_eq!(Error::EmptyStructure.to_string(), "priority queue is empty");
    }
}
