// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prefix tree over `char` sequences.
//!
//! Each node owns its children in an ordered map keyed by character, so
//! enumeration visits children in ascending code-point order and its output is
//! reproducible. Nodes are created lazily by [`Trie::insert`] and only released
//! when the whole trie is dropped or [`cleared`](Trie::clear).
//!
//! The empty string is a valid word: inserting it marks the root.
//!
//! # Example
//!
//! ```
//! use dsa_engines::trie::Trie;
//!
//! let trie: Trie = ["cat", "cats", "car"].into_iter().collect();
//!
//! assert!(trie.search("cat"));
//! assert!(!trie.search("ca"));
//! assert!(trie.starts_with("ca"));
//! assert_eq!(trie.words_with_prefix("ca").collect::<Vec<_>>(), ["car", "cat", "cats"]);
//! ```

use crate::trace::{Recorder, Step};
use std::collections::{btree_map, BTreeMap};
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter, IntoStaticStr};
use tracing::{debug, trace};

#[derive(Debug, Default, Clone)]
struct Node {
    children: BTreeMap<char, Node>,
    end_of_word: bool,
}

/// One elementary action of an insert.
///
/// `depth` is the length, in characters, of the path after taking the edge
/// (or of the marked word for [`TrieStep::MarkWord`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDiscriminants)]
#[strum_discriminants(name(TrieStepKind))]
#[strum_discriminants(derive(Hash, EnumCountMacro, EnumIter, IntoStaticStr))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrieStep {
    /// Followed an existing edge labelled `ch`.
    Visit { ch: char, depth: usize },
    /// Created a new edge labelled `ch`.
    CreateEdge { ch: char, depth: usize },
    /// Set the end-of-word flag on the final node.
    MarkWord { depth: usize, already_stored: bool },
}

impl Step for TrieStep {
    type Kind = TrieStepKind;

    fn kind(&self) -> TrieStepKind {
        self.into()
    }

    fn kind_index(kind: TrieStepKind) -> usize {
        kind as usize
    }
}

/// A set of strings indexed by prefix.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: Node,
    words: usize,
    nodes: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes + 1
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        debug!(words = self.words, nodes = self.node_count(), "cleared trie");
        *self = Self::default();
    }

    /// Store `word`. O(|word|).
    ///
    /// Returns `true` if the word was not already stored.
    pub fn insert(&mut self, word: &str) -> bool {
        self.insert_traced(word, &mut ())
    }

    /// [`insert`](Self::insert), reporting each step to `recorder`.
    pub fn insert_traced(&mut self, word: &str, recorder: &mut impl Recorder<TrieStep>) -> bool {
        let mut created = 0;
        let mut depth = 0;
        let mut node = &mut self.root;
        for ch in word.chars() {
            depth += 1;
            node = match node.children.entry(ch) {
                btree_map::Entry::Occupied(edge) => {
                    recorder.record(TrieStep::Visit { ch, depth });
                    edge.into_mut()
                }
                btree_map::Entry::Vacant(edge) => {
                    created += 1;
                    recorder.record(TrieStep::CreateEdge { ch, depth });
                    edge.insert(Node::default())
                }
            };
        }

        let already_stored = node.end_of_word;
        node.end_of_word = true;
        recorder.record(TrieStep::MarkWord {
            depth,
            already_stored,
        });

        self.nodes += created;
        if !already_stored {
            self.words += 1;
        }
        trace!(word, created, already_stored, "trie insert");
        !already_stored
    }

    /// True if `word` itself is stored.
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.end_of_word)
    }

    /// True if some stored word begins with `prefix`.
    ///
    /// Every path in the trie leads to a stored word, so path existence is
    /// enough.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Stored words beginning with `prefix`, in depth-first order with
    /// children taken by ascending character.
    ///
    /// The iterator is lazy and keeps only the current path.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        match self.walk(prefix) {
            Some(node) => Words::new(prefix, node),
            None => Words::empty(),
        }
    }

    /// Every stored word. Same as `words_with_prefix("")`.
    pub fn words(&self) -> Words<'_> {
        Words::new("", &self.root)
    }

    fn walk(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Iterator returned by [`Trie::words_with_prefix`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    /// Characters of the current path, starting with the prefix.
    path: String,
    /// Child iterators along the path. `stack[0]` belongs to the prefix node.
    stack: Vec<btree_map::Iter<'a, char, Node>>,
    /// The prefix itself, when it is a stored word and not yet yielded.
    pending: Option<String>,
}

impl<'a> Words<'a> {
    fn new(prefix: &str, node: &'a Node) -> Self {
        Self {
            path: prefix.to_string(),
            stack: vec![node.children.iter()],
            pending: node.end_of_word.then(|| prefix.to_string()),
        }
    }

    fn empty() -> Self {
        Self {
            path: String::new(),
            stack: Vec::new(),
            pending: None,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }
        loop {
            let children = self.stack.last_mut()?;
            match children.next() {
                Some((&ch, child)) => {
                    self.path.push(ch);
                    self.stack.push(child.children.iter());
                    if child.end_of_word {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }
}
