// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Disjoint-set forest (union-find) over a fixed universe `0..n`.
//!
//! Elements live in one backing `Vec`; parent links are indices into it, so
//! there are no owning references and no cycles to manage. The universe is
//! fixed at construction: elements are merged, never added or removed.
//!
//! - [`find`](DisjointSet::find) is iterative: one pass to the root, a second
//!   pass rewriting every visited parent link to the root (full path
//!   compression). Stack use is constant regardless of tree depth.
//! - [`union`](DisjointSet::union) links by rank. On equal ranks the root of
//!   `x` becomes the parent and its rank grows by one.
//!
//! # Example
//!
//! ```
//! use dsa_engines::disjoint_set::DisjointSet;
//!
//! let mut sets = DisjointSet::new(6);
//! sets.union(0, 1)?;
//! sets.union(2, 3)?;
//! sets.union(1, 4)?;
//!
//! assert!(sets.connected(0, 4)?);
//! assert!(!sets.connected(0, 2)?);
//! assert_eq!(sets.size(4)?, 3);
//! assert_eq!(sets.component_count(), 3);
//! # Ok::<(), dsa_engines::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::trace::{Recorder, Step};
use std::collections::BTreeMap;
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter, IntoStaticStr};
use tracing::{debug, trace};

/// One element of the forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Element {
    /// Index of the parent; equal to the element's own index at a root.
    parent: usize,
    /// Upper bound on the height of the tree below this element.
    rank: u32,
    /// Number of elements in the set. Only meaningful at a root.
    size: usize,
}

/// One elementary action of a find or union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDiscriminants)]
#[strum_discriminants(name(DisjointSetStepKind))]
#[strum_discriminants(derive(Hash, EnumCountMacro, EnumIter, IntoStaticStr))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisjointSetStep {
    /// Followed the link from `element` to `parent` on the way to the root.
    Visit { element: usize, parent: usize },
    /// `element` is its own parent.
    RootFound { element: usize },
    /// Path compression re-pointed `element` from `old_parent` to `root`.
    Compress {
        element: usize,
        old_parent: usize,
        root: usize,
    },
    /// Both operands of a union already share `root`.
    AlreadyConnected { root: usize },
    /// Root `child` was attached under root `parent`.
    Link { child: usize, parent: usize },
    /// Rank of `root` grew to `rank` after a union of equal ranks.
    RankIncrement { root: usize, rank: u32 },
    /// Set rooted at `root` now holds `size` elements.
    SizeUpdate { root: usize, size: usize },
}

impl Step for DisjointSetStep {
    type Kind = DisjointSetStepKind;

    fn kind(&self) -> DisjointSetStepKind {
        self.into()
    }

    fn kind_index(kind: DisjointSetStepKind) -> usize {
        kind as usize
    }
}

/// Union-find structure with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    elements: Vec<Element>,
    components: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    pub fn new(n: usize) -> Self {
        debug!(elements = n, "created disjoint set");
        Self {
            elements: (0..n)
                .map(|i| Element {
                    parent: i,
                    rank: 0,
                    size: 1,
                })
                .collect(),
            components: n,
        }
    }

    /// Size of the universe.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Raw parent link of `x`, without compressing.
    pub fn parent(&self, x: usize) -> Result<usize> {
        Ok(self.element(x)?.parent)
    }

    /// Rank of `x`.
    pub fn rank(&self, x: usize) -> Result<u32> {
        Ok(self.element(x)?.rank)
    }

    /// True if `x` is the representative of its set.
    pub fn is_root(&self, x: usize) -> Result<bool> {
        Ok(self.element(x)?.parent == x)
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.find_traced(x, &mut ())
    }

    /// [`find`](Self::find), reporting each step to `recorder`.
    pub fn find_traced(
        &mut self,
        x: usize,
        recorder: &mut impl Recorder<DisjointSetStep>,
    ) -> Result<usize> {
        self.check(x)?;
        Ok(self.find_root(x, recorder))
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `Ok(false)` without changing anything when they are already
    /// the same set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.union_traced(x, y, &mut ())
    }

    /// [`union`](Self::union), reporting each step to `recorder`.
    ///
    /// Both ids are checked before anything is recorded or compressed.
    pub fn union_traced(
        &mut self,
        x: usize,
        y: usize,
        recorder: &mut impl Recorder<DisjointSetStep>,
    ) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.find_root(x, recorder);
        let root_y = self.find_root(y, recorder);
        if root_x == root_y {
            recorder.record(DisjointSetStep::AlreadyConnected { root: root_x });
            trace!(x, y, root = root_x, "union of connected elements");
            return Ok(false);
        }

        let rank_x = self.elements[root_x].rank;
        let rank_y = self.elements[root_y].rank;
        let (parent, child) = if rank_x < rank_y {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.elements[child].parent = parent;
        recorder.record(DisjointSetStep::Link { child, parent });

        if rank_x == rank_y {
            self.elements[parent].rank += 1;
            recorder.record(DisjointSetStep::RankIncrement {
                root: parent,
                rank: self.elements[parent].rank,
            });
        }

        self.elements[parent].size += self.elements[child].size;
        let size = self.elements[parent].size;
        recorder.record(DisjointSetStep::SizeUpdate { root: parent, size });

        self.components -= 1;
        debug!(x, y, root = parent, size, components = self.components, "union merged");
        Ok(true)
    }

    /// True if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(y)?;
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Number of elements in the set containing `x`.
    pub fn size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.elements[root].size)
    }

    /// Every set, keyed by representative, members ascending.
    ///
    /// Calls `find` on every element, so the forest is fully compressed
    /// afterwards.
    pub fn components(&mut self) -> BTreeMap<usize, Vec<usize>> {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for element in 0..self.elements.len() {
            let root = self.find_root(element, &mut ());
            groups.entry(root).or_default().push(element);
        }
        groups
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.elements.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: x,
                len: self.elements.len(),
            })
        }
    }

    fn element(&self, x: usize) -> Result<&Element> {
        self.elements.get(x).ok_or(Error::IndexOutOfRange {
            index: x,
            len: self.elements.len(),
        })
    }

    /// Two-pass find on a checked index.
    fn find_root(&mut self, x: usize, recorder: &mut impl Recorder<DisjointSetStep>) -> usize {
        let mut root = x;
        loop {
            let parent = self.elements[root].parent;
            if parent == root {
                break;
            }
            recorder.record(DisjointSetStep::Visit {
                element: root,
                parent,
            });
            root = parent;
        }
        recorder.record(DisjointSetStep::RootFound { element: root });

        let mut current = x;
        while current != root {
            let old_parent = self.elements[current].parent;
            if old_parent != root {
                self.elements[current].parent = root;
                recorder.record(DisjointSetStep::Compress {
                    element: current,
                    old_parent,
                    root,
                });
            }
            current = old_parent;
        }
        root
    }
}
