//! Incremental edits on a materialized spanning tree.
//!
//! The editor remembers its tree and re-optimizes through a virtual
//! graph: the tree's edges plus or minus the edited edge, re-solved with
//! Kruskal. `add` replaces the tree only when the re-solve strictly
//! improves it; `remove` is governed by a [`RemovePolicy`], because on a
//! tree every removal either raises the total weight or disconnects the
//! graph, so the strict-improvement guard makes `remove` a near-certain
//! `false`. Both policies are kept available and the strict guard stays
//! the default contract.

use crate::graph::{Graph, Weight};

use super::{kruskal, Algorithm};

/// Replacement rule applied by [`MstEditor::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovePolicy {
    /// Replace the tree only when the re-solve has strictly smaller
    /// total weight (and differs, and is non-empty).
    #[default]
    StrictImprovement,

    /// Drop the edge and adopt the re-solve whenever connectivity
    /// survives.
    Rebuild,
}

impl RemovePolicy {
    /// Parses a policy from a configuration string.
    ///
    /// Accepts: "strict", `"strict_improvement"`, "rebuild"
    /// (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" | "strict_improvement" => Some(Self::StrictImprovement),
            "rebuild" => Some(Self::Rebuild),
            _ => None,
        }
    }
}

/// A spanning tree that accepts optimality-preserving edits.
#[derive(Debug, Clone)]
pub struct MstEditor {
    tree: Graph,
    policy: RemovePolicy,
}

impl MstEditor {
    /// Wraps an already-materialized tree with the default policy.
    #[must_use]
    pub fn new(tree: Graph) -> Self {
        Self::with_policy(tree, RemovePolicy::default())
    }

    /// Wraps a tree with an explicit remove policy.
    #[must_use]
    pub fn with_policy(tree: Graph, policy: RemovePolicy) -> Self {
        Self { tree, policy }
    }

    /// Solves `graph` with `algorithm` and wraps the result.
    #[must_use]
    pub fn from_graph(graph: &Graph, algorithm: Algorithm) -> Self {
        Self::new(algorithm.solve(graph))
    }

    /// The current tree.
    #[must_use]
    pub fn tree(&self) -> &Graph {
        &self.tree
    }

    /// Consumes the editor, returning the tree.
    #[must_use]
    pub fn into_tree(self) -> Graph {
        self.tree
    }

    /// Offers the edge `(u, v, w)` to the tree.
    ///
    /// Re-solves the tree plus the new edge and adopts the result iff it
    /// differs from the current tree, is non-empty, and has strictly
    /// smaller total weight. Returns whether the replacement happened;
    /// out-of-range endpoints return `false` without side effects.
    pub fn add(&mut self, u: usize, v: usize, w: Weight) -> bool {
        if !self.tree.is_valid_vertex(u) || !self.tree.is_valid_vertex(v) {
            return false;
        }

        let mut virtual_graph = self.virtual_copy(None);
        virtual_graph.add_edge(u, v, w);

        let candidate = kruskal::solve(&virtual_graph);
        self.adopt_if_improved(candidate)
    }

    /// Removes the edge `(u, v)` from the tree.
    ///
    /// The edge must currently exist, else `false`. The tree minus the
    /// edge is re-solved; adoption follows the configured
    /// [`RemovePolicy`]. Returns whether a replacement happened.
    pub fn remove(&mut self, u: usize, v: usize) -> bool {
        let exists = self.tree.neighbors(u).iter().any(|&(n, _)| n == v)
            && self.tree.neighbors(v).iter().any(|&(n, _)| n == u);
        if !exists {
            return false;
        }

        let virtual_graph = self.virtual_copy(Some((u, v)));
        let candidate = kruskal::solve(&virtual_graph);

        match self.policy {
            RemovePolicy::StrictImprovement => self.adopt_if_improved(candidate),
            RemovePolicy::Rebuild => {
                if candidate.num_vertices() == 0 {
                    return false;
                }
                self.tree = candidate;
                true
            }
        }
    }

    /// Copy of the tree as a plain graph, optionally excluding every
    /// parallel instance of one undirected edge.
    fn virtual_copy(&self, without: Option<(usize, usize)>) -> Graph {
        let mut graph = Graph::new(self.tree.num_vertices());
        for (u, v, w) in self.tree.edges() {
            if let Some((a, b)) = without {
                if (u == a && v == b) || (u == b && v == a) {
                    continue;
                }
            }
            graph.add_edge(u, v, w);
        }
        graph
    }

    fn adopt_if_improved(&mut self, candidate: Graph) -> bool {
        if !candidate.equal_to(&self.tree)
            && candidate.num_vertices() > 0
            && candidate.total_weight() < self.tree.total_weight()
        {
            self.tree = candidate;
            return true;
        }
        false
    }
}
