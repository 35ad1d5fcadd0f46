//! Undirected weighted graph stored as adjacency lists.
//!
//! Each vertex `u` owns a list of `(neighbor, weight)` entries. An
//! undirected edge `{u, v, w}` appears once in `adj[u]` and once in
//! `adj[v]` (the mirror invariant), so every whole-graph weight sum is
//! divided by two. Parallel edges and self-loops are representable;
//! no MST algorithm ever selects a self-loop.
//!
//! Operations on invalid vertex indices are deliberate silent no-ops:
//! the inputs come from an untrusted socket, and the session layer only
//! reports precondition errors for a missing graph, never for a bad index.

use std::fmt::Write as _;

/// Edge weight type. Weights are non-negative by protocol construction
/// and fit a 32-bit signed range.
pub type Weight = i32;

/// An undirected weighted multigraph over vertices `0..n`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// `adj[u]` holds one `(v, w)` entry per incident edge.
    adj: Vec<Vec<(usize, Weight)>>,
}

impl Graph {
    /// Creates an empty graph with `n` vertices and no edges.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// True when `v` names an existing vertex.
    #[must_use]
    pub fn is_valid_vertex(&self, v: usize) -> bool {
        v < self.adj.len()
    }

    /// Adds an undirected edge between `u` and `v` with the given weight.
    ///
    /// The edge is appended to both adjacency lists. Duplicates are
    /// allowed. Out-of-range endpoints are a silent no-op.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) {
        if self.is_valid_vertex(u) && self.is_valid_vertex(v) {
            self.adj[u].push((v, weight));
            self.adj[v].push((u, weight));
        }
    }

    /// Removes one undirected edge between `u` and `v`.
    ///
    /// Deletes the first `(v, _)` entry from `adj[u]` and the first
    /// `(u, _)` entry from `adj[v]`. Absent edges and out-of-range
    /// endpoints are a silent no-op.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        if self.is_valid_vertex(u) && self.is_valid_vertex(v) {
            if let Some(pos) = self.adj[u].iter().position(|&(n, _)| n == v) {
                self.adj[u].remove(pos);
            }
            if let Some(pos) = self.adj[v].iter().position(|&(n, _)| n == u) {
                self.adj[v].remove(pos);
            }
        }
    }

    /// Sets the weight of every edge between `u` and `v` to `new_weight`.
    ///
    /// Parallel edges all take the new weight. Out-of-range endpoints are
    /// a silent no-op.
    pub fn change_weight(&mut self, u: usize, v: usize, new_weight: Weight) {
        if self.is_valid_vertex(u) && self.is_valid_vertex(v) {
            for entry in &mut self.adj[u] {
                if entry.0 == v {
                    entry.1 = new_weight;
                }
            }
            for entry in &mut self.adj[v] {
                if entry.0 == u {
                    entry.1 = new_weight;
                }
            }
        }
    }

    /// Total weight over all edges.
    ///
    /// Every edge is mirrored in two adjacency lists, so the raw sum is
    /// halved.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        let doubled: i64 = self
            .adj
            .iter()
            .flat_map(|neighbors| neighbors.iter())
            .map(|&(_, w)| i64::from(w))
            .sum();
        doubled / 2
    }

    /// The `(neighbor, weight)` entries incident to `u`.
    ///
    /// Returns an empty slice for an out-of-range vertex.
    #[must_use]
    pub fn neighbors(&self, u: usize) -> &[(usize, Weight)] {
        self.adj.get(u).map_or(&[], Vec::as_slice)
    }

    /// Collects every undirected edge once as `(u, v, w)` with `u < v`.
    ///
    /// Parallel edges yield one tuple each; self-loops are omitted (no
    /// spanning-tree algorithm can select one).
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize, Weight)> {
        let mut edges = Vec::new();
        for (u, neighbors) in self.adj.iter().enumerate() {
            for &(v, w) in neighbors {
                if u < v {
                    edges.push((u, v, w));
                }
            }
        }
        edges
    }

    /// Structural equality: equal vertex count, equal total weight, and
    /// per-vertex adjacency lists equal as multisets.
    ///
    /// Insensitive to adjacency insertion order; this is the comparison
    /// contract the test suite relies on.
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false;
        }
        if self.total_weight() != other.total_weight() {
            return false;
        }

        for (mine, theirs) in self.adj.iter().zip(other.adj.iter()) {
            if mine.len() != theirs.len() {
                return false;
            }
            let mut mine_sorted = mine.clone();
            let mut theirs_sorted = theirs.clone();
            mine_sorted.sort_unstable();
            theirs_sorted.sort_unstable();
            if mine_sorted != theirs_sorted {
                return false;
            }
        }
        true
    }

    /// Renders the human-readable graph block sent by `display`.
    #[must_use]
    pub fn display(&self) -> String {
        self.render("============ Graph Representation ============")
    }

    /// Renders the same block under the MST header.
    #[must_use]
    pub fn display_mst(&self) -> String {
        self.render("============= MST Representation =============")
    }

    fn render(&self, header: &str) -> String {
        let mut out = String::new();
        out.push_str(header);
        out.push('\n');
        out.push_str("Vertices in the graph: ");
        for i in 0..self.num_vertices() {
            let _ = write!(out, "{i} ");
        }
        out.push_str("\nConnections between vertices (undirected edges):\n");
        for (u, neighbors) in self.adj.iter().enumerate() {
            for &(v, w) in neighbors {
                if u < v {
                    let _ = writeln!(out, "Vertex {u} <----({w})----> Vertex {v}");
                }
            }
        }
        out.push_str("=============================================\n");
        out
    }
}
