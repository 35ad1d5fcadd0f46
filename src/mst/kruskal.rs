//! Kruskal's algorithm: sorted edge scan over a union-find.

use crate::graph::Graph;

use super::union_find::UnionFind;

/// Sorts every edge by `(weight, u, v)` and admits each one whose
/// endpoints still lie in different components, stopping after `n - 1`
/// admissions.
pub fn solve(graph: &Graph) -> Graph {
    let n = graph.num_vertices();
    if n == 0 {
        return Graph::new(0);
    }

    let mut edges = graph.edges();
    edges.sort_unstable_by_key(|&(u, v, w)| (w, u, v));

    let mut uf = UnionFind::new(n);
    let mut tree = Graph::new(n);
    let mut admitted = 0;

    for (u, v, w) in edges {
        if admitted == n - 1 {
            break;
        }
        if uf.union(u, v) {
            tree.add_edge(u, v, w);
            admitted += 1;
        }
    }

    if admitted == n - 1 {
        tree
    } else {
        Graph::new(0)
    }
}
