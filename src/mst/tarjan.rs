//! Heap-driven Borůvka variant.
//!
//! Each component carries a min-heap of candidate edges; a round pops
//! stale entries (both endpoints already merged) until the component's
//! cheapest outgoing edge surfaces. Heaps are merged small-into-large
//! when components union. Termination matches Borůvka's.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{Graph, Weight};

use super::union_find::UnionFind;

/// Heap entry: `(weight, other endpoint, u, v)`; the leading pair is the
/// tie-break order shared with the plain Borůvka solver.
type Entry = Reverse<(Weight, usize, usize, usize)>;

pub fn solve(graph: &Graph) -> Graph {
    let n = graph.num_vertices();
    if n == 0 {
        return Graph::new(0);
    }

    let mut heaps: Vec<BinaryHeap<Entry>> = (0..n)
        .map(|u| {
            graph
                .neighbors(u)
                .iter()
                .filter(|&&(v, _)| v != u)
                .map(|&(v, w)| Reverse((w, v, u, v)))
                .collect()
        })
        .collect();

    let mut uf = UnionFind::new(n);
    let mut tree = Graph::new(n);
    let mut components = n;

    while components > 1 {
        // Cheapest outgoing edge per live component.
        let mut chosen: Vec<(usize, usize, Weight)> = Vec::new();
        for root in 0..n {
            if uf.find(root) != root {
                continue;
            }
            while let Some(&Reverse((w, _, u, v))) = heaps[root].peek() {
                if uf.find(u) == uf.find(v) {
                    heaps[root].pop();
                } else {
                    chosen.push((u, v, w));
                    break;
                }
            }
        }

        let mut added = false;
        for (u, v, w) in chosen {
            let ru = uf.find(u);
            let rv = uf.find(v);
            if ru == rv {
                continue;
            }
            uf.union(u, v);
            let merged = uf.find(u);

            let mut a = std::mem::take(&mut heaps[ru]);
            let mut b = std::mem::take(&mut heaps[rv]);
            if a.len() < b.len() {
                std::mem::swap(&mut a, &mut b);
            }
            a.extend(b.drain());
            heaps[merged] = a;

            tree.add_edge(u, v, w);
            components -= 1;
            added = true;
        }

        if !added {
            return Graph::new(0);
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 2);
        g.add_edge(1, 2, 3);
        g.add_edge(0, 2, 10);

        let mut expected = Graph::new(3);
        expected.add_edge(0, 1, 2);
        expected.add_edge(1, 2, 3);

        assert!(solve(&g).equal_to(&expected));
    }

    #[test]
    fn disconnected_yields_sentinel() {
        let mut g = Graph::new(6);
        g.add_edge(0, 1, 6);
        g.add_edge(2, 3, 2);
        g.add_edge(4, 5, 8);
        assert_eq!(solve(&g).num_vertices(), 0);
    }

    #[test]
    fn chain_merges_to_one_component() {
        let mut g = Graph::new(5);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 2);
        g.add_edge(2, 3, 4);
        g.add_edge(3, 4, 8);

        let tree = solve(&g);
        assert_eq!(tree.total_weight(), 15);
        assert_eq!(tree.edges().len(), 4);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut g = Graph::new(2);
        g.add_edge(1, 1, 1);
        g.add_edge(0, 1, 5);
        assert_eq!(solve(&g).total_weight(), 5);
    }
}
