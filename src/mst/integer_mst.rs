//! Integer-weight Borůvka variant.
//!
//! The edge list is radix-sorted by weight once (four byte-wide passes,
//! valid because protocol weights are non-negative), so each Borůvka
//! round finds a component's cheapest outgoing edge on first contact
//! while scanning in ascending weight order. Output is indistinguishable
//! from the plain Borůvka solver.

use crate::graph::{Graph, Weight};

use super::union_find::UnionFind;

/// Stable LSD radix sort on the weight column.
fn radix_sort_by_weight(edges: &mut Vec<(usize, usize, Weight)>) {
    let mut scratch: Vec<(usize, usize, Weight)> = Vec::with_capacity(edges.len());
    for shift in [0u32, 8, 16, 24] {
        let mut counts = [0usize; 256];
        for &(_, _, w) in edges.iter() {
            counts[((w as u32) >> shift) as usize & 0xFF] += 1;
        }
        let mut total = 0;
        for count in &mut counts {
            let c = *count;
            *count = total;
            total += c;
        }
        scratch.clear();
        scratch.resize(edges.len(), (0, 0, 0));
        for &edge in edges.iter() {
            let bucket = ((edge.2 as u32) >> shift) as usize & 0xFF;
            scratch[counts[bucket]] = edge;
            counts[bucket] += 1;
        }
        std::mem::swap(edges, &mut scratch);
    }
}

pub fn solve(graph: &Graph) -> Graph {
    let n = graph.num_vertices();
    if n == 0 {
        return Graph::new(0);
    }

    let mut edges = graph.edges();
    radix_sort_by_weight(&mut edges);

    let mut uf = UnionFind::new(n);
    let mut tree = Graph::new(n);
    let mut components = n;

    while components > 1 {
        // (weight, other endpoint, u, v): the scan is in ascending weight
        // order, so the first hit per component already has the minimum
        // weight; equal-weight candidates fall back to the other-endpoint
        // tie-break.
        let mut best: Vec<Option<(Weight, usize, usize, usize)>> = vec![None; n];
        for &(u, v, w) in &edges {
            let ru = uf.find(u);
            let rv = uf.find(v);
            if ru == rv {
                continue;
            }
            for (root, other) in [(ru, v), (rv, u)] {
                match &mut best[root] {
                    slot @ None => *slot = Some((w, other, u, v)),
                    Some(current) if current.0 == w && other < current.1 => {
                        *current = (w, other, u, v);
                    }
                    Some(_) => {}
                }
            }
        }

        let mut added = false;
        for slot in best {
            if let Some((w, _, u, v)) = slot {
                if uf.union(u, v) {
                    tree.add_edge(u, v, w);
                    components -= 1;
                    added = true;
                }
            }
        }

        if !added {
            return Graph::new(0);
        }
    }

    tree
}
