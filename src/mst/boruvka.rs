//! Borůvka's algorithm: merge every component along its cheapest
//! outgoing edge, round after round.

use crate::graph::{Graph, Weight};

use super::union_find::UnionFind;

/// One component's best candidate: `(weight, other endpoint, u, v)`.
/// The leading pair is the tie-break order.
type Candidate = (Weight, usize, usize, usize);

fn offer(slot: &mut Option<Candidate>, candidate: Candidate) {
    let better = match slot {
        None => true,
        Some(current) => (candidate.0, candidate.1) < (current.0, current.1),
    };
    if better {
        *slot = Some(candidate);
    }
}

/// Runs Borůvka rounds until one component remains.
///
/// A round that adds nothing while more than one component survives
/// means the graph is disconnected; the empty sentinel is returned.
pub fn solve(graph: &Graph) -> Graph {
    let n = graph.num_vertices();
    if n == 0 {
        return Graph::new(0);
    }

    let edges = graph.edges();
    let mut uf = UnionFind::new(n);
    let mut tree = Graph::new(n);
    let mut components = n;

    while components > 1 {
        let mut best: Vec<Option<Candidate>> = vec![None; n];
        for &(u, v, w) in &edges {
            let ru = uf.find(u);
            let rv = uf.find(v);
            if ru == rv {
                continue;
            }
            offer(&mut best[ru], (w, v, u, v));
            offer(&mut best[rv], (w, u, u, v));
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
