//! Derived queries over a materialized spanning tree.
//!
//! Every function takes the tree by reference and never mutates it. The
//! 0-vertex sentinel (a disconnected input's "MST") degrades to empty or
//! zero results rather than errors, mirroring how the display command
//! surfaces it.
//!
//! Diameter queries use the two-sweep method: the farthest vertex from 0
//! is one endpoint of a longest path, and the farthest vertex from that
//! endpoint closes it. This relies on the input being a tree.

use std::fmt::Write as _;

use crate::graph::{Graph, Weight};

/// An edge reported by the extremum queries.
pub type Edge = (usize, usize, Weight);

/// Sum of the tree's edge weights.
#[must_use]
pub fn total_weight(tree: &Graph) -> i64 {
    tree.total_weight()
}

/// Farthest vertex from `start`, with the DFS parent of every reached
/// vertex. Distance is edge count, or the weight sum when `weighted`.
///
/// Neighbors are explored in adjacency order and the farthest vertex is
/// only displaced by a strictly greater distance, so ties resolve to the
/// first vertex encountered.
fn farthest_from(tree: &Graph, start: usize, weighted: bool) -> (usize, Vec<Option<usize>>) {
    let n = tree.num_vertices();
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut distance = vec![0i64; n];
    let mut farthest = start;
    let mut max_distance = 0i64;

    let mut stack = vec![start];
    visited[start] = true;
    while let Some(u) = stack.pop() {
        if distance[u] > max_distance {
            max_distance = distance[u];
            farthest = u;
        }
        for &(v, w) in tree.neighbors(u).iter().rev() {
            if !visited[v] {
                visited[v] = true;
                parents[v] = Some(u);
                distance[v] = distance[u] + if weighted { i64::from(w) } else { 1 };
                stack.push(v);
            }
        }
    }

    (farthest, parents)
}

/// Walks `parents` from `from` up to the sweep root, inclusive.
fn walk_to_root(parents: &[Option<usize>], from: usize) -> Vec<usize> {
    let mut path = vec![from];
    let mut v = from;
    while let Some(p) = parents[v] {
        path.push(p);
        v = p;
    }
    path
}

/// The longest path in the tree by edge count, as `"a->b->c"`.
///
/// Returns the empty string for the 0-vertex sentinel.
#[must_use]
pub fn depth_path(tree: &Graph) -> String {
    if tree.num_vertices() == 0 {
        return String::new();
    }

    let (tip, _) = farthest_from(tree, 0, false);
    let (other_end, parents) = farthest_from(tree, tip, false);

    let path = walk_to_root(&parents, other_end);
    let rendered: Vec<String> = path.iter().map(ToString::to_string).collect();
    rendered.join("->")
}

/// The heaviest edge, ties broken by first encountered in adjacency
/// scan order. `None` when the tree has no edges.
#[must_use]
pub fn heaviest_edge(tree: &Graph) -> Option<Edge> {
    let mut best: Option<Edge> = None;
    for u in 0..tree.num_vertices() {
        for &(v, w) in tree.neighbors(u) {
            if best.is_none_or(|(_, _, bw)| w > bw) {
                best = Some((u, v, w));
            }
        }
    }
    best
}

/// The lightest edge, ties broken by first encountered in adjacency
/// scan order. `None` when the tree has no edges.
#[must_use]
pub fn lightest_edge(tree: &Graph) -> Option<Edge> {
    let mut best: Option<Edge> = None;
    for u in 0..tree.num_vertices() {
        for &(v, w) in tree.neighbors(u) {
            if best.is_none_or(|(_, _, bw)| w < bw) {
                best = Some((u, v, w));
            }
        }
    }
    best
}

/// The weighted diameter as
/// `"Heaviest path: a --(w)--> b --(w)--> ... --> z"`.
///
/// Returns `"Empty graph"` for the 0-vertex sentinel.
#[must_use]
pub fn heaviest_path(tree: &Graph) -> String {
    if tree.num_vertices() == 0 {
        return "Empty graph".to_string();
    }

    let (start, _) = farthest_from(tree, 0, true);
    let (end, parents) = farthest_from(tree, start, true);

    // Vertex-weight segments from `start` down to `end`.
    let mut segments: Vec<(usize, Weight)> = Vec::new();
    let mut v = end;
    while let Some(p) = parents[v] {
        let w = tree
            .neighbors(p)
            .iter()
            .find(|&&(n, _)| n == v)
            .map_or(0, |&(_, w)| w);
        segments.push((p, w));
        v = p;
    }
    segments.reverse();

    let mut out = String::from("Heaviest path: ");
    for (u, w) in segments {
        let _ = write!(out, "{u} --({w})--> ");
    }
    let _ = write!(out, "{end}");
    out
}

/// Mean shortest-path distance over all connected unordered pairs.
///
/// Floyd–Warshall over the tree; on a tree those distances are the
/// unique path weights. Returns `0.0` when no pair exists.
#[must_use]
#[allow(clippy::cast_precision_loss)] // distance sums stay far below 2^52
pub fn average_distance(tree: &Graph) -> f64 {
    let n = tree.num_vertices();
    let mut dist = vec![vec![i64::MAX; n]; n];
    for (u, row) in dist.iter_mut().enumerate() {
        row[u] = 0;
    }
    for u in 0..n {
        for &(v, w) in tree.neighbors(u) {
            let w = i64::from(w);
            if w < dist[u][v] {
                dist[u][v] = w;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == i64::MAX {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == i64::MAX {
                    continue;
                }
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    let mut sum = 0i64;
    let mut count = 0i64;
    for i in 0..n {
        for j in (i + 1)..n {
            if dist[i][j] < i64::MAX {
                sum += dist[i][j];
                count += 1;
            }
        }
    }

    if count > 0 {
        sum as f64 / count as f64
    } else {
        0.0
    }
}

/// The unique tree path between `u` and `v` as `"u->...->v"`.
///
/// Returns a no-path message when either endpoint is out of range or
/// the two lie in different components.
#[must_use]
pub fn path(tree: &Graph, u: usize, v: usize) -> String {
    let no_path = || format!("No path exists between vertex {u} and vertex {v}.");

    if !tree.is_valid_vertex(u) || !tree.is_valid_vertex(v) {
        return no_path();
    }

    let (_, parents) = farthest_from(tree, u, false);
    if v != u && parents[v].is_none() {
        return no_path();
    }

    let mut hops = walk_to_root(&parents, v);
    hops.reverse();
    let rendered: Vec<String> = hops.iter().map(ToString::to_string).collect();
    rendered.join("->")
}
