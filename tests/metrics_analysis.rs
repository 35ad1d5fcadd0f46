//! Metric engine values over the reference trees.

use mst_analyzer::graph::Graph;
use mst_analyzer::metrics;
use mst_analyzer::mst::Algorithm;

/// MST of the triangle graph: 0 -2- 1 -3- 2.
fn triangle_tree() -> Graph {
    let mut tree = Graph::new(3);
    tree.add_edge(0, 1, 2);
    tree.add_edge(1, 2, 3);
    tree
}

/// MST of the 5-vertex reference graph.
fn five_tree() -> Graph {
    let mut tree = Graph::new(5);
    tree.add_edge(0, 1, 2);
    tree.add_edge(1, 2, 3);
    tree.add_edge(0, 3, 6);
    tree.add_edge(1, 4, 5);
    tree
}

/// MST of the 6-vertex reference graph.
fn six_tree() -> Graph {
    let mut tree = Graph::new(6);
    tree.add_edge(3, 1, 2);
    tree.add_edge(3, 2, 2);
    tree.add_edge(3, 5, 8);
    tree.add_edge(5, 4, 8);
    tree.add_edge(2, 0, 3);
    tree
}

#[test]
fn total_weights() {
    assert_eq!(metrics::total_weight(&triangle_tree()), 5);
    assert_eq!(metrics::total_weight(&five_tree()), 16);
    assert_eq!(metrics::total_weight(&six_tree()), 23);
}

#[test]
fn depth_paths() {
    assert_eq!(metrics::depth_path(&triangle_tree()), "0->1->2");
    assert_eq!(metrics::depth_path(&six_tree()), "0->2->3->5->4");
}

#[test]
fn depth_path_length_matches_the_diameter() {
    // Triangle tree diameter: 2 edges, 3 vertices on the path.
    assert_eq!(metrics::depth_path(&triangle_tree()).split("->").count(), 3);
    // Six-vertex tree diameter: 4 edges.
    assert_eq!(metrics::depth_path(&six_tree()).split("->").count(), 5);
    // Five-vertex tree diameter: 2-1-0-3 or 4-1-0-3, 3 edges either way.
    assert_eq!(metrics::depth_path(&five_tree()).split("->").count(), 4);
}

#[test]
fn heaviest_edges() {
    assert_eq!(metrics::heaviest_edge(&triangle_tree()), Some((1, 2, 3)));
    assert_eq!(metrics::heaviest_edge(&five_tree()), Some((0, 3, 6)));
    // Ties between the two weight-8 edges resolve to the first in scan
    // order: vertex 3's entry for 5.
    assert_eq!(metrics::heaviest_edge(&six_tree()), Some((3, 5, 8)));
}

#[test]
fn lightest_edges() {
    assert_eq!(metrics::lightest_edge(&triangle_tree()), Some((0, 1, 2)));
    assert_eq!(metrics::lightest_edge(&five_tree()), Some((0, 1, 2)));
    assert_eq!(metrics::lightest_edge(&six_tree()), Some((1, 3, 2)));
}

#[test]
fn heaviest_edge_dominates_every_path_edge() {
    let tree = six_tree();
    let (_, _, max_w) = metrics::heaviest_edge(&tree).unwrap();
    for (_, _, w) in tree.edges() {
        assert!(w <= max_w);
    }
}

#[test]
fn heaviest_paths() {
    assert_eq!(
        metrics::heaviest_path(&triangle_tree()),
        "Heaviest path: 2 --(3)--> 1 --(2)--> 0"
    );
    assert_eq!(
        metrics::heaviest_path(&six_tree()),
        "Heaviest path: 4 --(8)--> 5 --(8)--> 3 --(2)--> 2 --(3)--> 0"
    );
}

#[test]
fn average_distances() {
    // Triangle tree pairs: 2, 3, 5 → 10/3.
    assert!((metrics::average_distance(&triangle_tree()) - 10.0 / 3.0).abs() < 1e-9);
    // Five-vertex tree: sum over the ten pairs is 68 → 6.8.
    assert!((metrics::average_distance(&five_tree()) - 6.8).abs() < 1e-9);
    // Six-vertex tree: sum over the fifteen pairs is 145 → 29/3.
    assert!((metrics::average_distance(&six_tree()) - 29.0 / 3.0).abs() < 1e-9);
}

#[test]
fn average_distance_matches_the_pairwise_definition() {
    let tree = five_tree();
    let n = tree.num_vertices();

    // Brute-force: per-pair path weights via the path metric's walk.
    let mut sum = 0.0;
    let mut count = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let rendered = metrics::path(&tree, i, j);
            let hops: Vec<usize> = rendered
                .split("->")
                .map(|v| v.parse().unwrap())
                .collect();
            let mut dist = 0.0;
            for pair in hops.windows(2) {
                let w = tree
                    .neighbors(pair[0])
                    .iter()
                    .find(|&&(v, _)| v == pair[1])
                    .map(|&(_, w)| f64::from(w))
                    .unwrap();
                dist += w;
            }
            sum += dist;
            count += 1.0;
        }
    }

    assert!((metrics::average_distance(&tree) - sum / count).abs() < 1e-9);
}

#[test]
fn paths_between_vertices() {
    let tree = six_tree();
    assert_eq!(metrics::path(&tree, 0, 4), "0->2->3->5->4");
    assert_eq!(metrics::path(&tree, 4, 0), "4->5->3->2->0");
    assert_eq!(metrics::path(&tree, 1, 1), "1");
}

#[test]
fn path_in_a_forest_reports_no_path() {
    let mut forest = Graph::new(4);
    forest.add_edge(0, 1, 1);
    forest.add_edge(2, 3, 1);
    assert_eq!(
        metrics::path(&forest, 1, 2),
        "No path exists between vertex 1 and vertex 2."
    );
}

#[test]
fn sentinel_metrics_degrade_quietly() {
    let sentinel = Graph::new(0);
    assert_eq!(metrics::total_weight(&sentinel), 0);
    assert_eq!(metrics::depth_path(&sentinel), "");
    assert_eq!(metrics::heaviest_path(&sentinel), "Empty graph");
    assert_eq!(metrics::heaviest_edge(&sentinel), None);
    assert_eq!(metrics::lightest_edge(&sentinel), None);
    assert!(metrics::average_distance(&sentinel).abs() < f64::EPSILON);
}

#[test]
fn metrics_agree_with_a_solved_tree() {
    // End to end: solve the 6-vertex reference graph, then query it.
    let mut graph = Graph::new(6);
    graph.add_edge(0, 1, 6);
    graph.add_edge(1, 3, 2);
    graph.add_edge(3, 5, 8);
    graph.add_edge(5, 4, 8);
    graph.add_edge(4, 0, 9);
    graph.add_edge(2, 0, 3);
    graph.add_edge(2, 1, 4);
    graph.add_edge(2, 3, 2);
    graph.add_edge(2, 5, 9);
    graph.add_edge(2, 4, 9);

    let tree = Algorithm::Boruvka.solve(&graph);
    assert_eq!(metrics::total_weight(&tree), 23);
    assert_eq!(metrics::depth_path(&tree), "0->2->3->5->4");
}
