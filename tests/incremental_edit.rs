//! Incremental editor semantics over the reference trees.
//!
//! `add` replaces the tree only on a strict improvement. `remove` under
//! the default policy almost never replaces: dropping a tree edge either
//! disconnects the virtual graph or forces a heavier rebuild. The
//! `Rebuild` policy is exercised separately.

use mst_analyzer::graph::Graph;
use mst_analyzer::mst::{Algorithm, MstEditor, RemovePolicy};

fn three_tree() -> Graph {
    let mut tree = Graph::new(3);
    tree.add_edge(0, 1, 2);
    tree.add_edge(1, 2, 3);
    tree
}

fn five_tree() -> Graph {
    let mut tree = Graph::new(5);
    tree.add_edge(0, 1, 2);
    tree.add_edge(1, 2, 3);
    tree.add_edge(0, 3, 6);
    tree.add_edge(1, 4, 5);
    tree
}

fn six_tree() -> Graph {
    let mut tree = Graph::new(6);
    tree.add_edge(3, 1, 2);
    tree.add_edge(3, 2, 2);
    tree.add_edge(3, 5, 8);
    tree.add_edge(5, 4, 8);
    tree.add_edge(2, 0, 3);
    tree
}

// =============================================================================
// Three-vertex scenarios
// =============================================================================

#[test]
fn improving_add_replaces_the_tree() {
    let mut editor = MstEditor::new(three_tree());
    assert!(editor.add(0, 2, 1));

    let mut expected = Graph::new(3);
    expected.add_edge(0, 1, 2);
    expected.add_edge(0, 2, 1);
    assert!(editor.tree().equal_to(&expected));
}

#[test]
fn non_improving_add_is_refused() {
    let mut editor = MstEditor::new(three_tree());
    assert!(editor.add(0, 2, 1));
    assert!(!editor.add(0, 2, 4));
    assert_eq!(editor.tree().total_weight(), 3);
}

#[test]
fn strict_remove_refuses_a_bridge() {
    let mut editor = MstEditor::new(three_tree());
    assert!(editor.add(0, 2, 1));
    // Removing either remaining edge would disconnect the virtual graph.
    assert!(!editor.remove(0, 1));
    assert!(!editor.remove(1, 2));
    assert_eq!(editor.tree().total_weight(), 3);
}

// =============================================================================
// Five-vertex scenarios
// =============================================================================

#[test]
fn five_vertex_add_and_remove_sequence() {
    let mut editor = MstEditor::new(five_tree());

    // (3, 4, 4) undercuts the weight-5 edge 1-4: 16 → 14.
    assert!(editor.add(3, 4, 4));
    assert_eq!(editor.tree().total_weight(), 14);

    // (2, 3, 7) cannot beat any existing edge.
    assert!(!editor.add(2, 3, 7));
    assert_eq!(editor.tree().total_weight(), 14);

    // Tree-edge removal disconnects; absent-edge removal no-ops.
    assert!(!editor.remove(1, 2));
    assert!(!editor.remove(0, 3));
    assert_eq!(editor.tree().total_weight(), 14);
}

// =============================================================================
// Six-vertex scenarios
// =============================================================================

#[test]
fn six_vertex_add_and_remove_sequence() {
    let mut editor = MstEditor::new(six_tree());

    // (1, 4, 6) replaces the weight-8 edge 5-4: 23 → 21.
    assert!(editor.add(1, 4, 6));
    assert_eq!(editor.tree().total_weight(), 21);

    let mut expected = Graph::new(6);
    expected.add_edge(3, 1, 2);
    expected.add_edge(3, 2, 2);
    expected.add_edge(3, 5, 8);
    expected.add_edge(1, 4, 6);
    expected.add_edge(2, 0, 3);
    assert!(editor.tree().equal_to(&expected));

    // (2, 5, 10) is heavier than everything it could displace.
    assert!(!editor.add(2, 5, 10));

    // Both removals fail: 3-2 is a bridge, 5-4 left the tree above.
    assert!(!editor.remove(3, 2));
    assert!(!editor.remove(5, 4));
    assert_eq!(editor.tree().total_weight(), 21);
}

// =============================================================================
// Guard rails
// =============================================================================

#[test]
fn out_of_range_endpoints_are_refused_without_side_effects() {
    let mut editor = MstEditor::new(three_tree());
    assert!(!editor.add(0, 3, 1));
    assert!(!editor.add(9, 0, 1));
    assert!(!editor.remove(0, 9));
    assert_eq!(editor.tree().total_weight(), 5);
}

#[test]
fn from_graph_solves_before_editing() {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 1, 2);
    graph.add_edge(1, 2, 3);
    graph.add_edge(0, 2, 10);

    let editor = MstEditor::from_graph(&graph, Algorithm::Prim);
    assert_eq!(editor.tree().total_weight(), 5);

    let tree = editor.into_tree();
    assert_eq!(tree.num_vertices(), 3);
    assert_eq!(tree.edges().len(), 2);
}

// =============================================================================
// Rebuild policy
// =============================================================================

#[test]
fn rebuild_remove_still_refuses_a_disconnecting_edge() {
    let mut editor = MstEditor::with_policy(three_tree(), RemovePolicy::Rebuild);
    assert!(!editor.remove(0, 1));
    assert_eq!(editor.tree().total_weight(), 5);
}

#[test]
fn rebuild_remove_adopts_a_heavier_surviving_tree() {
    // A non-tree input: the cycle keeps connectivity after the removal,
    // so the rebuild adopts the heavier alternative that strict mode
    // would have refused.
    let mut cycle = Graph::new(3);
    cycle.add_edge(0, 1, 2);
    cycle.add_edge(1, 2, 3);
    cycle.add_edge(0, 2, 10);

    let mut editor = MstEditor::with_policy(cycle, RemovePolicy::Rebuild);
    assert!(editor.remove(0, 1));
    assert_eq!(editor.tree().total_weight(), 13);

    let mut strict = Graph::new(3);
    strict.add_edge(0, 1, 2);
    strict.add_edge(1, 2, 3);
    strict.add_edge(0, 2, 10);
    let mut strict_editor = MstEditor::with_policy(strict, RemovePolicy::StrictImprovement);
    assert!(!strict_editor.remove(0, 1));
}

#[test]
fn policy_parsing_round_trips() {
    assert_eq!(
        RemovePolicy::from_str_loose("strict"),
        Some(RemovePolicy::StrictImprovement)
    );
    assert_eq!(
        RemovePolicy::from_str_loose("Rebuild"),
        Some(RemovePolicy::Rebuild)
    );
    assert_eq!(RemovePolicy::from_str_loose("sometimes"), None);
    assert_eq!(RemovePolicy::default(), RemovePolicy::StrictImprovement);
}
