//! Wire protocol: command parsing and response formatting.
//!
//! The protocol is line-oriented ASCII. A request is one line of
//! whitespace-separated tokens; every response is one line or a
//! newline-terminated multi-line block. The exact response surfaces are
//! load-bearing: clients and the integration tests match them verbatim.

use std::fmt::Write as _;

use crate::graph::{Graph, Weight};
use crate::metrics;
use crate::mst::Algorithm;

/// Help menu sent once per connection, immediately after accept.
pub const HELP_MENU: &str = "\
------------------------ COMMAND MENU --------------------------------------------
Create a new graph:
   - Syntax: 'create <number_of_vertices>'
   - Example: 'create 5' to create a graph with 5 vertices.
Add an edge:
   - Syntax: 'add <u> <v> <w>'
   - Example: 'add 1 2 10' to add an edge between vertices 1 and 2 with weight 10.
Remove an edge:
   - Syntax: 'remove <u> <v>'
   - Example: 'remove 1 2' to remove the edge between vertices 1 and 2.
Choose MST Algorithm:
   - Syntax: 'algo <algorithm_name>'
   - Available: prim, kruskal, boruvka, tarjan, integer_mst
Display MST and Analysis:
   - Syntax: 'display'
   - Shows the Graph, MST of the Graph and an analysis summary.
Shutdown:
   - Syntax: 'shutdown'
   - Closes the connection with the server.
----------------------------------------------------------------------------------
";

/// A parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create <n>`: replace the session graph.
    Create {
        /// Number of vertices.
        n: usize,
    },
    /// `add <u> <v> <w>`: add an undirected edge.
    Add {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
        /// Edge weight.
        w: Weight,
    },
    /// `remove <u> <v>`: remove one undirected edge.
    Remove {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
    },
    /// `algo <name>`: select the MST algorithm. The raw token is kept
    /// so the error line can echo it.
    Algo {
        /// Algorithm name as received.
        name: String,
    },
    /// `display`: solve and report.
    Display,
    /// `shutdown`: end this session.
    Shutdown,
}

/// A request line the session answers with a single error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// First token is not a known command.
    UnknownCommand,
    /// Known command with missing or malformed arguments.
    Usage(&'static str),
}

impl ParseError {
    /// The single response line for this error (newline-terminated).
    #[must_use]
    pub fn response(&self) -> String {
        match self {
            Self::UnknownCommand => "Unknown command.\n".to_string(),
            Self::Usage(usage) => format!("Usage: {usage}\n"),
        }
    }
}

fn arg<T: std::str::FromStr>(
    tokens: &mut std::str::SplitWhitespace<'_>,
    usage: &'static str,
) -> Result<T, ParseError> {
    tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(ParseError::Usage(usage))
}

/// Parses one request line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().ok_or(ParseError::UnknownCommand)?;

    match command {
        "create" => {
            let n = arg(&mut tokens, "create <n>")?;
            Ok(Command::Create { n })
        }
        "add" => {
            const USAGE: &str = "add <u> <v> <w>";
            let u = arg(&mut tokens, USAGE)?;
            let v = arg(&mut tokens, USAGE)?;
            let w: Weight = arg(&mut tokens, USAGE)?;
            if w < 0 {
                return Err(ParseError::Usage(USAGE));
            }
            Ok(Command::Add { u, v, w })
        }
        "remove" => {
            const USAGE: &str = "remove <u> <v>";
            let u = arg(&mut tokens, USAGE)?;
            let v = arg(&mut tokens, USAGE)?;
            Ok(Command::Remove { u, v })
        }
        "algo" => {
            let name = tokens
                .next()
                .ok_or(ParseError::Usage("algo <algorithm_name>"))?;
            Ok(Command::Algo {
                name: name.to_string(),
            })
        }
        "display" => Ok(Command::Display),
        "shutdown" => Ok(Command::Shutdown),
        _ => Err(ParseError::UnknownCommand),
    }
}

// ---------------------------------------------------------------------
// Response surfaces
// ---------------------------------------------------------------------

/// Ack for `create`.
#[must_use]
pub fn graph_created(n: usize) -> String {
    format!("Graph created with {n} vertices.\n")
}

/// Ack for `add`.
#[must_use]
pub fn edge_added(u: usize, v: usize, w: Weight) -> String {
    format!("Edge added: ({u}, {v}) with weight {w}\n")
}

/// Ack for `remove`.
#[must_use]
pub fn edge_removed(u: usize, v: usize) -> String {
    format!("Edge removed: ({u}, {v})\n")
}

/// Ack for a valid `algo`.
#[must_use]
pub fn algorithm_set(algorithm: Algorithm) -> String {
    format!("Algorithm set to {algorithm}.\n")
}

/// Error line for an unknown algorithm name.
#[must_use]
pub fn unknown_algorithm(name: &str) -> String {
    format!(
        "Error: Unknown algorithm '{name}'. \
         Available options: prim, kruskal, boruvka, tarjan, integer_mst.\n"
    )
}

/// Precondition error for commands that need a graph.
#[must_use]
pub fn graph_missing() -> String {
    "Graph not created. Use 'create' first.\n".to_string()
}

/// Ack for `shutdown`, sent before the socket closes.
#[must_use]
pub fn client_shutdown() -> String {
    "Shutting down client.\n".to_string()
}

/// Renders an edge the way the analysis block reports extremes.
fn render_edge(edge: Option<metrics::Edge>) -> String {
    match edge {
        Some((u, v, w)) => format!("Vertex {u} <----({w})----> Vertex {v}"),
        None => "(none)".to_string(),
    }
}

/// The full `display` response: graph block, MST block (or the
/// disconnected notice), and the analysis block.
#[must_use]
pub fn display_report(graph: &Graph, tree: &Graph, algorithm: Algorithm) -> String {
    let mut out = graph.display();

    if tree.num_vertices() == 0 && graph.num_vertices() != 0 {
        out.push_str("No spanning tree exists: the graph is disconnected.\n");
    } else {
        out.push_str(&tree.display_mst());
    }

    let _ = write!(
        out,
        "------------------MST Analysis-------------------------\n\
         Algorithm: {algorithm}\n\
         Total MST weight: {weight}\n\
         Longest path: {longest}\n\
         {heaviest_path}\n\
         Average distance: {average:.6}\n\
         Heaviest edge: {heaviest_edge}\n\
         Lightest edge: {lightest_edge}\n\
         -------------------------------------------------------\n",
        weight = metrics::total_weight(tree),
        longest = metrics::depth_path(tree),
        heaviest_path = heaviest_path_line(tree),
        average = metrics::average_distance(tree),
        heaviest_edge = render_edge(metrics::heaviest_edge(tree)),
        lightest_edge = render_edge(metrics::lightest_edge(tree)),
    );
    out
}

/// `metrics::heaviest_path` already carries its `Heaviest path:` label
/// for a real tree; the sentinel needs the label prepended.
fn heaviest_path_line(tree: &Graph) -> String {
    let rendered = metrics::heaviest_path(tree);
    if rendered.starts_with("Heaviest path:") {
        rendered
    } else {
        format!("Heaviest path: {rendered}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_create() {
        assert_eq!(parse_command("create 5"), Ok(Command::Create { n: 5 }));
    }

    #[test]
    fn parse_add() {
        assert_eq!(
            parse_command("add 1 2 10"),
            Ok(Command::Add { u: 1, v: 2, w: 10 })
        );
    }

    #[test]
    fn parse_remove() {
        assert_eq!(parse_command("remove 1 2"), Ok(Command::Remove { u: 1, v: 2 }));
    }

    #[test]
    fn parse_algo_keeps_raw_token() {
        assert_eq!(
            parse_command("algo KrUsKal"),
            Ok(Command::Algo {
                name: "KrUsKal".to_string()
            })
        );
    }

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("display"), Ok(Command::Display));
        assert_eq!(parse_command("shutdown"), Ok(Command::Shutdown));
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        assert_eq!(
            parse_command("  add  0   1  7 "),
            Ok(Command::Add { u: 0, v: 1, w: 7 })
        );
    }

    #[test]
    fn unknown_command_token() {
        assert_eq!(parse_command("frobnicate"), Err(ParseError::UnknownCommand));
        assert_eq!(parse_command(""), Err(ParseError::UnknownCommand));
        assert_eq!(
            parse_command("frobnicate").unwrap_err().response(),
            "Unknown command.\n"
        );
    }

    #[test]
    fn missing_arguments_report_usage() {
        assert_eq!(
            parse_command("create"),
            Err(ParseError::Usage("create <n>"))
        );
        assert_eq!(
            parse_command("add 1 2"),
            Err(ParseError::Usage("add <u> <v> <w>"))
        );
        assert_eq!(
            parse_command("add 1 2 -3"),
            Err(ParseError::Usage("add <u> <v> <w>"))
        );
        assert_eq!(
            parse_command("add one two three"),
            Err(ParseError::Usage("add <u> <v> <w>"))
        );
        assert_eq!(
            parse_command("create").unwrap_err().response(),
            "Usage: create <n>\n"
        );
    }

    #[test]
    fn ack_surfaces() {
        assert_eq!(graph_created(5), "Graph created with 5 vertices.\n");
        assert_eq!(edge_added(1, 2, 10), "Edge added: (1, 2) with weight 10\n");
        assert_eq!(edge_removed(1, 2), "Edge removed: (1, 2)\n");
        assert_eq!(
            algorithm_set(Algorithm::Kruskal),
            "Algorithm set to kruskal.\n"
        );
        assert_eq!(
            unknown_algorithm("foo"),
            "Error: Unknown algorithm 'foo'. \
             Available options: prim, kruskal, boruvka, tarjan, integer_mst.\n"
        );
        assert_eq!(graph_missing(), "Graph not created. Use 'create' first.\n");
        assert_eq!(client_shutdown(), "Shutting down client.\n");
    }

    #[test]
    fn help_menu_frame() {
        assert!(HELP_MENU.starts_with("------------------------ COMMAND MENU ---"));
        assert!(HELP_MENU.ends_with("-\n"));
    }

    #[test]
    fn display_report_for_the_triangle() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 2);
        graph.add_edge(1, 2, 3);
        graph.add_edge(0, 2, 10);
        let tree = Algorithm::Kruskal.solve(&graph);

        let report = display_report(&graph, &tree, Algorithm::Kruskal);
        assert!(report.contains("Algorithm: kruskal\n"));
        assert!(report.contains("Total MST weight: 5\n"));
        assert!(report.contains("Longest path: 0->1->2\n"));
        assert!(report.contains("Average distance: 3.333333\n"));
        assert!(report.contains("Heaviest edge: Vertex 1 <----(3)----> Vertex 2\n"));
        assert!(report.contains("Lightest edge: Vertex 0 <----(2)----> Vertex 1\n"));
    }

    #[test]
    fn display_report_surfaces_disconnection() {
        let mut graph = Graph::new(6);
        graph.add_edge(0, 1, 6);
        graph.add_edge(2, 3, 2);
        graph.add_edge(4, 5, 8);
        let tree = Algorithm::Prim.solve(&graph);

        let report = display_report(&graph, &tree, Algorithm::Prim);
        assert!(report.contains("No spanning tree exists: the graph is disconnected.\n"));
        assert!(report.contains("Total MST weight: 0\n"));
        assert!(report.contains("Heaviest path: Empty graph\n"));
        assert!(report.contains("Heaviest edge: (none)\n"));
    }
}
