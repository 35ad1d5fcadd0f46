//! Per-connection command loop.
//!
//! A session owns its graph and algorithm choice for the connection's
//! lifetime; nothing here is shared across sessions. Commands are read
//! one line at a time, so each session's effects are strictly
//! serialized. Every command becomes a one-step [`Pipeline`] whose step
//! writes the response; write failures are ignored because a dead peer
//! surfaces as EOF on the next read.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::TcpStream;

use tracing::debug;

use crate::graph::Graph;
use crate::mst::Algorithm;

use super::pipeline::Pipeline;
use super::protocol::{self, Command};

/// State owned by one connection.
#[derive(Debug, Default)]
struct SessionState {
    graph: Option<Graph>,
    algorithm: Algorithm,
}

/// Serves one accepted TCP connection until EOF or `shutdown`.
pub fn serve(stream: &TcpStream) -> io::Result<()> {
    let reader = stream.try_clone()?;
    let writer = stream.try_clone()?;
    run(reader, writer)
}

/// The session loop over any line-oriented transport.
///
/// Separated from [`serve`] so tests can drive it with in-memory
/// readers and writers.
pub fn run<R, W>(reader: R, mut writer: W) -> io::Result<()>
where
    R: Read,
    W: Write,
{
    writer.write_all(protocol::HELP_MENU.as_bytes())?;
    writer.flush()?;

    let mut state = SessionState::default();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // EOF: the peer closed or the server swept this socket.
            debug!("session reached EOF");
            break;
        }

        let request = line.trim_end_matches(['\n', '\r']);
        let mut quit = false;
        dispatch(request, &mut state, &mut writer, &mut quit);
        if quit {
            break;
        }
    }

    Ok(())
}

/// Builds and runs the one-step pipeline for a request line.
fn dispatch<W: Write>(request: &str, state: &mut SessionState, writer: &mut W, quit: &mut bool) {
    let mut pipeline = Pipeline::new();

    match protocol::parse_command(request) {
        Ok(Command::Create { n }) => pipeline.push(move || {
            state.graph = Some(Graph::new(n));
            send(writer, &protocol::graph_created(n));
        }),
        Ok(Command::Add { u, v, w }) => pipeline.push(move || {
            let Some(graph) = state.graph.as_mut() else {
                send(writer, &protocol::graph_missing());
                return;
            };
            graph.add_edge(u, v, w);
            send(writer, &protocol::edge_added(u, v, w));
        }),
        Ok(Command::Remove { u, v }) => pipeline.push(move || {
            let Some(graph) = state.graph.as_mut() else {
                send(writer, &protocol::graph_missing());
                return;
            };
            graph.remove_edge(u, v);
            send(writer, &protocol::edge_removed(u, v));
        }),
        Ok(Command::Algo { name }) => pipeline.push(move || {
            match Algorithm::from_str_loose(&name) {
                Some(algorithm) => {
                    state.algorithm = algorithm;
                    send(writer, &protocol::algorithm_set(algorithm));
                }
                None => send(writer, &protocol::unknown_algorithm(&name)),
            }
        }),
        Ok(Command::Display) => pipeline.push(|| {
            let Some(graph) = state.graph.as_ref() else {
                send(writer, &protocol::graph_missing());
                return;
            };
            // The tree is materialized fresh per display, so edits can
            // never serve a stale tree.
            let tree = state.algorithm.solve(graph);
            send(writer, &protocol::display_report(graph, &tree, state.algorithm));
        }),
        Ok(Command::Shutdown) => pipeline.push(|| {
            send(writer, &protocol::client_shutdown());
            *quit = true;
        }),
        Err(error) => pipeline.push(move || {
            send(writer, &error.response());
        }),
    }

    pipeline.run();
}

/// Writes one response, swallowing transport errors; a dead peer is
/// handled at the next read.
fn send<W: Write>(writer: &mut W, response: &str) {
    let _ = writer.write_all(response.as_bytes());
    let _ = writer.flush();
}
