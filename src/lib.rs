//! mst-analyzer: TCP server for minimum-spanning-tree analysis.
//!
//! Clients connect over TCP and issue line-oriented commands to build an
//! undirected weighted graph, pick an MST algorithm, and request the MST
//! together with a set of derived metrics.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Server                              │
//! │                                                              │
//! │   ┌──────────┐    ┌───────────────┐    ┌─────────────────┐   │
//! │   │  Accept  │───▶│  Thread pool  │───▶│ Session handler │   │
//! │   │   loop   │    │  (LF or AO)   │    │ (command loop)  │   │
//! │   └──────────┘    └───────────────┘    └─────────────────┘   │
//! │                                               │              │
//! │                              ┌────────────────┼───────────┐  │
//! │                              ▼                ▼           ▼  │
//! │                         ┌────────┐      ┌─────────┐ ┌───────┐│
//! │                         │ Graph  │─────▶│ Solvers │ │Metrics││
//! │                         └────────┘      └─────────┘ └───────┘│
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each session owns its graph; the only cross-thread state is the pool
//! queue and the registry of open client sockets.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`graph`] — Undirected weighted adjacency-list graph
//! - [`mst`] — The five MST solvers and the incremental editor
//! - [`metrics`] — Derived queries over a spanning tree
//! - [`pool`] — Active-Object and Leader/Followers thread pools
//! - [`net`] — Wire protocol, sessions, and the accept loop

pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod mst;
pub mod net;
pub mod pool;
