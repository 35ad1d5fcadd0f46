//! Network front end: wire protocol, sessions, and the accept loop.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        net                                │
//! │                                                           │
//! │   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌───────┐  │
//! │   │  server  │──▶│ session  │──▶│ pipeline │──▶│ proto │  │
//! │   │ (accept) │   │  (loop)  │   │ (steps)  │   │ (fmt) │  │
//! │   └──────────┘   └──────────┘   └──────────┘   └───────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The protocol is line-oriented ASCII over TCP: one command per
//! newline-terminated line, responses as lines or newline-terminated
//! blocks. The server never sends binary data.

pub mod pipeline;
pub mod protocol;
pub mod server;
pub mod session;

pub use pipeline::Pipeline;
pub use protocol::{Command, ParseError};
pub use server::{ClientRegistry, Server};
