//! Accept loop, client registry, and server lifecycle.
//!
//! One listener thread accepts connections and submits a whole-session
//! task per connection into the configured pool. Accepted sockets are
//! tracked in a mutex-guarded registry so shutdown can sweep them
//! closed, which turns every in-flight blocking `read` into EOF and
//! lets the pool workers drain out.
//!
//! The listener polls a nonblocking `accept` against the running flag;
//! `std::net` offers no portable way to interrupt a blocking `accept`
//! from another thread.

use std::io;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::error::ServerError;
use crate::pool::{PoolMode, TaskPool};

use super::session;

/// How long the listener sleeps between accept polls.
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Server-wide set of open client sockets, for the shutdown sweep.
///
/// Mutation points: insert on accept, erase on session exit.
#[derive(Clone, Default)]
pub struct ClientRegistry {
    clients: Arc<Mutex<Vec<(u64, TcpStream)>>>,
    next_id: Arc<AtomicU64>,
}

impl ClientRegistry {
    /// Tracks a clone of `stream`; returns the registration id.
    ///
    /// A failed clone leaves the session untracked (it still runs, but
    /// only the peer can end it).
    pub fn register(&self, stream: &TcpStream) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        match stream.try_clone() {
            Ok(clone) => self.clients.lock().unwrap().push((id, clone)),
            Err(e) => warn!(error = %e, "could not track client socket for shutdown"),
        }
        id
    }

    /// Drops the registration `id`.
    pub fn unregister(&self, id: u64) {
        self.clients.lock().unwrap().retain(|&(cid, _)| cid != id);
    }

    /// Number of tracked clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.lock().unwrap().len()
    }

    /// True when no client is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shuts down every tracked socket and clears the registry.
    pub fn close_all(&self) {
        let mut clients = self.clients.lock().unwrap();
        for (id, stream) in clients.drain(..) {
            debug!(client = id, "closing client socket");
            let _ = stream.shutdown(Shutdown::Both);
        }
    }
}

/// A running MST analysis server.
///
/// Dropping the server stops it.
pub struct Server {
    local_addr: SocketAddr,
    running: Arc<AtomicBool>,
    registry: ClientRegistry,
    listener_handle: Option<JoinHandle<()>>,
}

impl Server {
    /// Binds `addr` and starts the listener thread over a fresh pool.
    ///
    /// # Errors
    ///
    /// Returns a [`ServerError`] when the socket cannot be bound or
    /// queried; this is the process's only fatal path.
    pub fn start(addr: SocketAddr, mode: PoolMode, threads: usize) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr).map_err(|e| ServerError::Bind {
            addr,
            source: e,
        })?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| ServerError::LocalAddr { source: e })?;
        listener
            .set_nonblocking(true)
            .map_err(|e| ServerError::Configure { source: e })?;

        let running = Arc::new(AtomicBool::new(true));
        let registry = ClientRegistry::default();
        let pool = TaskPool::new(mode, threads);

        info!(%local_addr, %mode, threads, "server listening");

        let listener_handle = {
            let running = Arc::clone(&running);
            let registry = registry.clone();
            Some(std::thread::spawn(move || {
                accept_loop(&listener, pool, &running, &registry);
            }))
        };

        Ok(Self {
            local_addr,
            running,
            registry,
            listener_handle,
        })
    }

    /// The bound address (resolves port 0 to the ephemeral port).
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// True until [`Server::stop`] runs.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stops the server: clears the running flag, sweeps every client
    /// socket closed, and joins the listener (which shuts the pool
    /// down). Idempotent.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }
        info!("server stopping");
        self.registry.close_all();
        if let Some(handle) = self.listener_handle.take() {
            let _ = handle.join();
        }
        info!("server stopped");
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.stop();
    }
}

fn accept_loop(
    listener: &TcpListener,
    mut pool: TaskPool,
    running: &AtomicBool,
    registry: &ClientRegistry,
) {
    while running.load(Ordering::SeqCst) {
        match listener.accept() {
            Ok((stream, peer)) => {
                info!(%peer, "client connected");
                if let Err(e) = stream.set_nonblocking(false) {
                    warn!(%peer, error = %e, "could not configure client socket");
                    continue;
                }

                // Register before submission so a shutdown sweep can
                // reach sessions still waiting in the pool queue.
                let id = registry.register(&stream);
                let session_registry = registry.clone();
                let accepted = pool.submit(move || {
                    if let Err(e) = session::serve(&stream) {
                        debug!(%peer, error = %e, "session ended with transport error");
                    }
                    let _ = stream.shutdown(Shutdown::Both);
                    session_registry.unregister(id);
                    info!(%peer, "client disconnected");
                });

                if !accepted {
                    warn!(%peer, "connection refused: pool is not accepting tasks");
                    registry.unregister(id);
                }
            }
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {
                std::thread::sleep(ACCEPT_POLL_INTERVAL);
            }
            Err(e) => {
                if running.load(Ordering::SeqCst) {
                    error!(error = %e, "accept failed");
                }
                break;
            }
        }
    }

    pool.shutdown();
    debug!("accept loop exited");
}
