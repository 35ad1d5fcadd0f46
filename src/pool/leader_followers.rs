//! Leader/Followers pool.
//!
//! `N` workers share one task queue and one leader token. At most one
//! thread holds the token at any instant: the leader dequeues a task,
//! leaves the critical section, runs the task to completion, then hands
//! the token to a follower. The token is held through the task body, so
//! execution stays exclusive; followers block on the condvar until the
//! handoff.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;

use tracing::{debug, trace};

use super::{run_task, Task};

struct QueueState {
    tasks: VecDeque<Task>,
    running: bool,
}

struct Inner {
    state: Mutex<QueueState>,
    wakeup: Condvar,
    leader: AtomicBool,
}

/// Releases the leader token when the leader's task returns, however it
/// returns. The queue mutex is reacquired for the handoff so a follower
/// cannot miss the wakeup between its failed claim and its wait.
struct LeaderGuard<'a> {
    inner: &'a Inner,
}

impl Drop for LeaderGuard<'_> {
    fn drop(&mut self) {
        let state = self.inner.state.lock().unwrap();
        self.inner.leader.store(false, Ordering::Release);
        drop(state);
        self.inner.wakeup.notify_one();
    }
}

/// A Leader/Followers worker pool.
pub struct LeaderFollowers {
    inner: Arc<Inner>,
    workers: Vec<JoinHandle<()>>,
}

impl std::fmt::Debug for LeaderFollowers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderFollowers")
            .field("workers", &self.workers.len())
            .finish()
    }
}

impl LeaderFollowers {
    /// Spawns `threads` workers contending for the leader token.
    #[must_use]
    pub fn new(threads: usize) -> Self {
        let inner = Arc::new(Inner {
            state: Mutex::new(QueueState {
                tasks: VecDeque::new(),
                running: true,
            }),
            wakeup: Condvar::new(),
            leader: AtomicBool::new(false),
        });

        let workers = (0..threads)
            .map(|_| {
                let inner = Arc::clone(&inner);
                std::thread::spawn(move || worker_loop(&inner))
            })
            .collect();

        Self { inner, workers }
    }

    /// Submits a task; returns `false` once the pool is stopping.
    pub fn enqueue(&self, task: impl FnOnce() + Send + 'static) -> bool {
        let mut state = self.inner.state.lock().unwrap();
        if !state.running {
            return false;
        }
        state.tasks.push_back(Box::new(task));
        drop(state);
        self.inner.wakeup.notify_one();
        true
    }

    /// Stops the pool: discards pending tasks, wakes every worker, and
    /// joins them.
    pub fn shutdown(&mut self) {
        {
            let mut state = self.inner.state.lock().unwrap();
            if !state.running {
                return;
            }
            state.running = false;
            let discarded = state.tasks.len();
            state.tasks.clear();
            if discarded > 0 {
                debug!(discarded, "leader/followers pool discarding queued tasks");
            }
        }
        self.inner.wakeup.notify_all();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl Drop for LeaderFollowers {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(inner: &Inner) {
    loop {
        let task = {
            let mut state = inner.state.lock().unwrap();
            loop {
                if !state.running {
                    return;
                }
                if !state.tasks.is_empty()
                    && inner
                        .leader
                        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                        .is_ok()
                {
                    trace!("worker promoted to leader");
                    break state.tasks.pop_front();
                }
                // Follower: either the queue is empty or another thread
                // leads; wait for a submit or a handoff.
                state = inner.wakeup.wait(state).unwrap();
            }
        };

        // Queue mutex is released; the guard returns the token after the
        // task body finishes, panics included.
        let _guard = LeaderGuard { inner };
        if let Some(task) = task {
            run_task(task);
        }
    }
}
