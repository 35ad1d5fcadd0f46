//! Active-Object pool: a task queue decoupling submission from
//! execution across `N` worker threads.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;

use tracing::debug;

use super::{run_task, Task};

/// Default queue capacity; submissions beyond it are rejected rather
/// than blocking the accept loop.
const DEFAULT_CAPACITY: usize = 1024;

struct QueueState {
    tasks: VecDeque<Task>,
    running: bool,
}

struct Inner {
    state: Mutex<QueueState>,
    available: Condvar,
    capacity: usize,
}

/// A bounded FIFO task queue plus `N` workers created at construction.
///
/// Tasks are dequeued in FIFO order by whichever worker wakes first; no
/// fairness is guaranteed across workers. Shutdown cancels: workers exit
/// as soon as they observe the stopped flag, even with a nonempty queue.
pub struct ActiveObject {
    inner: Arc<Inner>,
    workers: Vec<JoinHandle<()>>,
}

impl std::fmt::Debug for ActiveObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveObject")
            .field("workers", &self.workers.len())
            .field("capacity", &self.inner.capacity)
            .finish()
    }
}

impl ActiveObject {
    /// Spawns `threads` workers over a queue with the default capacity.
    #[must_use]
    pub fn new(threads: usize) -> Self {
        Self::with_capacity(threads, DEFAULT_CAPACITY)
    }

    /// Spawns `threads` workers over a queue bounded at `capacity`.
    #[must_use]
    pub fn with_capacity(threads: usize, capacity: usize) -> Self {
        let inner = Arc::new(Inner {
            state: Mutex::new(QueueState {
                tasks: VecDeque::new(),
                running: true,
            }),
            available: Condvar::new(),
            capacity,
        });

        let workers = (0..threads)
            .map(|_| {
                let inner = Arc::clone(&inner);
                std::thread::spawn(move || worker_loop(&inner))
            })
            .collect();

        Self { inner, workers }
    }

    /// Submits a task without blocking.
    ///
    /// Returns `false` when the pool is stopped or the queue is full;
    /// the task is dropped in that case.
    pub fn enqueue(&self, task: impl FnOnce() + Send + 'static) -> bool {
        let mut state = self.inner.state.lock().unwrap();
        if !state.running || state.tasks.len() >= self.inner.capacity {
            return false;
        }
        state.tasks.push_back(Box::new(task));
        drop(state);
        self.inner.available.notify_one();
        true
    }

    /// Stops the pool: wakes every worker, joins them, and discards any
    /// tasks still queued.
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
                debug!(discarded, "active-object pool discarding queued tasks");
            }
        }
        self.inner.available.notify_all();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl Drop for ActiveObject {
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
                if let Some(task) = state.tasks.pop_front() {
                    break task;
                }
                state = inner.available.wait(state).unwrap();
            }
        };
        run_task(task);
    }
}
