//! Per-command step pipeline.
//!
//! A pipeline is an ordered sequence of zero-argument unit-returning
//! steps, executed in insertion order. There is no branching, no
//! cancellation between steps, and no result propagation; steps
//! communicate through their side effects only. Each wire command maps
//! to one pipeline, which keeps the command workflows composable and
//! lets tests inject or intercept steps.

/// An ordered sequence of steps.
#[derive(Default)]
pub struct Pipeline<'a> {
    steps: Vec<Box<dyn FnOnce() + 'a>>,
}

impl<'a> Pipeline<'a> {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn push(&mut self, step: impl FnOnce() + 'a) {
        self.steps.push(Box::new(step));
    }

    /// Number of queued steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no step is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step in insertion order, consuming the pipeline.
    pub fn run(self) {
        for step in self.steps {
            step();
        }
    }
}
