//! Background task handles polled from the UI loop
//!
//! eframe calls `update` once per frame, so results of tokio tasks are picked
//! up by polling rather than awaiting. A `BackgroundTask` aborts its task when
//! dropped, which keeps a torn-down view from ever receiving a late result.

use futures::FutureExt;
use std::future::Future;
use tokio::task::JoinHandle;

/// Result of polling a task
pub enum PollResult<T> {
    /// Nothing was spawned (or the result was already taken)
    NoTask,
    /// Task is still running
    Pending,
    /// Task completed with result (may be Ok or join error)
    Complete(Result<T, tokio::task::JoinError>),
}

/// Owned handle to at most one running task
pub struct BackgroundTask<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T> Default for BackgroundTask<T> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<T: Send + 'static> BackgroundTask<T> {
    /// Spawn `future` on the tokio runtime, aborting any task already held
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        self.abort();
        self.handle = Some(tokio::spawn(future));
    }
}

impl<T> BackgroundTask<T> {
    /// Take the result if the task has finished.
    ///
    /// # Example
    /// ```ignore
    /// match self.task.poll() {
    ///     PollResult::Complete(Ok(value)) => { /* success */ }
    ///     PollResult::Complete(Err(e)) => { /* task panicked or was aborted */ }
    ///     PollResult::Pending => ctx.request_repaint(),
    ///     PollResult::NoTask => {}
    /// }
    /// ```
    pub fn poll(&mut self) -> PollResult<T> {
        let Some(handle) = self.handle.as_mut() else {
            return PollResult::NoTask;
        };

        if !handle.is_finished() {
            return PollResult::Pending;
        }

        match handle.now_or_never() {
            Some(result) => {
                self.handle = None;
                PollResult::Complete(result)
            }
            None => {
                // Shouldn't happen since we checked is_finished()
                tracing::warn!("Task not ready despite is_finished()");
                PollResult::Pending
            }
        }
    }

    /// Abort the running task, discarding its result
    pub fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for BackgroundTask<T> {
    fn drop(&mut self) {
        self.abort();
    }
}
