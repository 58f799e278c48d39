//! Fire-and-forget background tasks with a shutdown barrier.
//!
//! Request handlers hand off non-critical work (notification emails) to a
//! [`TaskGroup`]. Each task runs on its own tokio task; failures and panics
//! are caught at the task boundary and reported through the error log, never
//! propagated. The group tracks in-flight work with a shared counter so the
//! process can drain it during shutdown.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use tokio::sync::Notify;
use tracing::error;

/// Tracks spawned background tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskGroup {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    in_flight: AtomicUsize,
    drained: Notify,
}

impl TaskGroup {
    /// Creates an empty task group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks currently in flight.
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    /// Spawns a background task.
    ///
    /// An `Err` outcome or a panic inside the future is reported and
    /// swallowed; neither reaches the spawning request or the process.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sw_web::task::TaskGroup;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let tasks = TaskGroup::new();
    /// tasks.spawn(async { Ok::<(), std::io::Error>(()) });
    /// tasks.wait().await;
    /// # }
    /// ```
    pub fn spawn<F, E>(&self, future: F)
    where
        F: Future<Output = core::result::Result<(), E>> + Send + 'static,
        E: std::fmt::Display,
    {
        let inner = self.inner.clone();
        inner.in_flight.fetch_add(1, Ordering::AcqRel);

        tokio::spawn(async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => error!("Background task failed: {err}"),
                Err(panic) => error!("Background task panicked: {}", panic_message(&panic)),
            }

            if inner.in_flight.fetch_sub(1, Ordering::AcqRel) == 1 {
                inner.drained.notify_waiters();
            }
        });
    }

    /// Suspends until every spawned task has finished.
    ///
    /// Called once during shutdown, after the HTTP server has stopped
    /// accepting requests.
    pub async fn wait(&self) {
        loop {
            let drained = self.inner.drained.notified();
            if self.in_flight() == 0 {
                return;
            }
            drained.await;
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
