//! Per-call cancellation and deadline propagation.
//!
//! Every querier operation takes a [`QueryContext`]. The context wraps the
//! store future: when the context is cancelled or its deadline passes, the
//! in-flight future is dropped (which aborts the statement on the driver side)
//! and the call fails with [`MedideskError::Cancelled`].

use crate::{MedideskError, MedideskResult};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Cancellation and deadline carrier passed to every query.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Handle that cancels every context cloned from the one it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancels the associated contexts. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl QueryContext {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Creates a cancellable context together with its cancel handle.
    #[must_use]
    pub fn cancellable() -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        let ctx = Self {
            deadline: None,
            cancel: Some(receiver),
        };
        (ctx, CancelHandle { sender })
    }

    /// Returns a context whose deadline is `timeout` from now, or the
    /// existing deadline if that one is earlier.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a context with the given deadline, keeping an earlier one.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true if the context has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Fails fast when the context is already cancelled or expired.
    pub fn check(&self) -> MedideskResult<()> {
        if self.is_cancelled() {
            return Err(MedideskError::cancelled("context cancelled"));
        }
        if self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            return Err(MedideskError::cancelled("deadline exceeded"));
        }
        Ok(())
    }

    /// Runs `operation` under this context.
    ///
    /// The operation is not polled at all if the context is already done.
    pub async fn run<T, F>(&self, operation: F) -> MedideskResult<T>
    where
        F: Future<Output = MedideskResult<T>>,
    {
        self.check()?;

        tokio::select! {
            biased;
            () = wait_for_cancel(self.cancel.clone()) => {
                Err(MedideskError::cancelled("context cancelled"))
            }
            () = wait_for_deadline(self.deadline) => {
                Err(MedideskError::cancelled("deadline exceeded"))
            }
            result = operation => result,
        }
    }
}

async fn wait_for_cancel(receiver: Option<watch::Receiver<bool>>) {
    let Some(mut receiver) = receiver else {
        return std::future::pending().await;
    };
    loop {
        if *receiver.borrow_and_update() {
            return;
        }
        // A dropped handle can never cancel.
        if receiver.changed().await.is_err() {
            return std::future::pending().await;
        }
    }
}

async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
