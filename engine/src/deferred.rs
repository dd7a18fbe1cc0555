//! Cancellable one-shot delayed completions.
//!
//! The simulated "loading" and "sending" phases are a timer each. A timer runs
//! as a tokio task wrapped in [`Abortable`] and reports through a oneshot
//! channel that the engine polls from `App::tick`. Replacing or dropping a
//! `DeferredTask` aborts it, so a superseded timer can never deliver.

use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPoll {
    Pending,
    Done,
    /// The timer task went away without firing.
    Cancelled,
}

#[derive(Debug)]
pub struct DeferredTask {
    abort_handle: AbortHandle,
    done: oneshot::Receiver<()>,
}

impl DeferredTask {
    /// Start a timer that completes after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(delay: Duration) -> Self {
        let (tx, done) = oneshot::channel();
        let (abort_handle, registration) = AbortHandle::new_pair();

        let timer = async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(());
        };
        tokio::spawn(Abortable::new(timer, registration));

        Self { abort_handle, done }
    }

    /// Non-blocking completion check.
    pub fn poll(&mut self) -> TaskPoll {
        match self.done.try_recv() {
            Ok(()) => TaskPoll::Done,
            Err(oneshot::error::TryRecvError::Empty) => TaskPoll::Pending,
            Err(oneshot::error::TryRecvError::Closed) => TaskPoll::Cancelled,
        }
    }

    pub fn cancel(self) {
        self.abort_handle.abort();
    }
}

impl Drop for DeferredTask {
    fn drop(&mut self) {
        self.abort_handle.abort();
    }
}
