//! Delayed submission completion, run as a cancellable task

use crate::state::{FieldValues, VariantKind};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Message sent when a deferred submission's delay elapses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Index of the panel that submitted
    pub panel: usize,
    pub variant: VariantKind,
    /// Mount generation at the time of submit
    pub generation: u64,
    pub values: FieldValues,
}

/// Handle to a pending completion. Dropping it cancels the task.
#[derive(Debug)]
pub struct DelayedSubmission {
    handle: JoinHandle<()>,
}

impl DelayedSubmission {
    /// Spawn a task that sends `completion` on `tx` after `delay`.
    /// Must be called from within a tokio runtime.
    pub fn spawn(delay: Duration, completion: Completion, tx: UnboundedSender<Completion>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(completion).is_err() {
                tracing::debug!("completion receiver dropped before delivery");
            }
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[allow(dead_code)]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DelayedSubmission {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
