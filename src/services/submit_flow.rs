use crate::db::{StoreError, RECENT_COMMENTS_LIMIT};
use crate::forms;
use crate::services::CommentStore;
use crate::views;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Submit lifecycle:
/// idle -> validating -> (invalid: idle) | submitting -> (success: idle, reload)
///                                       | (error: idle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmitState {
    Idle,
    Submitting,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    Busy,
    #[error("validation failed: {}", .0.join("; "))]
    Invalid(Vec<String>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub id: Uuid,
    /// Full replacement for the rendered list, re-read after the reload
    /// delay rather than patched optimistically.
    pub comments: Vec<views::comment::Public>,
}

/// Orchestrates the submit lifecycle over the store: validate, sanitize,
/// append, then re-read the recent window after a short fixed delay so the
/// write has become consistently readable.
pub struct SubmitFlow {
    store: Arc<dyn CommentStore>,
    busy: AtomicBool,
    reload_delay: Duration,
}

impl SubmitFlow {
    pub fn new(store: Arc<dyn CommentStore>, reload_delay: Duration) -> Self {
        Self {
            store,
            busy: AtomicBool::new(false),
            reload_delay,
        }
    }

    pub fn state(&self) -> SubmitState {
        if self.busy.load(Ordering::SeqCst) {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }

    pub async fn submit(
        &self,
        form: forms::CommentForm,
        user_agent: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        let report = form.validate();
        if !report.is_valid {
            return Err(SubmitError::Invalid(report.errors));
        }

        // The disabled submit control already rejects re-entrant submits in
        // the widget; this is the logic-layer guard behind it.
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SubmitError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        let comment = form.sanitize(user_agent);
        let id = self.store.append(comment).await?;
        tracing::info!("New comment {} has been saved to the store", id);

        tokio::time::sleep(self.reload_delay).await;

        let comments = self
            .store
            .list_recent(RECENT_COMMENTS_LIMIT)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(SubmitOutcome { id, comments })
    }
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
