//! Outbound ports for the Contact Gateway.
//!
//! A real deployment hands validated submissions to storage, a mail relay,
//! or a spam filter. None of those live in this crate; they implement
//! [`SubmissionSink`].

use crate::domain::{ContactSubmission, SinkError, SubmissionId};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Destination for accepted submissions
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Hand off one validated submission.
    ///
    /// Called at most once per accepted request, after validation. Returning
    /// an error turns the response into a generic 500.
    async fn deliver(
        &self,
        id: SubmissionId,
        submission: &ContactSubmission,
    ) -> Result<(), SinkError>;
}

/// Stand-in for the storage/notification pipeline: waits a fixed delay and
/// succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSink {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl SubmissionSink for SimulatedSink {
    async fn deliver(
        &self,
        id: SubmissionId,
        _submission: &ContactSubmission,
    ) -> Result<(), SinkError> {
        debug!(submission_id = %id, delay_ms = self.delay.as_millis() as u64, "Simulating hand-off");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
