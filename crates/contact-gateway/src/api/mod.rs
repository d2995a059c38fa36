//! HTTP handlers.

pub mod contact;
pub mod health;

pub use contact::{accept_submission, submit_contact};
pub use health::{health_check, metrics_snapshot};

use crate::middleware::ContactMetrics;
use crate::ports::SubmissionSink;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn SubmissionSink>,
    pub metrics: Arc<ContactMetrics>,
}
