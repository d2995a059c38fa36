//! Submission counters, exported as JSON on `/metrics`.

use crate::domain::{ContactError, ValidationError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Contact Gateway metrics
#[derive(Default)]
pub struct ContactMetrics {
    // Outcome counters
    pub requests_total: AtomicU64,
    pub accepted: AtomicU64,
    pub rejected_missing_fields: AtomicU64,
    pub rejected_invalid_email: AtomicU64,
    pub rejected_malformed: AtomicU64,
    pub internal_errors: AtomicU64,

    // Latency tracking (simplified - in production use histograms)
    pub total_latency_ms: AtomicU64,
}

impl ContactMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished `/api/contact` request
    pub fn record(&self, outcome: Option<&ContactError>, latency_ms: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        let counter = match outcome {
            None => &self.accepted,
            Some(ContactError::Validation(ValidationError::MissingFields)) => {
                &self.rejected_missing_fields
            }
            Some(ContactError::Validation(ValidationError::InvalidEmail)) => {
                &self.rejected_invalid_email
            }
            Some(ContactError::MalformedBody(_)) => &self.rejected_malformed,
            Some(ContactError::Internal(_)) => &self.internal_errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        self.total_latency_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
    }

    /// Total client-caused rejections
    pub fn rejected(&self) -> u64 {
        self.rejected_missing_fields.load(Ordering::Relaxed)
            + self.rejected_invalid_email.load(Ordering::Relaxed)
            + self.rejected_malformed.load(Ordering::Relaxed)
    }

    /// Get average latency in ms
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        let count = self.requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Export metrics as JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "requests": {
                "total": self.requests_total.load(Ordering::Relaxed),
                "accepted": self.accepted.load(Ordering::Relaxed),
                "internal_errors": self.internal_errors.load(Ordering::Relaxed),
            },
            "rejected": {
                "total": self.rejected(),
                "missing_fields": self.rejected_missing_fields.load(Ordering::Relaxed),
                "invalid_email": self.rejected_invalid_email.load(Ordering::Relaxed),
                "malformed_body": self.rejected_malformed.load(Ordering::Relaxed),
            },
            "latency": {
                "average_ms": self.average_latency_ms(),
            }
        })
    }
}

/// Request timing helper.
///
/// A timer dropped without [`finish`](Self::finish) (the handler panicked or
/// was cancelled) is recorded as an internal error.
pub struct RequestTimer {
    start: Instant,
    metrics: Arc<ContactMetrics>,
    finished: bool,
}

impl RequestTimer {
    pub fn new(metrics: Arc<ContactMetrics>) -> Self {
        Self {
            start: Instant::now(),
            metrics,
            finished: false,
        }
    }

    pub fn finish(mut self, outcome: Option<&ContactError>) {
        self.finished = true;
        self.record(outcome);
    }

    fn record(&self, outcome: Option<&ContactError>) {
        let latency_ms = self.start.elapsed().as_millis() as u64;
        self.metrics.record(outcome, latency_ms);
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        if !self.finished {
            self.record(Some(&ContactError::Internal("request abandoned".into())));
        }
    }
}
