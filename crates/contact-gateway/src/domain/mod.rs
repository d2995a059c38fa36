//! Domain types for the Contact Gateway.
//!
//! Submission validation, error taxonomy, configuration, and correlation ids.
//! Nothing here performs I/O.

pub mod config;
pub mod correlation;
pub mod error;
pub mod submission;

// Re-exports for convenience
pub use config::{ConfigError, CorsConfig, GatewayConfig, HttpConfig, LimitsConfig, ProcessingConfig};
pub use correlation::{RequestId, SubmissionId};
pub use error::{ContactError, ContactResponse, ContactResult, GatewayError, SinkError};
pub use submission::{ContactRequest, ContactSubmission, EmailAddress, ValidationError};
