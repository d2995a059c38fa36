//! Contact Gateway - HTTP endpoint for portfolio contact-form submissions.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                   CONTACT GATEWAY                     │
//! ├───────────────────────────────────────────────────────┤
//! │   POST /api/contact    GET /health    GET /metrics    │
//! │            │                                          │
//! │  ┌─────────┴──────────────────────────────────┐       │
//! │  │ Middleware: CORS → CatchPanic → Tracing    │       │
//! │  └─────────┬──────────────────────────────────┘       │
//! │            │                                          │
//! │  ┌─────────┴──────────┐   ┌───────────────────────┐   │
//! │  │ Validation         │──▶│ SubmissionSink (port) │   │
//! │  │ fields → email     │   │ SimulatedSink default │   │
//! │  └────────────────────┘   └───────────────────────┘   │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! # Responses
//!
//! Every `/api/contact` response is `{ "success": bool, "message": string }`:
//!
//! - `200` accepted
//! - `400` missing required field, malformed email, or unreadable body
//! - `500` internal fault (detail is logged, never returned)
//!
//! # Usage
//!
//! ```ignore
//! use contact_gateway::{ContactGatewayService, GatewayConfig};
//!
//! let service = ContactGatewayService::with_simulated_sink(GatewayConfig::default())?;
//! service.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod api;
pub mod domain;
pub mod middleware;
pub mod ports;
pub mod service;

// Re-exports for public API
pub use domain::config::GatewayConfig;
pub use domain::error::{ContactError, ContactResponse, GatewayError, SinkError};
pub use domain::submission::{ContactRequest, ContactSubmission, ValidationError};
pub use domain::SubmissionId;
pub use middleware::ContactMetrics;
pub use ports::{SimulatedSink, SubmissionSink};
pub use service::ContactGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
