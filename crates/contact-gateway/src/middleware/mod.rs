//! Middleware stack for the Contact Gateway.
//!
//! Layer order: Request → CORS → CatchPanic → Tracing → Handler

pub mod cors;
pub mod metrics;
pub mod panic;
pub mod tracing;

pub use cors::create_cors_layer;
pub use metrics::{ContactMetrics, RequestTimer};
pub use panic::{create_panic_layer, PanicLayer};
pub use tracing::{TracingLayer, REQUEST_ID_HEADER};
