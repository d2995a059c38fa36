//! Converts handler panics into the generic 500 contact response.

use crate::domain::error::{ContactResponse, GENERIC_FAILURE};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Layer type installed by the gateway router
pub type PanicLayer = CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response>;

/// Create the panic-catching layer
pub fn create_panic_layer() -> PanicLayer {
    CatchPanicLayer::custom(panic_response as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ContactResponse::failure(GENERIC_FAILURE)),
    )
        .into_response()
}
