//! CORS middleware.
//!
//! Wrapper around tower-http CORS driven by [`CorsConfig`].

use crate::domain::config::{has_wildcard, CorsConfig};
use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Create CORS layer from gateway config
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        // No CORS headers at all: browsers fall back to same-origin only
        return CorsLayer::new();
    }

    let mut cors = CorsLayer::new();

    // Configure origins
    if has_wildcard(&config.allowed_origins) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if has_wildcard(&config.allowed_methods) {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if has_wildcard(&config.allowed_headers) {
        cors = cors.allow_headers(Any);
    } else {
        cors = cors.allow_headers(header_names(&config.allowed_headers));
    }

    if has_wildcard(&config.expose_headers) {
        cors = cors.expose_headers(Any);
    } else if !config.expose_headers.is_empty() {
        cors = cors.expose_headers(header_names(&config.expose_headers));
    }

    cors = cors.max_age(Duration::from_secs(config.max_age));

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    cors
}

fn header_names(names: &[String]) -> Vec<HeaderName> {
    names.iter().filter_map(|h| h.parse().ok()).collect()
}
