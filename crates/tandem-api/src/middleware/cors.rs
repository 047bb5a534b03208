//! CORS layer configuration.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use tandem_core::config::server::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Credentials (the session cookie) only flow when an explicit origin list
/// is configured; `Any` plus credentials is rejected by tower-http, so the
/// wildcard origin forces credentials off.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    let wildcard_origin = config.allowed_origins.contains(&"*".to_string());

    // Origins
    if wildcard_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    if config.allowed_headers.contains(&"*".to_string()) {
        if config.allow_credentials && !wildcard_origin {
            layer = layer.allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ]);
        } else {
            layer = layer.allow_headers(Any);
        }
    } else {
        let headers: Vec<axum::http::HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    if config.allow_credentials && !wildcard_origin {
        layer = layer.allow_credentials(true);
    }

    layer = layer.max_age(std::time::Duration::from_secs(config.max_age_seconds));

    layer
}
