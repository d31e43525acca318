//! CORS policy for the browser-facing endpoints.
//!
//! Every response carries `Access-Control-Allow-Origin: *`. `OPTIONS`
//! requests are answered by the layer itself with 200 and an empty body, so
//! handlers never see them.

use std::time::Duration;

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Methods advertised for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedMethods {
    /// `POST, OPTIONS`
    Post,
    /// `GET, POST, OPTIONS`
    GetPost,
}

impl AllowedMethods {
    fn methods(self) -> Vec<Method> {
        match self {
            Self::Post => vec![Method::POST, Method::OPTIONS],
            Self::GetPost => vec![Method::GET, Method::POST, Method::OPTIONS],
        }
    }
}

pub fn cors_layer(allowed: AllowedMethods) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(allowed.methods())
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
