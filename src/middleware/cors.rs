// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Browser clients call the calculation route directly from any origin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{header::HeaderName, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Open CORS policy for the public API
///
/// Any origin may call the service with the headers a JSON client sends.
#[must_use]
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
