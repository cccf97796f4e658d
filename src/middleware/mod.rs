// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, request spans and the CORS policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request tracing and correlation ids
pub mod tracing;

pub use self::tracing::{
    create_request_span, request_trace_layer, RequestIdGenerator, REQUEST_ID_HEADER,
};
pub use cors::setup_cors;
