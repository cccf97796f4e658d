// ABOUTME: Error types for the nutrition service, re-exported from nutricalc-core
// ABOUTME: Keeps crate::errors paths stable for handlers and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError` lives in `nutricalc-core` so the engine and the service share
//! one taxonomy. With the `http-response` feature it renders as the
//! `{ "success": false, "error", "code" }` failure body.

pub use nutricalc_core::errors::{AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse};
