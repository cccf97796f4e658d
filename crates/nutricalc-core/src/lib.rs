// ABOUTME: Core types and constants for the nutrition calculation service
// ABOUTME: Foundation crate with error handling, wire models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutricalc Core
//!
//! Foundation crate shared by the calculation engine and the HTTP service.
//! It changes rarely, which keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and HTTP mapping
//! - **models**: Request/response and reference-data types for nutrition calculation
//! - **constants**: Energy factors, preparation states and locale defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Nutrition data models (food inputs, canonical foods, resolved items)
pub mod models;

/// Nutrition constants organized by domain
pub mod constants;
