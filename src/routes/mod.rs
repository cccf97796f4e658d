// ABOUTME: Route module organization for the nutrition service HTTP endpoints
// ABOUTME: Groups calculation and health routes into one application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the engine or the database.

/// Health check and readiness routes
pub mod health;
/// Nutrition calculation routes
pub mod nutrition;

pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

use std::sync::Arc;

use axum::Router;

use crate::resources::ServerResources;

/// All application routes without middleware
pub fn app_routes(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(NutritionRoutes::routes(Arc::clone(resources)))
        .merge(HealthRoutes::routes(Arc::clone(resources)))
}
