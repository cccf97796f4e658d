// ABOUTME: Route handler for the nutrition calculation endpoint
// ABOUTME: Validates the JSON body, runs the engine and logs the request outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition calculation routes
//!
//! `POST /nutrition/calc` resolves free-text food items and returns per-item
//! results plus totals. Items that cannot be matched or quantified are
//! reported in the response body; only malformed requests and food store
//! failures produce an error status.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use nutricalc_core::errors::{AppError, AppResult};
use nutricalc_core::models::{CalculationRequest, CalculationResponse};

use crate::constants::routes;
use crate::logging::AppLogger;
use crate::resources::ServerResources;

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the calculation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::NUTRITION_CALC, post(Self::handle_calculate))
            .with_state(resources)
    }

    /// Handle POST /nutrition/calc
    async fn handle_calculate(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<CalculationRequest>, JsonRejection>,
    ) -> AppResult<Json<CalculationResponse>> {
        let Json(request) = body.map_err(|rejection| {
            if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                AppError::invalid_format(rejection.body_text())
            } else {
                AppError::invalid_input(rejection.body_text())
            }
        })?;

        let started = Instant::now();
        let response = resources.engine.calculate(&request).await?;

        let locale = request
            .locale
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(resources.engine.config().default_locale.as_str());
        AppLogger::log_calculation(
            &response,
            locale,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(Json(response))
    }
}
