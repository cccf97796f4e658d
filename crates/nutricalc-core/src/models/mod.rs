// ABOUTME: Core data models for the nutrition calculation service
// ABOUTME: Re-exports food reference data and calculation request/response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food reference data and calculation wire types
pub mod nutrition;

pub use nutrition::{
    CalculationRequest, CalculationResponse, CanonicalFood, FoodItemInput, FoodMatch, ItemStatus,
    MatchSource, NutrientSet, NutrientTotals, ResolvedItem, YieldFactor,
};
