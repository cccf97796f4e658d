// ABOUTME: Shared fixtures for engine integration tests
// ABOUTME: Builds an in-memory reference table of pt-BR foods, aliases and yields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `nutricalc_engine`

use std::env;
use std::sync::{Arc, Once};

use nutricalc_core::models::{CalculationRequest, CanonicalFood, FoodItemInput};
use nutricalc_engine::{EngineConfig, InMemoryFoodStore, NutritionEngine};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Food record with per-100 g macros; optional fields unset
pub fn food(
    id: &str,
    name: &str,
    state: &str,
    kcal: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
) -> CanonicalFood {
    CanonicalFood {
        id: id.to_owned(),
        canonical_name: name.to_owned(),
        locale: "pt-BR".to_owned(),
        state: state.to_owned(),
        kcal,
        protein_g,
        fat_g,
        carbs_g,
        fiber_g: 0.0,
        sodium_mg: 0.0,
        density_g_ml: None,
        edible_portion_factor: None,
        oil_absorption_factor: None,
    }
}

/// Reference table covering the common calculation scenarios
///
/// Stored kcal values are deliberately inconsistent with the macros so tests
/// can tell derived energy from copied energy.
pub fn reference_store() -> InMemoryFoodStore {
    InMemoryFoodStore::new()
        .with_food(CanonicalFood {
            fiber_g: 1.6,
            sodium_mg: 1.0,
            ..food("arroz-cozido", "Arroz, branco, cozido", "cozido", 999.0, 2.5, 0.2, 28.1)
        })
        .with_food(CanonicalFood {
            edible_portion_factor: Some(0.9),
            ..food("arroz-cru", "Arroz, tipo 1, cru", "cru", 358.0, 7.2, 0.3, 78.8)
        })
        .with_food(CanonicalFood {
            oil_absorption_factor: Some(5.0),
            fiber_g: 1.3,
            ..food("batata-cozida", "Batata, cozida", "cozido", 52.0, 1.2, 0.1, 11.9)
        })
        .with_food(CanonicalFood {
            density_g_ml: Some(1.03),
            sodium_mg: 64.0,
            ..food("leite", "Leite, de vaca, integral", "liquido", 61.0, 3.2, 3.3, 4.7)
        })
        .with_food(food(
            "mandioca-grupo",
            "Mandioca e derivados, preparacoes diversas com raizes",
            "cozido",
            0.0,
            0.0,
            0.0,
            0.0,
        ))
        .with_food(food(
            "mandioca-temperada",
            "Mandioca, cozida, com sal e temperos variados",
            "raw",
            125.0,
            0.6,
            0.3,
            30.1,
        ))
        .with_food(food("frango-cru", "Frango, peito, sem pele, cru", "cru", 119.0, 21.5, 3.0, 0.0))
        .with_food(CanonicalFood {
            locale: "en-US".to_owned(),
            ..food("rice-en", "Rice, white, cooked", "cozido", 130.0, 2.7, 0.3, 28.0)
        })
        .with_alias("leite", "leite")
        .with_alias("arroz cru", "arroz-cru")
        .with_alias("peito de frango", "frango-cru")
        .with_yield("arroz-cru", "cru", "cozido", 2.5)
}

/// Engine over [`reference_store`] with the given configuration
pub fn engine_with(config: EngineConfig) -> NutritionEngine {
    init_test_logging();
    NutritionEngine::new(Arc::new(reference_store()), config)
}

/// Engine over [`reference_store`] with default (strict) configuration
pub fn engine() -> NutritionEngine {
    engine_with(EngineConfig::default())
}

/// Single-item request
pub fn request(item: FoodItemInput) -> CalculationRequest {
    CalculationRequest::new(vec![item])
}

/// `4P + 4C + 9F`
pub fn atwater(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
    4.0 * protein_g + 4.0 * carbs_g + 9.0 * fat_g
}

/// Approximate float equality for nutrient assertions
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
