// ABOUTME: End-to-end engine tests over an in-memory reference table
// ABOUTME: Covers resolution stages, quantity rules, corrections, energy derivation and totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutricalc_core::models::{CalculationRequest, FoodItemInput, ItemStatus, MatchSource};
use nutricalc_engine::EngineConfig;

mod common;

use common::{assert_close, atwater, engine, engine_with, request};

// ============================================================================
// SCENARIOS
// ============================================================================

#[tokio::test]
async fn test_simple_match_derives_energy_from_macros() {
    let response = engine()
        .calculate(&request(FoodItemInput::grams("arroz", 100.0)))
        .await
        .unwrap();

    let item = &response.resolved[0];
    assert_eq!(item.matched_food_id.as_deref(), Some("arroz-cozido"));
    assert_eq!(item.matched_canonical_name.as_deref(), Some("Arroz, branco, cozido"));
    assert_eq!(item.base_state.as_deref(), Some("cozido"));
    assert_eq!(item.matched_by, Some(MatchSource::Fuzzy));
    assert_eq!(item.status, ItemStatus::Resolved);

    let nutrients = item.nutrients.unwrap();
    assert_close(nutrients.kcal, atwater(2.5, 28.1, 0.2));
    assert!(nutrients.kcal < 999.0);
    assert_close(nutrients.fiber_g, 1.6);
    assert_close(item.effective_grams, 100.0);
}

#[tokio::test]
async fn test_frying_adds_absorbed_oil() {
    let response = engine()
        .calculate(&request(
            FoodItemInput::grams("batata", 100.0).with_state("frito"),
        ))
        .await
        .unwrap();

    let item = &response.resolved[0];
    assert_eq!(item.matched_food_id.as_deref(), Some("batata-cozida"));
    assert_eq!(item.used_yield_factor, None);

    let nutrients = item.nutrients.unwrap();
    assert_close(nutrients.fat_g, 0.1 + 5.0);
    assert_close(nutrients.kcal, atwater(1.2, 11.9, 0.1) + 45.0);
}

#[tokio::test]
async fn test_no_oil_without_frying() {
    let response = engine()
        .calculate(&request(FoodItemInput::grams("batata", 100.0)))
        .await
        .unwrap();

    let nutrients = response.resolved[0].nutrients.unwrap();
    assert_close(nutrients.fat_g, 0.1);
    assert_close(nutrients.kcal, atwater(1.2, 11.9, 0.1));
}

#[tokio::test]
async fn test_zero_macro_placeholder_is_rejected() {
    let response = engine()
        .calculate(&request(FoodItemInput::grams("mandioca", 100.0)))
        .await
        .unwrap();

    let item = &response.resolved[0];
    assert_eq!(item.matched_food_id.as_deref(), Some("mandioca-temperada"));
    assert_eq!(item.matched_by, Some(MatchSource::Substring));
    assert!(item.nutrients.unwrap().kcal > 0.0);
}

#[tokio::test]
async fn test_unresolved_food_does_not_fail_request() {
    let response = engine()
        .calculate(&request(FoodItemInput::grams("xyz-nonexistent-food", 100.0)))
        .await
        .unwrap();

    assert!(response.success);
    let item = &response.resolved[0];
    assert_eq!(item.matched_food_id, None);
    assert_eq!(item.matched_by, None);
    assert_eq!(item.nutrients, None);
    assert_eq!(item.status, ItemStatus::UnresolvedFood);
    assert_close(item.effective_grams, 0.0);
}

#[tokio::test]
async fn test_blank_name_is_unresolved() {
    let response = engine()
        .calculate(&request(FoodItemInput::grams("   ", 100.0)))
        .await
        .unwrap();
    assert_eq!(response.resolved[0].status, ItemStatus::UnresolvedFood);
}

// ============================================================================
// QUANTITY
// ============================================================================

#[tokio::test]
async fn test_milliliters_convert_with_density() {
    let response = engine()
        .calculate(&request(FoodItemInput::milliliters("leite", 200.0)))
        .await
        .unwrap();

    let item = &response.resolved[0];
    assert_eq!(item.matched_by, Some(MatchSource::Alias));
    assert_eq!(item.used_density_g_ml, Some(1.03));
    assert_close(item.effective_grams, 206.0);
    assert_close(item.nutrients.unwrap().sodium_mg, 64.0 * 2.06);
}

#[tokio::test]
async fn test_strict_mode_leaves_unquantifiable_item_empty() {
    let response = engine()
        .calculate(&request(FoodItemInput::milliliters("arroz", 200.0)))
        .await
        .unwrap();

    let item = &response.resolved[0];
    assert_eq!(item.matched_food_id.as_deref(), Some("arroz-cozido"));
    assert_eq!(item.status, ItemStatus::UnresolvedQuantity);
    assert_eq!(item.nutrients, None);
    assert_eq!(item.used_density_g_ml, None);
    assert_close(item.effective_grams, 0.0);
    assert_close(response.totals.kcal, 0.0);
}

#[tokio::test]
async fn test_non_strict_mode_reports_explicit_zeros() {
    let engine = engine_with(EngineConfig::default().with_strict_mode(false));
    let response = engine
        .calculate(&request(FoodItemInput::milliliters("arroz", 200.0)))
        .await
        .unwrap();

    let item = &response.resolved[0];
    assert_eq!(item.status, ItemStatus::UnresolvedQuantity);
    let nutrients = item.nutrients.unwrap();
    assert_close(nutrients.kcal, 0.0);
    assert_close(nutrients.protein_g, 0.0);
    assert_close(item.effective_grams, 0.0);
}

// ============================================================================
// CORRECTIONS
// ============================================================================

#[tokio::test]
async fn test_edible_portion_then_stored_yield() {
    let mut req = request(FoodItemInput::grams("arroz cru", 100.0));
    req.target_state = Some("cozido".to_owned());
    let response = engine().calculate(&req).await.unwrap();

    let item = &response.resolved[0];
    assert_eq!(item.used_epf, Some(0.9));
    assert_eq!(item.used_yield_factor, Some(2.5));
    assert_close(item.effective_grams, 225.0);

    let nutrients = item.nutrients.unwrap();
    assert_close(nutrients.protein_g, 7.2 * 2.25);
    assert_close(nutrients.kcal, atwater(7.2, 78.8, 0.3) * 2.25);
}

#[tokio::test]
async fn test_target_state_overrides_item_state() {
    let mut req = request(FoodItemInput::grams("arroz cru", 100.0).with_state("frito"));
    req.target_state = Some("cozido".to_owned());
    let response = engine().calculate(&req).await.unwrap();

    assert_eq!(response.resolved[0].used_yield_factor, Some(2.5));
}

#[tokio::test]
async fn test_yield_guess_disabled_by_default() {
    let item = FoodItemInput::grams("peito de frango", 100.0).with_state("grelhado");

    let strict = engine().calculate(&request(item.clone())).await.unwrap();
    assert_eq!(strict.resolved[0].used_yield_factor, None);
    assert_close(strict.resolved[0].effective_grams, 100.0);

    let guessing = engine_with(EngineConfig::default().with_yield_guess_disabled(false))
        .calculate(&request(item))
        .await
        .unwrap();
    assert_eq!(guessing.resolved[0].used_yield_factor, Some(0.7));
    assert_close(guessing.resolved[0].effective_grams, 70.0);
}

// ============================================================================
// INVARIANTS
// ============================================================================

fn mixed_request() -> CalculationRequest {
    CalculationRequest::new(vec![
        FoodItemInput::grams("arroz", 150.0),
        FoodItemInput::grams("xyz-nonexistent-food", 80.0),
        FoodItemInput::grams("batata", 120.0).with_state("frito"),
        FoodItemInput::milliliters("arroz", 200.0),
        FoodItemInput::milliliters("leite", 250.0),
        FoodItemInput::grams("", 10.0),
    ])
}

#[tokio::test]
async fn test_order_is_preserved() {
    let request = mixed_request();
    let response = engine().calculate(&request).await.unwrap();

    assert_eq!(response.resolved.len(), request.items.len());
    for (item, input) in response.resolved.iter().zip(&request.items) {
        assert_eq!(&item.input, input);
    }
}

#[tokio::test]
async fn test_energy_is_always_derived() {
    let response = engine().calculate(&mixed_request()).await.unwrap();

    for item in &response.resolved {
        let Some(nutrients) = item.nutrients else {
            continue;
        };
        let oil_kcal = if item.input.state.as_deref() == Some("frito") {
            5.0 * 9.0 * item.effective_grams / 100.0
        } else {
            0.0
        };
        let base_fat = nutrients.fat_g - oil_kcal / 9.0;
        assert_close(
            nutrients.kcal,
            atwater(nutrients.protein_g, nutrients.carbs_g, base_fat) + oil_kcal,
        );
    }
}

#[tokio::test]
async fn test_totals_sum_only_computed_items() {
    let response = engine().calculate(&mixed_request()).await.unwrap();

    let computed: Vec<_> = response
        .resolved
        .iter()
        .filter_map(|item| item.nutrients)
        .collect();
    assert_eq!(computed.len(), 3);

    assert_close(response.totals.kcal, computed.iter().map(|n| n.kcal).sum());
    assert_close(response.totals.fat_g, computed.iter().map(|n| n.fat_g).sum());
    assert_close(
        response.totals.sodium_mg,
        computed.iter().map(|n| n.sodium_mg).sum(),
    );

    for item in response.resolved.iter().filter(|i| i.nutrients.is_none()) {
        assert_close(item.effective_grams, 0.0);
    }
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let engine = engine();
    let first = engine.calculate(&mixed_request()).await.unwrap();
    let second = engine.calculate(&mixed_request()).await.unwrap();

    assert_eq!(first.resolved, second.resolved);
    assert_eq!(first.totals, second.totals);
}

#[tokio::test]
async fn test_locale_scopes_search() {
    let mut req = request(FoodItemInput::grams("Rice, white, cooked", 100.0));
    let pt = engine().calculate(&req).await.unwrap();
    assert_eq!(pt.resolved[0].status, ItemStatus::UnresolvedFood);

    req.locale = Some("en-US".to_owned());
    let en = engine().calculate(&req).await.unwrap();
    assert_eq!(en.resolved[0].matched_food_id.as_deref(), Some("rice-en"));
}
