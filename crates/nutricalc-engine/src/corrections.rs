// ABOUTME: Mass corrections applied between quantity normalization and nutrient scaling
// ABOUTME: Edible portion trimming, state transition resolution and cooking yield lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricalc_core::constants::states;
use nutricalc_core::errors::AppResult;
use nutricalc_core::models::CanonicalFood;

use crate::state::clean_state;
use crate::store::FoodStore;
use crate::yield_guess::guess_yield;

/// Preparation state change requested for an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    /// State the matched record describes (`raw` when the record has none)
    pub from: String,
    /// Desired state
    pub to: String,
}

impl StateTransition {
    /// Whether the transition changes state at all
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }

    /// Whether either side of the transition is fried
    #[must_use]
    pub fn is_frying(&self) -> bool {
        self.from == states::FRITO || self.to == states::FRITO
    }
}

/// Work out `from` and `to` states for an item
///
/// `to` is the request's target state, else the item's own state, else
/// `from` (no transition).
#[must_use]
pub fn resolve_states(
    food: &CanonicalFood,
    target_state: Option<&str>,
    item_state: Option<&str>,
) -> StateTransition {
    let from = clean_state(Some(&food.state)).unwrap_or_else(|| states::RAW.to_owned());
    let to = clean_state(target_state)
        .or_else(|| clean_state(item_state))
        .unwrap_or_else(|| from.clone());
    StateTransition { from, to }
}

/// Trim inedible mass; returns the corrected grams and the factor applied
#[must_use]
pub fn apply_edible_portion(grams: f64, food: &CanonicalFood) -> (f64, Option<f64>) {
    match food.edible_portion_factor.filter(|factor| *factor > 0.0) {
        Some(factor) => (grams * factor, Some(factor)),
        None => (grams, None),
    }
}

/// Yield factor for the transition, if any applies
///
/// A positive stored factor wins. Without one, the heuristic table is
/// consulted only when `allow_guess` is set.
///
/// # Errors
///
/// Returns an error if the yield lookup fails
pub async fn cooking_yield(
    store: &dyn FoodStore,
    food: &CanonicalFood,
    transition: &StateTransition,
    allow_guess: bool,
) -> AppResult<Option<f64>> {
    if !transition.is_change() {
        return Ok(None);
    }

    let stored = store
        .get_yield(&food.id, &transition.from, &transition.to)
        .await?
        .map(|y| y.factor)
        .filter(|factor| *factor > 0.0);

    if stored.is_some() || !allow_guess {
        return Ok(stored);
    }
    Ok(guess_yield(&transition.from, &transition.to, &food.canonical_name)
        .filter(|factor| *factor > 0.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::store::InMemoryFoodStore;

    fn rice(state: &str) -> CanonicalFood {
        CanonicalFood {
            id: "arroz-cru".to_owned(),
            canonical_name: "Arroz, tipo 1, cru".to_owned(),
            locale: "pt-BR".to_owned(),
            state: state.to_owned(),
            kcal: 358.0,
            protein_g: 7.2,
            fat_g: 0.3,
            carbs_g: 78.8,
            fiber_g: 1.6,
            sodium_mg: 1.0,
            density_g_ml: None,
            edible_portion_factor: Some(0.9),
            oil_absorption_factor: None,
        }
    }

    #[test]
    fn test_target_state_overrides_item_state() {
        let transition = resolve_states(&rice("cru"), Some("Cozido"), Some("frito"));
        assert_eq!(transition.from, "cru");
        assert_eq!(transition.to, "cozido");
        assert!(!transition.is_frying());
    }

    #[test]
    fn test_missing_states_default() {
        let transition = resolve_states(&rice(""), None, Some("  "));
        assert_eq!(transition.from, "raw");
        assert_eq!(transition.to, "raw");
        assert!(!transition.is_change());
    }

    #[test]
    fn test_frying_on_either_side() {
        assert!(resolve_states(&rice("frito"), None, None).is_frying());
        assert!(resolve_states(&rice("cru"), None, Some("frito")).is_frying());
    }

    #[test]
    fn test_edible_portion() {
        let (grams, factor) = apply_edible_portion(200.0, &rice("cru"));
        assert!((grams - 180.0).abs() < 1e-9);
        assert_eq!(factor, Some(0.9));

        let no_factor = CanonicalFood {
            edible_portion_factor: Some(0.0),
            ..rice("cru")
        };
        assert_eq!(apply_edible_portion(200.0, &no_factor), (200.0, None));
    }

    #[tokio::test]
    async fn test_stored_yield_beats_guess() {
        let store = InMemoryFoodStore::new().with_yield("arroz-cru", "cru", "cozido", 2.7);
        let transition = resolve_states(&rice("cru"), Some("cozido"), None);

        let factor = cooking_yield(&store, &rice("cru"), &transition, true).await.unwrap();
        assert_eq!(factor, Some(2.7));
    }

    #[tokio::test]
    async fn test_guess_only_when_allowed() {
        let store = InMemoryFoodStore::new();
        let transition = resolve_states(&rice("cru"), Some("cozido"), None);

        let disabled = cooking_yield(&store, &rice("cru"), &transition, false).await.unwrap();
        assert_eq!(disabled, None);

        let guessed = cooking_yield(&store, &rice("cru"), &transition, true).await.unwrap();
        assert_eq!(guessed, Some(2.5));
    }

    #[tokio::test]
    async fn test_no_lookup_without_transition() {
        let store = InMemoryFoodStore::new().with_yield("arroz-cru", "cru", "cru", 9.0);
        let transition = resolve_states(&rice("cru"), None, None);
        let factor = cooking_yield(&store, &rice("cru"), &transition, true).await.unwrap();
        assert_eq!(factor, None);
    }
}
