// ABOUTME: Engine entry point running resolution, quantity, corrections and scaling per item
// ABOUTME: Configuration is passed in explicitly; the engine never reads the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use nutricalc_core::constants::locale::DEFAULT_LOCALE;
use nutricalc_core::errors::AppResult;
use nutricalc_core::models::{
    CalculationRequest, CalculationResponse, FoodItemInput, ItemStatus, ResolvedItem,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::aggregator::aggregate;
use crate::calculator::{apply_oil_absorption, compute_nutrients};
use crate::corrections::{apply_edible_portion, cooking_yield, resolve_states};
use crate::quantity::{normalize_quantity, QuantityOutcome};
use crate::resolver::FoodResolver;
use crate::store::FoodStore;
use crate::synonyms::resolve_synonym;

/// Engine behavior switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Stop unquantifiable items with null nutrients instead of zeroing them
    pub strict_mode: bool,
    /// Never consult the heuristic yield table
    pub disable_yield_guess: bool,
    /// Locale used when a request names none
    pub default_locale: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict_mode: true,
            disable_yield_guess: true,
            default_locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}

impl EngineConfig {
    /// Override strict mode
    #[must_use]
    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    /// Override the yield guess switch
    #[must_use]
    pub fn with_yield_guess_disabled(mut self, disabled: bool) -> Self {
        self.disable_yield_guess = disabled;
        self
    }
}

/// Nutrition calculation engine
///
/// Holds no per-request state; one instance serves every request.
pub struct NutritionEngine {
    store: Arc<dyn FoodStore>,
    resolver: FoodResolver,
    config: EngineConfig,
}

impl NutritionEngine {
    /// Engine with the standard resolver chain
    #[must_use]
    pub fn new(store: Arc<dyn FoodStore>, config: EngineConfig) -> Self {
        Self {
            store,
            resolver: FoodResolver::standard(),
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Process every item in order and total the results
    ///
    /// Unmatched or unquantifiable items are reported on their own entry and
    /// never abort the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the food store fails during a lookup that cannot
    /// degrade (alias, food by id, substring search, yield)
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn calculate(&self, request: &CalculationRequest) -> AppResult<CalculationResponse> {
        let locale = request
            .locale
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.config.default_locale.as_str());
        let target_state = request.target_state.as_deref();

        let mut resolved = Vec::with_capacity(request.items.len());
        for input in &request.items {
            resolved.push(self.process_item(input, locale, target_state).await?);
        }

        let (resolved, totals) = aggregate(resolved);
        Ok(CalculationResponse {
            success: true,
            resolved,
            totals,
        })
    }

    /// Run the full pipeline for one item
    ///
    /// # Errors
    ///
    /// Returns an error if a non-degrading store lookup fails
    pub async fn process_item(
        &self,
        input: &FoodItemInput,
        locale: &str,
        target_state: Option<&str>,
    ) -> AppResult<ResolvedItem> {
        if input.name.trim().is_empty() {
            debug!("Blank food name, skipping lookup");
            return Ok(ResolvedItem::unresolved_food(input.clone()));
        }

        let search_name = resolve_synonym(&input.name);
        let Some(resolution) = self
            .resolver
            .resolve(self.store.as_ref(), &search_name, locale)
            .await?
        else {
            debug!(name = %input.name, search = %search_name, "No food matched");
            return Ok(ResolvedItem::unresolved_food(input.clone()));
        };
        let food = resolution.food;

        let quantity = normalize_quantity(input, &food, self.config.strict_mode);
        let (grams, used_density) = match quantity {
            QuantityOutcome::Grams {
                grams,
                density_g_ml,
            } => (grams, density_g_ml),
            QuantityOutcome::Zeroed => (0.0, None),
            QuantityOutcome::Unresolved => {
                debug!(
                    name = %input.name,
                    food_id = %food.id,
                    "Matched food has no usable quantity"
                );
                return Ok(ResolvedItem::unresolved_quantity(
                    input.clone(),
                    &food,
                    resolution.source,
                ));
            }
        };

        let (mut grams, used_epf) = apply_edible_portion(grams, &food);

        let transition = resolve_states(&food, target_state, input.state.as_deref());
        let used_yield = cooking_yield(
            self.store.as_ref(),
            &food,
            &transition,
            !self.config.disable_yield_guess,
        )
        .await?;
        if let Some(factor) = used_yield {
            grams *= factor;
        }

        let mut nutrients = compute_nutrients(&food, grams);
        if transition.is_frying() {
            nutrients = apply_oil_absorption(nutrients, &food, grams);
        }

        let status = if quantity == QuantityOutcome::Zeroed {
            ItemStatus::UnresolvedQuantity
        } else {
            ItemStatus::Resolved
        };

        debug!(
            name = %input.name,
            food_id = %food.id,
            stage = resolution.source.as_str(),
            from_state = %transition.from,
            to_state = %transition.to,
            effective_grams = grams,
            kcal = nutrients.kcal,
            "Item calculated"
        );

        Ok(ResolvedItem {
            input: input.clone(),
            matched_food_id: Some(food.id),
            matched_canonical_name: Some(food.canonical_name),
            base_state: Some(food.state),
            matched_by: Some(resolution.source),
            used_density_g_ml: used_density,
            used_epf,
            used_yield_factor: used_yield,
            effective_grams: grams,
            nutrients: Some(nutrients),
            status,
        })
    }
}

impl fmt::Debug for NutritionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionEngine")
            .field("resolver", &self.resolver)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_strict() {
        let config = EngineConfig::default();
        assert!(config.strict_mode);
        assert!(config.disable_yield_guess);
        assert_eq!(config.default_locale, "pt-BR");
    }

    #[test]
    fn test_config_overrides() {
        let config = EngineConfig::default()
            .with_strict_mode(false)
            .with_yield_guess_disabled(false);
        assert!(!config.strict_mode);
        assert!(!config.disable_yield_guess);
    }
}
