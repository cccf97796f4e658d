// ABOUTME: Nutrition calculation models for food resolution and nutrient totals
// ABOUTME: FoodItemInput, CanonicalFood, YieldFactor, ResolvedItem and NutrientSet definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// One free-text food entry submitted for calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItemInput {
    /// Free-text food name as typed by the user
    pub name: String,
    /// Quantity in grams; takes precedence over `milliliters`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams: Option<f64>,
    /// Quantity in milliliters, converted with the matched food's density
    #[serde(
        default,
        rename = "ml",
        alias = "milliliters",
        skip_serializing_if = "Option::is_none"
    )]
    pub milliliters: Option<f64>,
    /// Preparation state asserted by the user (cru, cozido, grelhado, frito...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl FoodItemInput {
    /// Item measured in grams
    pub fn grams(name: impl Into<String>, grams: f64) -> Self {
        Self {
            name: name.into(),
            grams: Some(grams),
            milliliters: None,
            state: None,
        }
    }

    /// Item measured in milliliters
    pub fn milliliters(name: impl Into<String>, milliliters: f64) -> Self {
        Self {
            name: name.into(),
            grams: None,
            milliliters: Some(milliliters),
            state: None,
        }
    }

    /// Set the user-asserted preparation state
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Authoritative nutrient record for a food in one preparation state
///
/// All nutrient fields are per 100 g of the food in `state`. Records are
/// immutable reference data; the engine never writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalFood {
    /// Store identifier
    pub id: String,
    /// Display name, e.g. "Arroz, branco, cozido"
    pub canonical_name: String,
    /// Locale the record belongs to
    pub locale: String,
    /// Preparation state the nutrient values describe
    pub state: String,
    /// Stored energy; never used for output energy
    pub kcal: f64,
    /// Protein (g per 100 g)
    pub protein_g: f64,
    /// Fat (g per 100 g)
    pub fat_g: f64,
    /// Carbohydrates (g per 100 g)
    pub carbs_g: f64,
    /// Fiber (g per 100 g)
    pub fiber_g: f64,
    /// Sodium (mg per 100 g)
    pub sodium_mg: f64,
    /// Density for ml to g conversion
    #[serde(default)]
    pub density_g_ml: Option<f64>,
    /// Edible fraction of purchased mass (peel, bone, seeds removed)
    #[serde(default)]
    pub edible_portion_factor: Option<f64>,
    /// Grams of oil absorbed per 100 g when fried
    #[serde(default)]
    pub oil_absorption_factor: Option<f64>,
}

impl CanonicalFood {
    /// Whether the record carries any energy-bearing nutrient at all
    ///
    /// Section headers and category rows in food composition tables are
    /// stored with every macro at zero; those are placeholders, not food.
    #[must_use]
    pub fn has_macros(&self) -> bool {
        [
            self.kcal,
            self.protein_g,
            self.fat_g,
            self.carbs_g,
            self.fiber_g,
        ]
        .iter()
        .any(|value| *value > 0.0)
    }
}

/// Multiplicative mass change when a food moves between preparation states
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldFactor {
    /// Food the factor applies to
    pub food_id: String,
    /// Source state
    pub from_state: String,
    /// Destination state
    pub to_state: String,
    /// Mass multiplier, e.g. 2.5 for raw to cooked rice
    pub factor: f64,
}

/// Candidate returned by a similarity-ranked name search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodMatch {
    /// Matched food id
    pub id: String,
    /// Matched canonical name
    pub canonical_name: String,
    /// Similarity score in `[0, 1]`
    pub similarity: f64,
}

/// Nutrient amounts for a concrete mass of food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSet {
    /// Energy derived from macros (kcal)
    pub kcal: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
}

impl AddAssign<&Self> for NutrientSet {
    fn add_assign(&mut self, other: &Self) {
        self.kcal += other.kcal;
        self.protein_g += other.protein_g;
        self.fat_g += other.fat_g;
        self.carbs_g += other.carbs_g;
        self.fiber_g += other.fiber_g;
        self.sodium_mg += other.sodium_mg;
    }
}

/// Request-level sums; same shape as a per-item set
pub type NutrientTotals = NutrientSet;

/// Resolver stage that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Exact normalized alias hit
    Alias,
    /// Trigram similarity search
    Fuzzy,
    /// Case-insensitive substring search
    Substring,
    /// Corrective substring search replacing a zero-macro placeholder
    PlaceholderFallback,
}

impl MatchSource {
    /// Stable label for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::Fuzzy => "fuzzy",
            Self::Substring => "substring",
            Self::PlaceholderFallback => "placeholder_fallback",
        }
    }
}

/// Outcome of processing a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Matched and quantified; nutrients computed
    Resolved,
    /// No canonical food found at any stage
    UnresolvedFood,
    /// Food matched but no usable grams (or ml with density)
    UnresolvedQuantity,
}

/// Per-item calculation result, echoing the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedItem {
    /// The item as submitted
    pub input: FoodItemInput,
    /// Matched food id
    pub matched_food_id: Option<String>,
    /// Matched canonical name
    pub matched_canonical_name: Option<String>,
    /// State recorded on the matched food
    pub base_state: Option<String>,
    /// Resolver stage that found the match
    pub matched_by: Option<MatchSource>,
    /// Density used for ml to g conversion
    pub used_density_g_ml: Option<f64>,
    /// Edible portion factor applied
    pub used_epf: Option<f64>,
    /// Cooking yield factor applied
    pub used_yield_factor: Option<f64>,
    /// Mass after all corrections, used for scaling
    pub effective_grams: f64,
    /// Nutrients for `effective_grams`; `None` when not computed
    pub nutrients: Option<NutrientSet>,
    /// Processing outcome
    pub status: ItemStatus,
}

impl ResolvedItem {
    /// Item for which no canonical food could be found
    #[must_use]
    pub const fn unresolved_food(input: FoodItemInput) -> Self {
        Self {
            input,
            matched_food_id: None,
            matched_canonical_name: None,
            base_state: None,
            matched_by: None,
            used_density_g_ml: None,
            used_epf: None,
            used_yield_factor: None,
            effective_grams: 0.0,
            nutrients: None,
            status: ItemStatus::UnresolvedFood,
        }
    }

    /// Item matched to `food` but without a usable quantity
    #[must_use]
    pub fn unresolved_quantity(
        input: FoodItemInput,
        food: &CanonicalFood,
        matched_by: MatchSource,
    ) -> Self {
        Self {
            input,
            matched_food_id: Some(food.id.clone()),
            matched_canonical_name: Some(food.canonical_name.clone()),
            base_state: Some(food.state.clone()),
            matched_by: Some(matched_by),
            used_density_g_ml: None,
            used_epf: None,
            used_yield_factor: None,
            effective_grams: 0.0,
            nutrients: None,
            status: ItemStatus::UnresolvedQuantity,
        }
    }
}

/// Calculation request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Items to resolve, in order
    pub items: Vec<FoodItemInput>,
    /// Locale for name searches; service default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Desired preparation state overriding every item's own `state`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_state: Option<String>,
}

impl CalculationRequest {
    /// Request with default locale and no target state
    #[must_use]
    pub const fn new(items: Vec<FoodItemInput>) -> Self {
        Self {
            items,
            locale: None,
            target_state: None,
        }
    }
}

/// Successful calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Always `true`; failures use `ErrorResponse`
    pub success: bool,
    /// One entry per input item, in input order
    pub resolved: Vec<ResolvedItem>,
    /// Sums over items with computed nutrients
    pub totals: NutrientTotals,
}
