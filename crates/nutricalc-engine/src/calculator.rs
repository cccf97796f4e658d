// ABOUTME: Nutrient scaling from per-100 g reference values to an effective mass
// ABOUTME: Energy is always derived from macros (4/4/9), never copied from stored kcal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricalc_core::constants::energy::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, REFERENCE_MASS_G,
};
use nutricalc_core::models::{CanonicalFood, NutrientSet};

/// Energy from macros: 4 kcal/g protein and carbs, 9 kcal/g fat
///
/// Fiber is excluded.
#[must_use]
pub fn derive_kcal(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
    KCAL_PER_G_PROTEIN.mul_add(protein_g, KCAL_PER_G_CARBS.mul_add(carbs_g, KCAL_PER_G_FAT * fat_g))
}

/// Scale a food's per-100 g values to `effective_grams`
///
/// The record's stored `kcal` is ignored; energy is recomputed with
/// [`derive_kcal`] from the scaled macros.
#[must_use]
pub fn compute_nutrients(food: &CanonicalFood, effective_grams: f64) -> NutrientSet {
    let factor = effective_grams / REFERENCE_MASS_G;

    let protein_g = food.protein_g * factor;
    let fat_g = food.fat_g * factor;
    let carbs_g = food.carbs_g * factor;

    NutrientSet {
        kcal: derive_kcal(protein_g, carbs_g, fat_g),
        protein_g,
        fat_g,
        carbs_g,
        fiber_g: food.fiber_g * factor,
        sodium_mg: food.sodium_mg * factor,
    }
}

/// Add absorbed frying oil on top of the base nutrients
///
/// Scales by the same `effective_grams / 100` factor as the base values.
/// Foods without a positive absorption factor are returned unchanged.
#[must_use]
pub fn apply_oil_absorption(
    mut nutrients: NutrientSet,
    food: &CanonicalFood,
    effective_grams: f64,
) -> NutrientSet {
    let Some(oil_g_per_100g) = food.oil_absorption_factor.filter(|f| *f > 0.0) else {
        return nutrients;
    };
    let factor = effective_grams / REFERENCE_MASS_G;

    nutrients.fat_g += oil_g_per_100g * factor;
    nutrients.kcal += oil_g_per_100g * KCAL_PER_G_FAT * factor;
    nutrients
}
