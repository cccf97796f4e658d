// ABOUTME: Quantity normalization from grams or milliliters into grams
// ABOUTME: Milliliters convert through the matched food's density; nothing is guessed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricalc_core::models::{CanonicalFood, FoodItemInput};

/// Result of quantity normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityOutcome {
    /// Usable mass in grams
    Grams {
        /// Mass before any correction
        grams: f64,
        /// Density applied when the mass came from milliliters
        density_g_ml: Option<f64>,
    },
    /// No usable quantity; strict mode stops the item here
    Unresolved,
    /// No usable quantity; non-strict mode carries the item on at 0 g
    Zeroed,
}

impl QuantityOutcome {
    /// Grams if resolved
    #[must_use]
    pub const fn grams(&self) -> Option<f64> {
        match self {
            Self::Grams { grams, .. } => Some(*grams),
            Self::Zeroed => Some(0.0),
            Self::Unresolved => None,
        }
    }
}

/// Convert the item's quantity into grams
///
/// Positive `grams` win. Otherwise positive milliliters are multiplied by the
/// food's positive density. Anything else is `Unresolved` under strict mode
/// and `Zeroed` without it; no quantity is ever estimated.
#[must_use]
pub fn normalize_quantity(
    input: &FoodItemInput,
    food: &CanonicalFood,
    strict_mode: bool,
) -> QuantityOutcome {
    if let Some(grams) = input.grams.filter(|g| *g > 0.0) {
        return QuantityOutcome::Grams {
            grams,
            density_g_ml: None,
        };
    }

    match (
        input.milliliters.filter(|ml| *ml > 0.0),
        food.density_g_ml.filter(|d| *d > 0.0),
    ) {
        (Some(ml), Some(density)) => QuantityOutcome::Grams {
            grams: ml * density,
            density_g_ml: Some(density),
        },
        _ if strict_mode => QuantityOutcome::Unresolved,
        _ => QuantityOutcome::Zeroed,
    }
}
