// ABOUTME: Aggregation of per-item nutrients into request totals
// ABOUTME: Items without nutrients stay in the output but contribute nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricalc_core::models::{NutrientTotals, ResolvedItem};

/// Sum item nutrients, keeping every item in input order
#[must_use]
pub fn aggregate(items: Vec<ResolvedItem>) -> (Vec<ResolvedItem>, NutrientTotals) {
    let totals = items
        .iter()
        .filter_map(|item| item.nutrients.as_ref())
        .fold(NutrientTotals::default(), |mut acc, nutrients| {
            acc += nutrients;
            acc
        });
    (items, totals)
}
