// ABOUTME: Heuristic cooking yield table used when no stored yield factor exists
// ABOUTME: Keyed by food-name keyword and raw-to-prepared state transition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use nutricalc_core::constants::states;

use crate::normalizer::normalize;

/// One heuristic rule: any keyword in the name, raw source, listed target
#[derive(Debug, Clone)]
pub struct YieldHeuristic {
    /// Substrings matched against the normalized food name
    pub keywords: &'static [&'static str],
    /// Destination states the rule covers
    pub to_states: &'static [&'static str],
    /// Mass multiplier
    pub factor: f64,
}

/// Rules in evaluation order; first match wins
static YIELD_HEURISTICS: LazyLock<Vec<YieldHeuristic>> = LazyLock::new(|| {
    vec![
        // Grains absorb water
        YieldHeuristic {
            keywords: &["arroz", "massa", "macarr"],
            to_states: &[states::COZIDO],
            factor: 2.5,
        },
        YieldHeuristic {
            keywords: &["feij"],
            to_states: &[states::COZIDO],
            factor: 2.8,
        },
        // Vegetables lose water
        YieldHeuristic {
            keywords: &["batata", "cenoura", "brocolis", "couve", "abobrinh", "legume"],
            to_states: &[states::COZIDO, states::ASSADO],
            factor: 0.85,
        },
        YieldHeuristic {
            keywords: &["carne", "bovino", "bovina", "frango", "peito", "peixe"],
            to_states: &[states::GRELHADO],
            factor: 0.7,
        },
    ]
});

fn is_raw(state: &str) -> bool {
    state == states::CRU || state == states::RAW
}

/// Guess a yield factor for `food_name` moving from `from_state` to `to_state`
///
/// Only raw sources are covered (`cru` and `raw` are treated alike). Returns
/// `None` when the states are equal or no rule matches.
#[must_use]
pub fn guess_yield(from_state: &str, to_state: &str, food_name: &str) -> Option<f64> {
    if from_state == to_state || !is_raw(from_state) {
        return None;
    }

    let name = normalize(food_name);
    YIELD_HEURISTICS
        .iter()
        .find(|rule| {
            rule.to_states.contains(&to_state)
                && rule.keywords.iter().any(|keyword| name.contains(keyword))
        })
        .map(|rule| rule.factor)
}
