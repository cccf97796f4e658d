// ABOUTME: Preparation state normalization and resolver ranking priority
// ABOUTME: Cooked forms rank ahead of ready-made, liquid and raw records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricalc_core::constants::states;

/// States in descending resolver preference; anything unlisted ranks with `raw`
pub const STATE_PRIORITY: [&str; 6] = [
    states::COZIDO,
    states::GRELHADO,
    states::ASSADO,
    states::PRONTO,
    states::LIQUIDO,
    states::RAW,
];

/// Rank of a food state; lower sorts first
#[must_use]
pub fn state_priority(state: &str) -> usize {
    let state = state.trim().to_lowercase();
    STATE_PRIORITY
        .iter()
        .position(|candidate| *candidate == state)
        .unwrap_or(STATE_PRIORITY.len() - 1)
}

/// Trimmed, lower-cased state; blank counts as absent
#[must_use]
pub fn clean_state(state: Option<&str>) -> Option<String> {
    state
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}
