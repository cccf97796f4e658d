// ABOUTME: Trigram similarity scoring compatible with PostgreSQL pg_trgm
// ABOUTME: Used by food stores that cannot delegate similarity ranking to the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::iter;

use nutricalc_core::models::FoodMatch;

use crate::normalizer::normalize;

/// Minimum score for a similarity match (`pg_trgm` default)
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Maximum candidates returned by a similarity search
pub const SIMILARITY_LIMIT: usize = 5;

/// Trigram set of `text`
///
/// Each word of the normalized text is padded with two leading spaces and one
/// trailing space before 3-grams are taken, as `pg_trgm` does.
#[must_use]
pub fn trigrams(text: &str) -> BTreeSet<[char; 3]> {
    let mut grams = BTreeSet::new();
    for word in normalize(text).split(' ').filter(|w| !w.is_empty()) {
        let padded: Vec<char> = "  "
            .chars()
            .chain(word.chars())
            .chain(iter::once(' '))
            .collect();
        for window in padded.windows(3) {
            grams.insert([window[0], window[1], window[2]]);
        }
    }
    grams
}

/// Shared trigrams over the union of both sets, in `[0, 1]`
#[must_use]
pub fn trigram_similarity(left: &str, right: &str) -> f64 {
    let a = trigrams(left);
    let b = trigrams(right);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let shared = a.intersection(&b).count();
    let union = a.len() + b.len() - shared;
    shared as f64 / union as f64
}

/// Order matches best first, ties broken by name
pub fn rank_matches(matches: &mut [FoodMatch]) {
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.canonical_name.cmp(&b.canonical_name))
    });
}
