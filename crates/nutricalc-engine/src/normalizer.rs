// ABOUTME: Text normalization for alias keys and similarity search
// ABOUTME: Lower-cases, strips diacritics, replaces punctuation and collapses whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize free text into an alias key
///
/// Lower-cases, decomposes (NFD) and drops combining marks, replaces every
/// character outside `[a-z0-9 ]` with a space, then trims and collapses
/// whitespace runs. Never fails: garbage in yields an empty or short string.
///
/// ```
/// use nutricalc_engine::normalizer::normalize;
/// assert_eq!(normalize("  Feijão, PRETO (cozido) "), "feijao preto cozido");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
