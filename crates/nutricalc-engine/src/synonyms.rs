// ABOUTME: Static synonym table mapping colloquial food names to preferred search phrases
// ABOUTME: Biases ambiguous terms toward a specific prepared form before resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::LazyLock;

/// Colloquial name (lower-case, trimmed) to canonical search phrase
static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("carne de panela", "carne bovina cozida"),
        ("bife", "carne bovina grelhada"),
        ("batata", "batata cozida"),
        ("arroz", "arroz, branco, cozido"),
        ("feijao", "feijao preto cozido"),
        ("feijão", "feijao preto cozido"),
        ("salada", "salada verde"),
        ("farofa", "farofa pronta"),
        ("vinagrete", "molho vinagrete"),
        ("maionese", "maionese"),
        ("ovo", "ovo de galinha cozido"),
        ("ovos", "ovo de galinha cozido"),
        ("ovo cozido", "ovo de galinha cozido"),
        ("ovo frito", "ovo de galinha frito"),
        ("ovos mexidos", "ovos mexidos"),
        ("omelete", "omelete simples"),
        ("queijo", "queijo minas"),
        ("queijo ralado", "queijo parmesão ralado"),
    ])
});

/// Map a raw name to its preferred search phrase
///
/// Lookup is case-insensitive on the trimmed name. On a miss the raw name is
/// returned unchanged (not trimmed, not lower-cased).
#[must_use]
pub fn resolve_synonym(raw_name: &str) -> String {
    let key = raw_name.trim().to_lowercase();
    SYNONYMS
        .get(key.as_str())
        .map_or_else(|| raw_name.to_owned(), |phrase| (*phrase).to_owned())
}
