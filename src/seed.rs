// ABOUTME: Built-in pt-BR demo reference data: foods, aliases and cooking yields
// ABOUTME: Loaded by the seed-foods binary with idempotent upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo reference data
//!
//! Values are per 100 g and follow Brazilian food composition tables closely
//! enough for local development. This is not a curated dataset.

use std::time::Instant;

use nutricalc_core::constants::{locale, states};
use nutricalc_core::errors::AppResult;
use nutricalc_core::models::{CanonicalFood, YieldFactor};
use tracing::info;

use crate::database::FoodRepository;
use crate::logging::AppLogger;

/// Compact food definition
struct DemoFood {
    id: &'static str,
    name: &'static str,
    state: &'static str,
    kcal: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
    fiber_g: f64,
    sodium_mg: f64,
    density_g_ml: Option<f64>,
    edible_portion_factor: Option<f64>,
    oil_absorption_factor: Option<f64>,
}

impl DemoFood {
    const fn base(
        id: &'static str,
        name: &'static str,
        state: &'static str,
        macros: [f64; 6],
    ) -> Self {
        Self {
            id,
            name,
            state,
            kcal: macros[0],
            protein_g: macros[1],
            fat_g: macros[2],
            carbs_g: macros[3],
            fiber_g: macros[4],
            sodium_mg: macros[5],
            density_g_ml: None,
            edible_portion_factor: None,
            oil_absorption_factor: None,
        }
    }

    const fn density(mut self, density_g_ml: f64) -> Self {
        self.density_g_ml = Some(density_g_ml);
        self
    }

    const fn edible(mut self, factor: f64) -> Self {
        self.edible_portion_factor = Some(factor);
        self
    }

    const fn oil(mut self, factor: f64) -> Self {
        self.oil_absorption_factor = Some(factor);
        self
    }

    fn to_food(&self) -> CanonicalFood {
        CanonicalFood {
            id: self.id.to_owned(),
            canonical_name: self.name.to_owned(),
            locale: locale::DEFAULT_LOCALE.to_owned(),
            state: self.state.to_owned(),
            kcal: self.kcal,
            protein_g: self.protein_g,
            fat_g: self.fat_g,
            carbs_g: self.carbs_g,
            fiber_g: self.fiber_g,
            sodium_mg: self.sodium_mg,
            density_g_ml: self.density_g_ml,
            edible_portion_factor: self.edible_portion_factor,
            oil_absorption_factor: self.oil_absorption_factor,
        }
    }
}

// kcal, protein, fat, carbs, fiber, sodium
#[rustfmt::skip]
const DEMO_FOODS: &[DemoFood] = &[
    DemoFood::base("arroz-branco-cozido", "Arroz, branco, cozido", states::COZIDO, [128.0, 2.5, 0.2, 28.1, 1.6, 1.0]),
    DemoFood::base("arroz-tipo1-cru", "Arroz, tipo 1, cru", states::CRU, [358.0, 7.2, 0.3, 78.8, 1.6, 1.0]),
    DemoFood::base("feijao-preto-cozido", "Feijao, preto, cozido", states::COZIDO, [77.0, 4.5, 0.5, 14.0, 8.4, 2.0]),
    DemoFood::base("feijao-preto-cru", "Feijao, preto, cru", states::CRU, [324.0, 21.3, 1.2, 58.8, 21.8, 0.0]),
    DemoFood::base("batata-inglesa-cozida", "Batata, inglesa, cozida", states::COZIDO, [52.0, 1.2, 0.0, 11.9, 1.3, 2.0]).oil(5.0),
    DemoFood::base("batata-inglesa-crua", "Batata, inglesa, crua", states::CRU, [64.0, 1.8, 0.0, 14.7, 1.2, 0.0]).edible(0.85).oil(5.0),
    DemoFood::base("frango-peito-cru", "Frango, peito, sem pele, cru", states::CRU, [119.0, 21.5, 3.0, 0.0, 0.0, 56.0]),
    DemoFood::base("frango-peito-grelhado", "Frango, peito, sem pele, grelhado", states::GRELHADO, [159.0, 32.0, 2.5, 0.0, 0.0, 50.0]),
    DemoFood::base("carne-bovina-patinho-cru", "Carne, bovina, patinho, sem gordura, cru", states::CRU, [133.0, 21.7, 4.5, 0.0, 0.0, 49.0]),
    DemoFood::base("carne-bovina-grelhada", "Carne, bovina, patinho, sem gordura, grelhada", states::GRELHADO, [219.0, 35.9, 7.3, 0.0, 0.0, 60.0]),
    DemoFood::base("carne-bovina-cozida", "Carne, bovina, acem, sem gordura, cozida", states::COZIDO, [215.0, 27.3, 10.9, 0.0, 0.0, 56.0]),
    DemoFood::base("ovo-galinha-cozido", "Ovo, de galinha, inteiro, cozido", states::COZIDO, [146.0, 13.3, 9.5, 0.6, 0.0, 146.0]),
    DemoFood::base("ovo-galinha-cru", "Ovo, de galinha, inteiro, cru", states::CRU, [143.0, 13.0, 8.9, 1.6, 0.0, 168.0]).edible(0.88).oil(4.0),
    DemoFood::base("ovo-galinha-frito", "Ovo, de galinha, inteiro, frito", states::FRITO, [240.0, 15.6, 18.6, 1.2, 0.0, 155.0]),
    DemoFood::base("leite-vaca-integral", "Leite, de vaca, integral", states::LIQUIDO, [61.0, 2.9, 3.2, 4.7, 0.0, 64.0]).density(1.03),
    DemoFood::base("azeite-oliva", "Azeite, de oliva, extra virgem", states::LIQUIDO, [884.0, 0.0, 100.0, 0.0, 0.0, 0.0]).density(0.92),
    DemoFood::base("banana-prata-crua", "Banana, prata, crua", states::CRU, [98.0, 1.3, 0.1, 26.0, 2.0, 0.0]).edible(0.66),
    DemoFood::base("mandioca-cozida", "Mandioca, cozida", states::COZIDO, [125.0, 0.6, 0.3, 30.1, 1.6, 1.0]),
    DemoFood::base("pao-frances", "Pao, trigo, frances", states::PRONTO, [300.0, 8.0, 3.1, 58.6, 2.3, 648.0]),
    DemoFood::base("queijo-minas-frescal", "Queijo, minas, frescal", states::PRONTO, [264.0, 17.4, 20.2, 3.2, 0.0, 31.0]),
    DemoFood::base("farofa-pronta", "Farofa, de mandioca, pronta", states::PRONTO, [406.0, 2.1, 9.1, 80.3, 7.8, 720.0]),
    // Category header row as shipped by composition tables
    DemoFood::base("leguminosas", "Leguminosas e derivados", states::RAW, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
];

const DEMO_ALIASES: &[(&str, &str)] = &[
    ("leite", "leite-vaca-integral"),
    ("leite integral", "leite-vaca-integral"),
    ("azeite", "azeite-oliva"),
    ("pao", "pao-frances"),
    ("pãozinho", "pao-frances"),
    ("aipim", "mandioca-cozida"),
    ("macaxeira", "mandioca-cozida"),
    ("peito de frango", "frango-peito-cru"),
    ("arroz cru", "arroz-tipo1-cru"),
    ("feijao cru", "feijao-preto-cru"),
    ("banana", "banana-prata-crua"),
];

const DEMO_YIELDS: &[(&str, &str, &str, f64)] = &[
    ("arroz-tipo1-cru", states::CRU, states::COZIDO, 2.5),
    ("feijao-preto-cru", states::CRU, states::COZIDO, 2.4),
    ("frango-peito-cru", states::CRU, states::GRELHADO, 0.72),
    ("carne-bovina-patinho-cru", states::CRU, states::GRELHADO, 0.68),
    ("batata-inglesa-crua", states::CRU, states::COZIDO, 0.9),
];

/// Counts written by a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Food records written
    pub foods: usize,
    /// Aliases written
    pub aliases: usize,
    /// Yield factors written
    pub yields: usize,
}

/// Demo food records
#[must_use]
pub fn demo_foods() -> Vec<CanonicalFood> {
    DEMO_FOODS.iter().map(DemoFood::to_food).collect()
}

/// Demo aliases as `(alias, food id)`
#[must_use]
pub fn demo_aliases() -> &'static [(&'static str, &'static str)] {
    DEMO_ALIASES
}

/// Demo yield factors
#[must_use]
pub fn demo_yields() -> Vec<YieldFactor> {
    DEMO_YIELDS
        .iter()
        .map(|&(food_id, from_state, to_state, factor)| YieldFactor {
            food_id: food_id.to_owned(),
            from_state: from_state.to_owned(),
            to_state: to_state.to_owned(),
            factor,
        })
        .collect()
}

/// Write the demo table; running it again updates rows in place
///
/// # Errors
///
/// Returns an error if any upsert fails
pub async fn seed_demo_data(repository: &FoodRepository) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    let started = Instant::now();
    for food in demo_foods() {
        repository.upsert_food(&food).await?;
        summary.foods += 1;
    }
    log_upserts("nutrition_foods", started);

    let started = Instant::now();
    for (alias, food_id) in DEMO_ALIASES {
        repository.upsert_alias(alias, food_id).await?;
        summary.aliases += 1;
    }
    log_upserts("nutrition_aliases", started);

    let started = Instant::now();
    for factor in demo_yields() {
        repository.upsert_yield(&factor).await?;
        summary.yields += 1;
    }
    log_upserts("nutrition_yields", started);

    info!(
        foods = summary.foods,
        aliases = summary.aliases,
        yields = summary.yields,
        "Demo reference data seeded"
    );
    Ok(summary)
}

fn log_upserts(table: &str, started: Instant) {
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_database_operation("upsert", table, true, elapsed_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_are_unique() {
        let foods = demo_foods();
        let ids: HashSet<_> = foods.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), foods.len());
    }

    #[test]
    fn test_aliases_and_yields_reference_known_foods() {
        let foods = demo_foods();
        let ids: HashSet<_> = foods.iter().map(|f| f.id.as_str()).collect();
        for (alias, food_id) in demo_aliases() {
            assert!(ids.contains(food_id), "alias {alias} points at {food_id}");
        }
        for factor in demo_yields() {
            assert!(ids.contains(factor.food_id.as_str()));
            assert!(factor.factor > 0.0);
        }
    }
}
