// ABOUTME: Nutrition resolution and calculation engine
// ABOUTME: Resolves free-text food entries, normalizes quantities and derives nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutricalc Engine
//!
//! Stateless per-request pipeline:
//!
//! 1. **resolver** turns a free-text name into a `CanonicalFood`
//!    (alias, then trigram similarity, then substring, with a corrective
//!    re-search when the chosen record is a zero-macro placeholder)
//! 2. **quantity** converts grams or milliliters into grams
//! 3. **corrections** applies edible portion and cooking yield
//! 4. **calculator** scales per-100 g values and derives energy from macros
//! 5. **aggregator** sums item nutrients into request totals
//!
//! Reference data is reached only through the [`store::FoodStore`] trait.

/// Per-item nutrient totals
pub mod aggregator;
/// Nutrient scaling and energy derivation
pub mod calculator;
/// Edible portion and cooking yield corrections
pub mod corrections;
/// Engine entry point and configuration
pub mod engine;
/// Text normalization for alias matching
pub mod normalizer;
/// Grams / milliliters normalization
pub mod quantity;
/// Multi-stage food resolution
pub mod resolver;
/// Trigram similarity scoring
pub mod similarity;
/// Preparation state priority
pub mod state;
/// Reference data lookup interface
pub mod store;
/// Colloquial name synonyms
pub mod synonyms;
/// Heuristic cooking yield guesses
pub mod yield_guess;

pub use engine::{EngineConfig, NutritionEngine};
pub use store::{FoodStore, InMemoryFoodStore};
