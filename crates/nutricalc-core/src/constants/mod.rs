// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy conversion factors, preparation state names and locale defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values that more than one crate needs to agree on live here.

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Protein energy density
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate energy density
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat energy density (also used for absorbed frying oil)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Nutrient values in reference data are expressed per this many grams
    pub const REFERENCE_MASS_G: f64 = 100.0;
}

/// Preparation state identifiers as stored in reference data
pub mod states {
    /// Raw, the fallback state when a record carries none
    pub const RAW: &str = "raw";
    /// Raw (Portuguese spelling used by user input and yield tables)
    pub const CRU: &str = "cru";
    /// Cooked in water
    pub const COZIDO: &str = "cozido";
    /// Grilled
    pub const GRELHADO: &str = "grelhado";
    /// Roasted
    pub const ASSADO: &str = "assado";
    /// Fried; triggers the oil absorption adjustment
    pub const FRITO: &str = "frito";
    /// Ready-made dish
    pub const PRONTO: &str = "pronto";
    /// Liquid
    pub const LIQUIDO: &str = "liquido";
}

/// Locale defaults
pub mod locale {
    /// The only locale the reference database ships with
    pub const DEFAULT_LOCALE: &str = "pt-BR";
}
