// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig and the engine's EngineConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use nutricalc_core::errors::{AppError, AppResult};
use nutricalc_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{cache, defaults, env_vars, locale};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if running in production
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory SQLite (tests and demos)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string
    ///
    /// Accepts `sqlite:<path>`, `sqlite::memory:` and bare file paths.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty value or a non-SQLite scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config_invalid("DATABASE_URL is empty"));
        }
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.trim_start_matches("//");
            if path_str == ":memory:" {
                return Ok(Self::Memory);
            }
            return Ok(Self::SQLite {
                path: PathBuf::from(path_str),
            });
        }
        if s.contains("://") {
            return Err(AppError::config_invalid(format!(
                "Unsupported database scheme in DATABASE_URL: {s}"
            )));
        }
        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/nutrition.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Food database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Engine behavior switches as loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Null nutrients for unquantifiable items instead of explicit zeros
    pub strict_mode: bool,
    /// Never consult the heuristic yield table
    pub disable_yield_guess: bool,
    /// Locale used when a request names none
    pub default_locale: String,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            strict_mode: true,
            disable_yield_guess: true,
            default_locale: locale::DEFAULT_LOCALE.to_owned(),
        }
    }
}

/// Read-through lookup cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Wrap the food store in a cache
    pub enabled: bool,
    /// LRU capacity
    pub max_entries: usize,
    /// Entry lifetime in seconds
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: cache::DEFAULT_MAX_ENTRIES,
            ttl_secs: cache::DEFAULT_TTL_SECS,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Food database
    pub database: DatabaseConfig,
    /// Engine switches
    pub nutrition: NutritionConfig,
    /// Lookup cache
    pub cache: CacheSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            nutrition: NutritionConfig::default(),
            cache: CacheSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_env(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            host: env_var_or(env_vars::HOST, defaults::HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                defaults::ENVIRONMENT,
            )),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    env_vars::DATABASE_URL,
                    defaults::DATABASE_URL,
                ))?,
            },
            nutrition: NutritionConfig {
                strict_mode: parse_bool_env(env_vars::STRICT_MODE, true)?,
                disable_yield_guess: parse_bool_env(env_vars::DISABLE_YIELD_GUESS, true)?,
                default_locale: non_empty_env(env_vars::DEFAULT_LOCALE)
                    .unwrap_or_else(|| locale::DEFAULT_LOCALE.to_owned()),
            },
            cache: CacheSettings {
                enabled: parse_bool_env(env_vars::CACHE_ENABLED, true)?,
                max_entries: parse_env(env_vars::CACHE_MAX_ENTRIES, cache::DEFAULT_MAX_ENTRIES)?,
                ttl_secs: parse_env(env_vars::CACHE_TTL_SECS, cache::DEFAULT_TTL_SECS)?,
            },
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Engine configuration derived from the nutrition section
    #[must_use]
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            strict_mode: self.nutrition.strict_mode,
            disable_yield_guess: self.nutrition.disable_yield_guess,
            default_locale: self.nutrition.default_locale.clone(),
        }
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutricalc Server Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Strict Mode: {}\n\
             - Yield Guess: {}\n\
             - Default Locale: {}\n\
             - Lookup Cache: {}",
            self.host,
            self.http_port,
            self.environment,
            if self.database.url.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            self.nutrition.strict_mode,
            if self.nutrition.disable_yield_guess {
                "Disabled"
            } else {
                "Enabled"
            },
            self.nutrition.default_locale,
            if self.cache.enabled {
                format!(
                    "Enabled ({} entries, {}s TTL)",
                    self.cache.max_entries, self.cache.ttl_secs
                )
            } else {
                "Disabled".to_owned()
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Trimmed variable value, `None` when unset or blank
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse a variable with `FromStr`, using `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    non_empty_env(key).map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
    })
}

/// Parse a boolean variable, using `default` when unset
fn parse_bool_env(key: &str, default: bool) -> AppResult<bool> {
    non_empty_env(key).map_or(Ok(default), |raw| {
        parse_bool(&raw)
            .ok_or_else(|| AppError::config_invalid(format!("Invalid {key} value '{raw}'")))
    })
}

/// Accepts `true/false/1/0/yes/no` in any case
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
