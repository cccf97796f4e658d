// ABOUTME: SQLite-backed food store answering alias, similarity, substring, food and yield lookups
// ABOUTME: Also provides the upserts used to load fixtures and demo reference data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nutricalc_core::errors::AppResult;
use nutricalc_core::models::{CanonicalFood, FoodMatch, YieldFactor};
use nutricalc_engine::normalizer::normalize;
use nutricalc_engine::similarity::{rank_matches, trigram_similarity, SIMILARITY_THRESHOLD};
use nutricalc_engine::FoodStore;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const FOOD_COLUMNS: &str = "id, canonical_name, locale, state, kcal, protein_g, fat_g, carbs_g, \
     fiber_g, sodium_mg, density_g_ml, edible_portion_factor, oil_absorption_factor";

/// Food reference repository
#[derive(Clone, Debug)]
pub struct FoodRepository {
    pool: SqlitePool,
}

impl FoodRepository {
    /// Repository over an open pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace a food record
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails, including when another record
    /// already holds the same name, locale and state
    pub async fn upsert_food(&self, food: &CanonicalFood) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO nutrition_foods (
                id, canonical_name, name_normalized, locale, state, kcal, protein_g, fat_g,
                carbs_g, fiber_g, sodium_mg, density_g_ml, edible_portion_factor,
                oil_absorption_factor
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT(id) DO UPDATE SET
                canonical_name = excluded.canonical_name,
                name_normalized = excluded.name_normalized,
                locale = excluded.locale,
                state = excluded.state,
                kcal = excluded.kcal,
                protein_g = excluded.protein_g,
                fat_g = excluded.fat_g,
                carbs_g = excluded.carbs_g,
                fiber_g = excluded.fiber_g,
                sodium_mg = excluded.sodium_mg,
                density_g_ml = excluded.density_g_ml,
                edible_portion_factor = excluded.edible_portion_factor,
                oil_absorption_factor = excluded.oil_absorption_factor
            ",
        )
        .bind(&food.id)
        .bind(&food.canonical_name)
        .bind(normalize(&food.canonical_name))
        .bind(&food.locale)
        .bind(&food.state)
        .bind(food.kcal)
        .bind(food.protein_g)
        .bind(food.fat_g)
        .bind(food.carbs_g)
        .bind(food.fiber_g)
        .bind(food.sodium_mg)
        .bind(food.density_g_ml)
        .bind(food.edible_portion_factor)
        .bind(food.oil_absorption_factor)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Point an alias at a food; the alias is normalized before storage
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn upsert_alias(&self, alias: &str, food_id: &str) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO nutrition_aliases (alias_normalized, food_id) VALUES ($1, $2)
            ON CONFLICT(alias_normalized) DO UPDATE SET food_id = excluded.food_id
            ",
        )
        .bind(normalize(alias))
        .bind(food_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Store a cooking yield factor
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or `factor` is not positive
    pub async fn upsert_yield(&self, factor: &YieldFactor) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO nutrition_yields (food_id, from_state, to_state, factor)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(food_id, from_state, to_state) DO UPDATE SET factor = excluded.factor
            ",
        )
        .bind(&factor.food_id)
        .bind(&factor.from_state)
        .bind(&factor.to_state)
        .bind(factor.factor)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of stored food records
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_foods(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM nutrition_foods")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("total")?)
    }
}

#[async_trait]
impl FoodStore for FoodRepository {
    async fn find_alias(&self, alias_normalized: &str) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT food_id FROM nutrition_aliases WHERE alias_normalized = $1")
            .bind(alias_normalized)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.try_get("food_id")).transpose()?)
    }

    async fn search_similar(
        &self,
        query: &str,
        locale: &str,
        limit: usize,
    ) -> AppResult<Vec<FoodMatch>> {
        let rows = sqlx::query("SELECT id, canonical_name FROM nutrition_foods WHERE locale = $1")
            .bind(locale)
            .fetch_all(&self.pool)
            .await?;

        let mut matches = Vec::new();
        for row in rows {
            let canonical_name: String = row.try_get("canonical_name")?;
            let similarity = trigram_similarity(query, &canonical_name);
            if similarity >= SIMILARITY_THRESHOLD {
                matches.push(FoodMatch {
                    id: row.try_get("id")?,
                    canonical_name,
                    similarity,
                });
            }
        }

        rank_matches(&mut matches);
        matches.truncate(limit);
        Ok(matches)
    }

    async fn search_contains(
        &self,
        needle: &str,
        locale: &str,
        limit: usize,
    ) -> AppResult<Vec<CanonicalFood>> {
        // SQLite LIKE folds ASCII only, so accented capitals are compared here
        let sql = format!(
            "SELECT {FOOD_COLUMNS} FROM nutrition_foods WHERE locale = $1 ORDER BY canonical_name"
        );
        let rows = sqlx::query(&sql)
            .bind(locale)
            .fetch_all(&self.pool)
            .await?;

        let needle = needle.to_lowercase();
        let mut hits = Vec::new();
        for row in &rows {
            if hits.len() >= limit {
                break;
            }
            let canonical_name: String = row.try_get("canonical_name")?;
            if canonical_name.to_lowercase().contains(&needle) {
                hits.push(row_to_food(row)?);
            }
        }
        Ok(hits)
    }

    async fn get_food(&self, id: &str) -> AppResult<Option<CanonicalFood>> {
        let sql = format!("SELECT {FOOD_COLUMNS} FROM nutrition_foods WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_food).transpose()
    }

    async fn get_yield(
        &self,
        food_id: &str,
        from_state: &str,
        to_state: &str,
    ) -> AppResult<Option<YieldFactor>> {
        let row = sqlx::query(
            r"
            SELECT food_id, from_state, to_state, factor FROM nutrition_yields
            WHERE food_id = $1 AND from_state = $2 AND to_state = $3
            ",
        )
        .bind(food_id)
        .bind(from_state)
        .bind(to_state)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(YieldFactor {
            food_id: row.try_get("food_id")?,
            from_state: row.try_get("from_state")?,
            to_state: row.try_get("to_state")?,
            factor: row.try_get("factor")?,
        }))
    }
}

/// Convert a `nutrition_foods` row into a food record
fn row_to_food(row: &SqliteRow) -> AppResult<CanonicalFood> {
    Ok(CanonicalFood {
        id: row.try_get("id")?,
        canonical_name: row.try_get("canonical_name")?,
        locale: row.try_get("locale")?,
        state: row.try_get("state")?,
        kcal: row.try_get("kcal")?,
        protein_g: row.try_get("protein_g")?,
        fat_g: row.try_get("fat_g")?,
        carbs_g: row.try_get("carbs_g")?,
        fiber_g: row.try_get("fiber_g")?,
        sodium_mg: row.try_get("sodium_mg")?,
        density_g_ml: row.try_get("density_g_ml")?,
        edible_portion_factor: row.try_get("edible_portion_factor")?,
        oil_absorption_factor: row.try_get("oil_absorption_factor")?,
    })
}
