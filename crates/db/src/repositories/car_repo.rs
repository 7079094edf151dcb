//! Repository for the `cars` table.

use carkat_core::search::{build_filter_sql, like_pattern, search_tokens, SortKey};
use carkat_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::{Car, CarFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, brand, model, generation, body, engines, drive, \
    car_class, years, country, weak_points, photo_filename, price_min, \
    price_max, created_at, updated_at";

/// Provides CRUD and catalog-query operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car, returning the created row.
    pub async fn create(pool: &PgPool, input: &CarFields) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars
                (brand, model, generation, body, engines, drive, car_class,
                 years, country, weak_points, price_min, price_max)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(&input.generation)
            .bind(&input.body)
            .bind(&input.engines)
            .bind(&input.drive)
            .bind(&input.car_class)
            .bind(&input.years)
            .bind(&input.country)
            .bind(&input.weak_points)
            .bind(input.price_min)
            .bind(input.price_max)
            .fetch_one(pool)
            .await
    }

    /// Find a car by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full-replace update: every descriptive field and both prices are
    /// overwritten with the values in `input`. Last write wins; there is no
    /// version check. The photo reference is not touched here, see
    /// [`CarRepo::set_photo`].
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CarFields,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET
                brand = $2, model = $3, generation = $4, body = $5,
                engines = $6, drive = $7, car_class = $8, years = $9,
                country = $10, weak_points = $11, price_min = $12,
                price_max = $13, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(&input.generation)
            .bind(&input.body)
            .bind(&input.engines)
            .bind(&input.drive)
            .bind(&input.car_class)
            .bind(&input.years)
            .bind(&input.country)
            .bind(&input.weak_points)
            .bind(input.price_min)
            .bind(input.price_max)
            .fetch_optional(pool)
            .await
    }

    /// Point the car at a newly stored photo file.
    ///
    /// Kept separate from [`CarRepo::update`] so a rejected or absent upload
    /// never clears an existing photo reference.
    pub async fn set_photo(
        pool: &PgPool,
        id: DbId,
        filename: &str,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET photo_filename = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(filename)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Filtered and sorted catalog listing.
    ///
    /// The query string is tokenized; every token must match at least one
    /// searchable field as a case-insensitive substring (tokens may match
    /// different fields). An empty or whitespace-only query applies no
    /// filter and returns the full listing. An empty result set is a valid
    /// outcome, not an error.
    pub async fn catalog(
        pool: &PgPool,
        query_text: &str,
        sort: SortKey,
    ) -> Result<Vec<Car>, sqlx::Error> {
        let tokens = search_tokens(query_text);

        let mut sql = format!("SELECT {COLUMNS} FROM cars");
        if let Some(tokens) = &tokens {
            sql.push_str(" WHERE ");
            sql.push_str(&build_filter_sql(tokens.len(), 1));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(sort.order_clause());

        let mut query = sqlx::query_as::<_, Car>(&sql);
        if let Some(tokens) = &tokens {
            for token in tokens {
                query = query.bind(like_pattern(token));
            }
        }
        query.fetch_all(pool).await
    }
}
