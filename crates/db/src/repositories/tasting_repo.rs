//! Repository for the `tasting_records` table.
//!
//! Every operation touches exactly one row (or lists all of them); the
//! database's single-row atomicity is the only concurrency control.

use sqlx::PgPool;
use vinoteca_core::types::RecordId;

use crate::models::tasting::{NewTasting, TastingRecord};

/// Column list for `tasting_records` queries.
const TASTING_COLUMNS: &str = "\
    id, wine_name, producer, vintage, region, varieties, \
    tasting_date, comment, created_at";

/// Provides CRUD operations for tasting records.
pub struct TastingRepo;

impl TastingRepo {
    /// List every record, newest tasting date first.
    ///
    /// Rows without a tasting date sort wherever PostgreSQL puts nulls on a
    /// descending order (first).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TastingRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {TASTING_COLUMNS} FROM tasting_records \
             ORDER BY tasting_date DESC"
        );
        sqlx::query_as::<_, TastingRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a record by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: RecordId,
    ) -> Result<Option<TastingRecord>, sqlx::Error> {
        let query = format!("SELECT {TASTING_COLUMNS} FROM tasting_records WHERE id = $1");
        sqlx::query_as::<_, TastingRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new record. The database assigns the id; `created_at` is
    /// stamped with the current time at request processing.
    pub async fn create(
        pool: &PgPool,
        input: &NewTasting,
    ) -> Result<TastingRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasting_records \
             (wine_name, producer, vintage, region, varieties, tasting_date, comment, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {TASTING_COLUMNS}"
        );
        sqlx::query_as::<_, TastingRecord>(&query)
            .bind(&input.wine_name)
            .bind(input.producer.as_deref())
            .bind(input.vintage)
            .bind(input.region.as_deref())
            .bind(input.varieties.as_deref())
            .bind(input.tasting_date)
            .bind(input.comment.as_deref())
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable field of an existing record. `id` and
    /// `created_at` never change. Returns `None` when no row matches.
    pub async fn update(
        pool: &PgPool,
        id: RecordId,
        input: &NewTasting,
    ) -> Result<Option<TastingRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE tasting_records \
             SET wine_name = $2, producer = $3, vintage = $4, region = $5, \
                 varieties = $6, tasting_date = $7, comment = $8 \
             WHERE id = $1 \
             RETURNING {TASTING_COLUMNS}"
        );
        sqlx::query_as::<_, TastingRecord>(&query)
            .bind(id)
            .bind(&input.wine_name)
            .bind(input.producer.as_deref())
            .bind(input.vintage)
            .bind(input.region.as_deref())
            .bind(input.varieties.as_deref())
            .bind(input.tasting_date)
            .bind(input.comment.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a record. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasting_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
