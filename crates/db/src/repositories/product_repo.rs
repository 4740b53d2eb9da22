//! Repository for the `products` table.

use sqlx::PgPool;

use beatstore_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_id, stripe_id, created_at, updated_at";

/// Provides operations for standalone product rows.
///
/// Beat-backed products are created inside [`BeatRepo::create`] so the
/// beat/product/ownership triple stays atomic; this repository covers direct
/// payment flows that deal in products alone.
///
/// [`BeatRepo::create`]: crate::repositories::BeatRepo::create
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product for an artist, returning the assigned id.
    ///
    /// A dangling `artist_id` surfaces as [`DbError::ConstraintViolation`].
    pub async fn create(pool: &PgPool, artist_id: DbId, stripe_id: &str) -> DbResult<DbId> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO products (artist_id, stripe_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(artist_id)
        .bind(stripe_id)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Fetch a product by id.
    pub async fn get(pool: &PgPool, id: DbId) -> DbResult<Product> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("product"))
    }

    /// List all products created by an artist.
    pub async fn list_for_artist(pool: &PgPool, artist_id: DbId) -> DbResult<Vec<Product>> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE artist_id = $1 ORDER BY id");
        let products = sqlx::query_as::<_, Product>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await?;
        Ok(products)
    }
}
