//! Repository for the `artists` table (1:1 with accounts).

use sqlx::PgPool;

use beatstore_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::artist::Artist;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, stripe_id, created_at, updated_at";

/// Provides CRUD operations for artist profiles.
///
/// Artists are keyed by their owning account in every operation: an account
/// has at most one profile, and callers hold account ids, not artist ids.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Create an artist profile for an account, returning the artist id.
    ///
    /// A second profile for the same account violates the 1:1 unique
    /// constraint and surfaces as [`DbError::ConstraintViolation`].
    pub async fn create(pool: &PgPool, account_id: DbId) -> DbResult<DbId> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO artists (account_id) VALUES ($1) RETURNING id",
        )
        .bind(account_id)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Fetch the artist profile owned by an account.
    pub async fn get(pool: &PgPool, account_id: DbId) -> DbResult<Artist> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE account_id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("artist"))
    }

    /// List all artist profiles.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Artist>> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY id");
        let artists = sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await?;
        Ok(artists)
    }

    /// Fetch the owning account's credential hash, but only when an artist
    /// profile actually exists for that account (join-gated).
    pub async fn password_hash(pool: &PgPool, account_id: DbId) -> DbResult<String> {
        sqlx::query_scalar::<_, String>(
            "SELECT ac.password_hash \
             FROM accounts ac \
             INNER JOIN artists ar ON ar.account_id = ac.id \
             WHERE ar.account_id = $1",
        )
        .bind(account_id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound("artist"))
    }

    /// Attach a payment-processor account reference to the profile.
    pub async fn set_stripe_id(
        pool: &PgPool,
        account_id: DbId,
        stripe_id: &str,
    ) -> DbResult<()> {
        let result = sqlx::query("UPDATE artists SET stripe_id = $2 WHERE account_id = $1")
            .bind(account_id)
            .bind(stripe_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("artist"));
        }
        Ok(())
    }

    /// Delete the artist profile owned by an account. The account survives.
    pub async fn delete(pool: &PgPool, account_id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM artists WHERE account_id = $1")
            .bind(account_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("artist"));
        }
        Ok(())
    }
}
