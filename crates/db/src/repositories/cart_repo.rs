//! Repository for the `carts` junction (beats pending purchase per account).

use sqlx::PgPool;

use beatstore_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::beat::Beat;

/// Alias-qualified beat columns for cart joins.
const BT_COLUMNS: &str = "bt.id, bt.product_id, bt.bpm, bt.key, bt.path, bt.tag, bt.price, \
                          bt.created_at, bt.updated_at";

/// Provides cart operations. The cart is a plain junction: rows are added
/// and removed, the beats themselves are never mutated through it.
pub struct CartRepo;

impl CartRepo {
    /// Put a beat into an account's cart.
    ///
    /// Adding the same beat twice violates the composite primary key and
    /// surfaces as [`DbError::ConstraintViolation`].
    pub async fn add_beat(pool: &PgPool, account_id: DbId, beat_id: DbId) -> DbResult<()> {
        sqlx::query("INSERT INTO carts (account_id, beat_id) VALUES ($1, $2)")
            .bind(account_id)
            .bind(beat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Fetch a beat only if it sits in the account's cart.
    pub async fn get_beat(pool: &PgPool, account_id: DbId, beat_id: DbId) -> DbResult<Beat> {
        let query = format!(
            "SELECT {BT_COLUMNS} \
             FROM beats bt \
             INNER JOIN carts ct ON ct.beat_id = bt.id \
             WHERE ct.account_id = $1 AND bt.id = $2"
        );
        sqlx::query_as::<_, Beat>(&query)
            .bind(account_id)
            .bind(beat_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("beat"))
    }

    /// List all beats in the account's cart.
    pub async fn list_beats(pool: &PgPool, account_id: DbId) -> DbResult<Vec<Beat>> {
        let query = format!(
            "SELECT {BT_COLUMNS} \
             FROM beats bt \
             INNER JOIN carts ct ON ct.beat_id = bt.id \
             WHERE ct.account_id = $1 \
             ORDER BY bt.id"
        );
        let beats = sqlx::query_as::<_, Beat>(&query)
            .bind(account_id)
            .fetch_all(pool)
            .await?;
        Ok(beats)
    }

    /// Take a single beat out of the cart.
    pub async fn remove_beat(pool: &PgPool, account_id: DbId, beat_id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM carts WHERE account_id = $1 AND beat_id = $2")
            .bind(account_id)
            .bind(beat_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("beat"));
        }
        Ok(())
    }

    /// Empty the account's cart. Clearing an already-empty cart is a no-op.
    pub async fn clear(pool: &PgPool, account_id: DbId) -> DbResult<()> {
        sqlx::query("DELETE FROM carts WHERE account_id = $1")
            .bind(account_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
