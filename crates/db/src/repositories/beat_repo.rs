//! Repository for the `beats` table and the `users_beats` ownership junction.
//!
//! The junction is a denormalized shortcut for ownership checks (beat ->
//! product -> artist -> account is the source chain). It is written in the
//! same transaction as the beat row, and every owner-scoped read or mutation
//! goes through it: the join condition *is* the authorization gate.

use sqlx::PgPool;

use beatstore_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::beat::{Beat, CreateBeat, UpdateBeat};
use crate::update::UpdateBuilder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product_id, bpm, key, path, tag, price, created_at, updated_at";

/// Alias-qualified column list for joins against `users_beats`.
const BT_COLUMNS: &str = "bt.id, bt.product_id, bt.bpm, bt.key, bt.path, bt.tag, bt.price, \
                          bt.created_at, bt.updated_at";

/// Provides CRUD and ownership-scoped operations for beats.
pub struct BeatRepo;

impl BeatRepo {
    /// Create a beat with its backing product and ownership link, returning
    /// the beat id.
    ///
    /// All three inserts run in one transaction: the product row, the beat
    /// row referencing it, and the `users_beats` link tying `owner_id` (the
    /// artist's account) to the new beat. Any failure rolls the whole unit
    /// back, so a partial product/beat/link triple is never visible.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        artist_id: DbId,
        input: &CreateBeat,
    ) -> DbResult<DbId> {
        let mut tx = pool.begin().await?;

        let product_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO products (artist_id, stripe_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(artist_id)
        .bind(&input.stripe_id)
        .fetch_one(&mut *tx)
        .await?;

        let beat_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO beats (product_id, bpm, key, path, tag, price) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(product_id)
        .bind(input.bpm)
        .bind(&input.key)
        .bind(&input.path)
        .bind(&input.tag)
        .bind(input.price)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO users_beats (user_id, beat_id) VALUES ($1, $2)")
            .bind(owner_id)
            .bind(beat_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(beat_id)
    }

    /// Fetch a beat by id, with no ownership scoping (public catalog read).
    pub async fn get(pool: &PgPool, beat_id: DbId) -> DbResult<Beat> {
        let query = format!("SELECT {COLUMNS} FROM beats WHERE id = $1");
        sqlx::query_as::<_, Beat>(&query)
            .bind(beat_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("beat"))
    }

    /// List all beats (public catalog read).
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Beat>> {
        let query = format!("SELECT {COLUMNS} FROM beats ORDER BY id");
        let beats = sqlx::query_as::<_, Beat>(&query).fetch_all(pool).await?;
        Ok(beats)
    }

    /// Fetch a beat only if `owner_id` owns it.
    ///
    /// A beat that exists but belongs to someone else is reported as
    /// [`DbError::NotFound`], never as a distinguishable "forbidden".
    pub async fn get_owned(pool: &PgPool, owner_id: DbId, beat_id: DbId) -> DbResult<Beat> {
        let query = format!(
            "SELECT {BT_COLUMNS} \
             FROM beats bt \
             INNER JOIN users_beats ub ON ub.beat_id = bt.id \
             WHERE ub.user_id = $1 AND bt.id = $2"
        );
        sqlx::query_as::<_, Beat>(&query)
            .bind(owner_id)
            .bind(beat_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("beat"))
    }

    /// List all beats owned by `owner_id`.
    pub async fn list_owned(pool: &PgPool, owner_id: DbId) -> DbResult<Vec<Beat>> {
        let query = format!(
            "SELECT {BT_COLUMNS} \
             FROM beats bt \
             INNER JOIN users_beats ub ON ub.beat_id = bt.id \
             WHERE ub.user_id = $1 \
             ORDER BY bt.id"
        );
        let beats = sqlx::query_as::<_, Beat>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await?;
        Ok(beats)
    }

    /// Partial update of a beat, scoped by the ownership join.
    ///
    /// Only non-`None` fields in `input` are applied. A valid `beat_id` with
    /// a mismatched `owner_id` matches zero rows and returns
    /// [`DbError::NotFound`]; there is no unscoped mutation path.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        beat_id: DbId,
        input: &UpdateBeat,
    ) -> DbResult<()> {
        let mut qb = UpdateBuilder::new();
        qb.set_opt("bpm", input.bpm)?;
        qb.set_opt("key", input.key.clone())?;
        qb.set_opt("path", input.path.clone())?;
        qb.set_opt("tag", input.tag.clone())?;
        qb.set_opt("price", input.price)?;

        if qb.is_empty() {
            return Err(DbError::InvalidPartialUpdate);
        }

        let beat_idx = qb.bind(beat_id)?;
        let owner_idx = qb.bind(owner_id)?;
        let query = format!(
            "UPDATE beats bt SET {} \
             FROM users_beats ub \
             WHERE bt.id = ub.beat_id AND ub.beat_id = ${beat_idx} AND ub.user_id = ${owner_idx}",
            qb.set_clause()
        );

        let result = sqlx::query_with(&query, qb.into_arguments()?)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("beat"));
        }
        Ok(())
    }

    /// Delete a beat, scoped by the ownership join.
    ///
    /// Removes only the beat row (the link row goes with it via FK cascade);
    /// product cleanup is a schema concern, not handled here.
    pub async fn delete(pool: &PgPool, owner_id: DbId, beat_id: DbId) -> DbResult<()> {
        let result = sqlx::query(
            "DELETE FROM beats bt \
             USING users_beats ub \
             WHERE bt.id = ub.beat_id AND ub.user_id = $1 AND ub.beat_id = $2",
        )
        .bind(owner_id)
        .bind(beat_id)
        .execute(pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("beat"));
        }
        Ok(())
    }
}
