//! Repository for the `playlists` table and the `playlists_beats` junction.

use sqlx::PgPool;

use beatstore_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::beat::Beat;
use crate::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
use crate::update::UpdateBuilder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, name, created_at, updated_at";

/// Alias-qualified beat columns for membership joins.
const BT_COLUMNS: &str = "bt.id, bt.product_id, bt.bpm, bt.key, bt.path, bt.tag, bt.price, \
                          bt.created_at, bt.updated_at";

/// Provides CRUD and membership operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Create a playlist for an account, returning the assigned id.
    pub async fn create(
        pool: &PgPool,
        account_id: DbId,
        input: &CreatePlaylist,
    ) -> DbResult<DbId> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO playlists (account_id, name) VALUES ($1, $2) RETURNING id",
        )
        .bind(account_id)
        .bind(&input.name)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Fetch a playlist by id (public read).
    pub async fn get(pool: &PgPool, playlist_id: DbId) -> DbResult<Playlist> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(playlist_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("playlist"))
    }

    /// List all playlists.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Playlist>> {
        let query = format!("SELECT {COLUMNS} FROM playlists ORDER BY id");
        let playlists = sqlx::query_as::<_, Playlist>(&query).fetch_all(pool).await?;
        Ok(playlists)
    }

    /// Fetch a playlist only if `account_id` owns it.
    pub async fn get_for_account(
        pool: &PgPool,
        account_id: DbId,
        playlist_id: DbId,
    ) -> DbResult<Playlist> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1 AND account_id = $2");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(playlist_id)
            .bind(account_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("playlist"))
    }

    /// List all playlists owned by an account.
    pub async fn list_for_account(pool: &PgPool, account_id: DbId) -> DbResult<Vec<Playlist>> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE account_id = $1 ORDER BY id");
        let playlists = sqlx::query_as::<_, Playlist>(&query)
            .bind(account_id)
            .fetch_all(pool)
            .await?;
        Ok(playlists)
    }

    /// Partial update of a playlist, scoped by the owning account.
    pub async fn update(
        pool: &PgPool,
        account_id: DbId,
        playlist_id: DbId,
        input: &UpdatePlaylist,
    ) -> DbResult<()> {
        let mut qb = UpdateBuilder::new();
        qb.set_opt("name", input.name.clone())?;

        if qb.is_empty() {
            return Err(DbError::InvalidPartialUpdate);
        }

        let id_idx = qb.bind(playlist_id)?;
        let owner_idx = qb.bind(account_id)?;
        let query = format!(
            "UPDATE playlists SET {} WHERE id = ${id_idx} AND account_id = ${owner_idx}",
            qb.set_clause()
        );

        let result = sqlx::query_with(&query, qb.into_arguments()?)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("playlist"));
        }
        Ok(())
    }

    /// Delete a playlist, scoped by the owning account.
    pub async fn delete(pool: &PgPool, account_id: DbId, playlist_id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1 AND account_id = $2")
            .bind(playlist_id)
            .bind(account_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("playlist"));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Membership (playlists_beats junction)
    // -----------------------------------------------------------------------

    /// Add a beat to a playlist.
    ///
    /// A dangling playlist or beat id surfaces as
    /// [`DbError::ConstraintViolation`]; so does adding the same beat twice.
    pub async fn add_beat(pool: &PgPool, playlist_id: DbId, beat_id: DbId) -> DbResult<()> {
        sqlx::query("INSERT INTO playlists_beats (playlist_id, beat_id) VALUES ($1, $2)")
            .bind(playlist_id)
            .bind(beat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Fetch a beat only if it is a member of the playlist.
    pub async fn get_beat(pool: &PgPool, playlist_id: DbId, beat_id: DbId) -> DbResult<Beat> {
        let query = format!(
            "SELECT {BT_COLUMNS} \
             FROM beats bt \
             INNER JOIN playlists_beats pb ON pb.beat_id = bt.id \
             WHERE pb.playlist_id = $1 AND bt.id = $2"
        );
        sqlx::query_as::<_, Beat>(&query)
            .bind(playlist_id)
            .bind(beat_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("beat"))
    }

    /// List all member beats of a playlist.
    pub async fn list_beats(pool: &PgPool, playlist_id: DbId) -> DbResult<Vec<Beat>> {
        let query = format!(
            "SELECT {BT_COLUMNS} \
             FROM beats bt \
             INNER JOIN playlists_beats pb ON pb.beat_id = bt.id \
             WHERE pb.playlist_id = $1 \
             ORDER BY bt.id"
        );
        let beats = sqlx::query_as::<_, Beat>(&query)
            .bind(playlist_id)
            .fetch_all(pool)
            .await?;
        Ok(beats)
    }

    /// Fetch a member beat, additionally requiring the playlist to belong to
    /// `account_id`. A foreign playlist reads as [`DbError::NotFound`].
    pub async fn get_beat_for_account(
        pool: &PgPool,
        account_id: DbId,
        playlist_id: DbId,
        beat_id: DbId,
    ) -> DbResult<Beat> {
        let query = format!(
            "SELECT {BT_COLUMNS} \
             FROM beats bt \
             INNER JOIN playlists_beats pb ON pb.beat_id = bt.id \
             INNER JOIN playlists pl ON pl.id = pb.playlist_id \
             WHERE pl.account_id = $1 AND pb.playlist_id = $2 AND bt.id = $3"
        );
        sqlx::query_as::<_, Beat>(&query)
            .bind(account_id)
            .bind(playlist_id)
            .bind(beat_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("beat"))
    }

    /// List member beats of a playlist owned by `account_id`.
    pub async fn list_beats_for_account(
        pool: &PgPool,
        account_id: DbId,
        playlist_id: DbId,
    ) -> DbResult<Vec<Beat>> {
        let query = format!(
            "SELECT {BT_COLUMNS} \
             FROM beats bt \
             INNER JOIN playlists_beats pb ON pb.beat_id = bt.id \
             INNER JOIN playlists pl ON pl.id = pb.playlist_id \
             WHERE pl.account_id = $1 AND pb.playlist_id = $2 \
             ORDER BY bt.id"
        );
        let beats = sqlx::query_as::<_, Beat>(&query)
            .bind(account_id)
            .bind(playlist_id)
            .fetch_all(pool)
            .await?;
        Ok(beats)
    }

    /// Remove a beat from a playlist. The beat row itself is untouched.
    pub async fn remove_beat(pool: &PgPool, playlist_id: DbId, beat_id: DbId) -> DbResult<()> {
        let result =
            sqlx::query("DELETE FROM playlists_beats WHERE playlist_id = $1 AND beat_id = $2")
                .bind(playlist_id)
                .bind(beat_id)
                .execute(pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("beat"));
        }
        Ok(())
    }
}
