//! Playlist entity model and DTOs.

use beatstore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Playlist row from the `playlists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub account_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new playlist.
#[derive(Debug, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
}

/// DTO for updating an existing playlist. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlaylist {
    pub name: Option<String>,
}
