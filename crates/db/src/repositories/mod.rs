//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. The [`Repositories`] facade binds
//! one pool to all of them for the service layer.

pub mod account_repo;
pub mod artist_repo;
pub mod beat_repo;
pub mod cart_repo;
pub mod playlist_repo;
pub mod product_repo;

pub use account_repo::AccountRepo;
pub use artist_repo::ArtistRepo;
pub use beat_repo::BeatRepo;
pub use cart_repo::CartRepo;
pub use playlist_repo::PlaylistRepo;
pub use product_repo::ProductRepo;

use sqlx::PgPool;

use beatstore_core::types::DbId;

use crate::error::DbResult;
use crate::models::account::{Account, CreateAccount, UpdateAccount};
use crate::models::artist::Artist;
use crate::models::beat::{Beat, CreateBeat, UpdateBeat};
use crate::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
use crate::models::product::Product;

/// Aggregates all entity repositories behind one handle.
///
/// Constructed once at process start from a single pool and passed to the
/// service layer. Pure composition: every method forwards to the matching
/// zero-sized repository with the pool bound, nothing else.
#[derive(Clone)]
pub struct Repositories {
    pool: PgPool,
}

impl Repositories {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for callers that need raw statements (tests).
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { pool: &self.pool }
    }

    pub fn artists(&self) -> Artists<'_> {
        Artists { pool: &self.pool }
    }

    pub fn products(&self) -> Products<'_> {
        Products { pool: &self.pool }
    }

    pub fn beats(&self) -> Beats<'_> {
        Beats { pool: &self.pool }
    }

    pub fn playlists(&self) -> Playlists<'_> {
        Playlists { pool: &self.pool }
    }

    pub fn carts(&self) -> Carts<'_> {
        Carts { pool: &self.pool }
    }
}

/// [`AccountRepo`] with the pool bound.
pub struct Accounts<'a> {
    pool: &'a PgPool,
}

impl Accounts<'_> {
    pub async fn create(&self, input: &CreateAccount) -> DbResult<DbId> {
        AccountRepo::create(self.pool, input).await
    }

    pub async fn find_by_credentials(&self, email: &str, password_hash: &str) -> DbResult<DbId> {
        AccountRepo::find_by_credentials(self.pool, email, password_hash).await
    }

    pub async fn get(&self, id: DbId) -> DbResult<Account> {
        AccountRepo::get(self.pool, id).await
    }

    pub async fn list(&self) -> DbResult<Vec<Account>> {
        AccountRepo::list(self.pool).await
    }

    pub async fn confirm(&self, id: DbId) -> DbResult<()> {
        AccountRepo::confirm(self.pool, id).await
    }

    pub async fn update(&self, id: DbId, input: &UpdateAccount) -> DbResult<()> {
        AccountRepo::update(self.pool, id, input).await
    }

    pub async fn password_hash(&self, id: DbId) -> DbResult<String> {
        AccountRepo::password_hash(self.pool, id).await
    }

    pub async fn delete(&self, id: DbId) -> DbResult<()> {
        AccountRepo::delete(self.pool, id).await
    }
}

/// [`ArtistRepo`] with the pool bound.
pub struct Artists<'a> {
    pool: &'a PgPool,
}

impl Artists<'_> {
    pub async fn create(&self, account_id: DbId) -> DbResult<DbId> {
        ArtistRepo::create(self.pool, account_id).await
    }

    pub async fn get(&self, account_id: DbId) -> DbResult<Artist> {
        ArtistRepo::get(self.pool, account_id).await
    }

    pub async fn list(&self) -> DbResult<Vec<Artist>> {
        ArtistRepo::list(self.pool).await
    }

    pub async fn password_hash(&self, account_id: DbId) -> DbResult<String> {
        ArtistRepo::password_hash(self.pool, account_id).await
    }

    pub async fn set_stripe_id(&self, account_id: DbId, stripe_id: &str) -> DbResult<()> {
        ArtistRepo::set_stripe_id(self.pool, account_id, stripe_id).await
    }

    pub async fn delete(&self, account_id: DbId) -> DbResult<()> {
        ArtistRepo::delete(self.pool, account_id).await
    }
}

/// [`ProductRepo`] with the pool bound.
pub struct Products<'a> {
    pool: &'a PgPool,
}

impl Products<'_> {
    pub async fn create(&self, artist_id: DbId, stripe_id: &str) -> DbResult<DbId> {
        ProductRepo::create(self.pool, artist_id, stripe_id).await
    }

    pub async fn get(&self, id: DbId) -> DbResult<Product> {
        ProductRepo::get(self.pool, id).await
    }

    pub async fn list_for_artist(&self, artist_id: DbId) -> DbResult<Vec<Product>> {
        ProductRepo::list_for_artist(self.pool, artist_id).await
    }
}

/// [`BeatRepo`] with the pool bound.
pub struct Beats<'a> {
    pool: &'a PgPool,
}

impl Beats<'_> {
    pub async fn create(
        &self,
        owner_id: DbId,
        artist_id: DbId,
        input: &CreateBeat,
    ) -> DbResult<DbId> {
        BeatRepo::create(self.pool, owner_id, artist_id, input).await
    }

    pub async fn get(&self, beat_id: DbId) -> DbResult<Beat> {
        BeatRepo::get(self.pool, beat_id).await
    }

    pub async fn list(&self) -> DbResult<Vec<Beat>> {
        BeatRepo::list(self.pool).await
    }

    pub async fn get_owned(&self, owner_id: DbId, beat_id: DbId) -> DbResult<Beat> {
        BeatRepo::get_owned(self.pool, owner_id, beat_id).await
    }

    pub async fn list_owned(&self, owner_id: DbId) -> DbResult<Vec<Beat>> {
        BeatRepo::list_owned(self.pool, owner_id).await
    }

    pub async fn update(&self, owner_id: DbId, beat_id: DbId, input: &UpdateBeat) -> DbResult<()> {
        BeatRepo::update(self.pool, owner_id, beat_id, input).await
    }

    pub async fn delete(&self, owner_id: DbId, beat_id: DbId) -> DbResult<()> {
        BeatRepo::delete(self.pool, owner_id, beat_id).await
    }
}

/// [`PlaylistRepo`] with the pool bound.
pub struct Playlists<'a> {
    pool: &'a PgPool,
}

impl Playlists<'_> {
    pub async fn create(&self, account_id: DbId, input: &CreatePlaylist) -> DbResult<DbId> {
        PlaylistRepo::create(self.pool, account_id, input).await
    }

    pub async fn get(&self, playlist_id: DbId) -> DbResult<Playlist> {
        PlaylistRepo::get(self.pool, playlist_id).await
    }

    pub async fn list(&self) -> DbResult<Vec<Playlist>> {
        PlaylistRepo::list(self.pool).await
    }

    pub async fn get_for_account(&self, account_id: DbId, playlist_id: DbId) -> DbResult<Playlist> {
        PlaylistRepo::get_for_account(self.pool, account_id, playlist_id).await
    }

    pub async fn list_for_account(&self, account_id: DbId) -> DbResult<Vec<Playlist>> {
        PlaylistRepo::list_for_account(self.pool, account_id).await
    }

    pub async fn update(
        &self,
        account_id: DbId,
        playlist_id: DbId,
        input: &UpdatePlaylist,
    ) -> DbResult<()> {
        PlaylistRepo::update(self.pool, account_id, playlist_id, input).await
    }

    pub async fn delete(&self, account_id: DbId, playlist_id: DbId) -> DbResult<()> {
        PlaylistRepo::delete(self.pool, account_id, playlist_id).await
    }

    pub async fn add_beat(&self, playlist_id: DbId, beat_id: DbId) -> DbResult<()> {
        PlaylistRepo::add_beat(self.pool, playlist_id, beat_id).await
    }

    pub async fn get_beat(&self, playlist_id: DbId, beat_id: DbId) -> DbResult<Beat> {
        PlaylistRepo::get_beat(self.pool, playlist_id, beat_id).await
    }

    pub async fn list_beats(&self, playlist_id: DbId) -> DbResult<Vec<Beat>> {
        PlaylistRepo::list_beats(self.pool, playlist_id).await
    }

    pub async fn get_beat_for_account(
        &self,
        account_id: DbId,
        playlist_id: DbId,
        beat_id: DbId,
    ) -> DbResult<Beat> {
        PlaylistRepo::get_beat_for_account(self.pool, account_id, playlist_id, beat_id).await
    }

    pub async fn list_beats_for_account(
        &self,
        account_id: DbId,
        playlist_id: DbId,
    ) -> DbResult<Vec<Beat>> {
        PlaylistRepo::list_beats_for_account(self.pool, account_id, playlist_id).await
    }

    pub async fn remove_beat(&self, playlist_id: DbId, beat_id: DbId) -> DbResult<()> {
        PlaylistRepo::remove_beat(self.pool, playlist_id, beat_id).await
    }
}

/// [`CartRepo`] with the pool bound.
pub struct Carts<'a> {
    pool: &'a PgPool,
}

impl Carts<'_> {
    pub async fn add_beat(&self, account_id: DbId, beat_id: DbId) -> DbResult<()> {
        CartRepo::add_beat(self.pool, account_id, beat_id).await
    }

    pub async fn get_beat(&self, account_id: DbId, beat_id: DbId) -> DbResult<Beat> {
        CartRepo::get_beat(self.pool, account_id, beat_id).await
    }

    pub async fn list_beats(&self, account_id: DbId) -> DbResult<Vec<Beat>> {
        CartRepo::list_beats(self.pool, account_id).await
    }

    pub async fn remove_beat(&self, account_id: DbId, beat_id: DbId) -> DbResult<()> {
        CartRepo::remove_beat(self.pool, account_id, beat_id).await
    }

    pub async fn clear(&self, account_id: DbId) -> DbResult<()> {
        CartRepo::clear(self.pool, account_id).await
    }
}
