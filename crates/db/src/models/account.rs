//! Account entity model and DTOs.

use beatstore_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly; the service layer owns the external representation.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    /// Set once via the one-time confirmation action.
    pub confirmed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new account at sign-up.
///
/// The credential arrives already hashed; hashing lives in the service layer.
#[derive(Debug, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
}

/// DTO for updating an existing account. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccount {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
}
