//! Artist entity model.

use beatstore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Artist profile row from the `artists` table (1:1 with an account).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub account_id: DbId,
    /// Payment-processor account reference, attached after onboarding.
    pub stripe_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
