//! Product entity model.

use beatstore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Product row from the `products` table.
///
/// The billable unit: every beat is backed by exactly one product, created
/// in the same transaction as the beat itself.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub artist_id: DbId,
    /// Payment-processor product reference.
    pub stripe_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
