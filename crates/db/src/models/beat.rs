//! Beat entity model and DTOs.

use beatstore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Beat row from the `beats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Beat {
    pub id: DbId,
    pub product_id: DbId,
    pub bpm: i32,
    /// Musical key, e.g. `"Cm"`.
    pub key: String,
    /// Audio file path.
    pub path: String,
    /// Descriptive genre tag, e.g. `"trap"`.
    pub tag: String,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new beat together with its backing product.
#[derive(Debug, Deserialize)]
pub struct CreateBeat {
    /// Payment-processor reference for the product row created alongside.
    pub stripe_id: String,
    pub bpm: i32,
    pub key: String,
    pub path: String,
    pub tag: String,
    pub price: f64,
}

/// DTO for updating an existing beat. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBeat {
    pub bpm: Option<i32>,
    pub key: Option<String>,
    pub path: Option<String>,
    pub tag: Option<String>,
    pub price: Option<f64>,
}
