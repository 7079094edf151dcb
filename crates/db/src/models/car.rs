//! Car entity model and DTOs.

use carkat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    pub brand: String,
    pub model: String,
    pub generation: String,
    pub body: String,
    pub engines: String,
    pub drive: String,
    pub car_class: String,
    pub years: String,
    pub country: String,
    pub weak_points: String,
    /// Server-generated stored filename; never the caller-supplied name.
    pub photo_filename: Option<String>,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The full set of caller-supplied car fields.
///
/// Used by both create and edit: edit is a full replace, so every
/// descriptive field and both prices are written on each save. Mapping this
/// as one struct rather than a name-keyed loop means the compiler checks
/// that no column is forgotten. The photo reference is deliberately absent;
/// it is only ever set through an accepted upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarFields {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub generation: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub engines: String,
    #[serde(default)]
    pub drive: String,
    #[serde(default)]
    pub car_class: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub weak_points: String,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
}
