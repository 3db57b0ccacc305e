//! Dish entity.

use crate::Tags;
use serde::{Deserialize, Serialize};

/// A menu catalog entry. Read-only for this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub description: String,
    pub image_url: String,
    pub tags: Tags,
}
