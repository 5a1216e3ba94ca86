use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry customers can order and review.
///
/// `rating` is derived data: it always equals the mean of the food's current
/// review set (or `0.0` with no reviews) and only the review side writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub popular: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new food.
#[derive(Debug, Clone)]
pub struct FoodCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

/// Patch applied to an existing food. Only the aggregate rating is written
/// through this crate.
#[derive(Debug, Clone)]
pub struct FoodPatch {
    pub rating: f64,
}
