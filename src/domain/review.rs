use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer's review of one food item.
///
/// `user_name` is a display-name snapshot taken at creation time; it is not
/// kept in sync with later profile changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub food_id: String,
    pub rating: i64,
    pub comment: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Review input as supplied by the caller.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub food_id: String,
    pub rating: i64,
    pub comment: String,
}

/// Payload for creating a new review.
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub user_id: String,
    pub user_name: String,
    pub food_id: String,
    pub rating: i64,
    pub comment: String,
}

/// Fields a caller may submit when editing a review. Which of them apply
/// depends on the caller's role: owners rewrite rating and comment, admins
/// only attach a reply.
#[derive(Debug, Clone, Default)]
pub struct ReviewEdit {
    pub rating: Option<i64>,
    pub comment: Option<String>,
    pub admin_reply: Option<String>,
}

/// The two legal mutations of a persisted review.
#[derive(Debug, Clone)]
pub enum ReviewPatch {
    /// Owner rewrite of rating and comment.
    OwnerEdit { rating: i64, comment: String },
    /// Admin reply; `None` clears an existing reply.
    AdminReply(Option<String>),
}
