use chrono::{DateTime, Utc};
use serde::Serialize;

/// Merge of the backend account and its profile document (avatar, bio).
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
