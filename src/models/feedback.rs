use crate::connectors::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackType {
    Bug,
    GeneralInformation,
    Feature,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::GeneralInformation => "generalInformation",
            Self::Feature => "feature",
        }
    }
}

impl FromStr for FeedbackType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "bug" => Ok(Self::Bug),
            "generalInformation" => Ok(Self::GeneralInformation),
            "feature" => Ok(Self::Feature),
            _ => Err(
                "Invalid feedback type. Must be one of: bug, generalInformation, feature"
                    .to_string(),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackStatus {
    New,
    InProgress,
    Resolved,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "inProgress",
            Self::Resolved => "resolved",
        }
    }
}

impl FromStr for FeedbackStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "new" => Ok(Self::New),
            "inProgress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err("Invalid status. Must be one of: new, inProgress, resolved".to_string()),
        }
    }
}

/// Read-side view of a feedback document. Type and status are plain strings
/// here because stored documents may predate the enum checks; a missing
/// status reads back as the literal "pending", which is not a member of
/// `FeedbackStatus`. Kept as-is deliberately.
#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub id: String,
    pub project_id: String,
    pub description: String,
    pub username: String,
    pub user_email: String,
    pub page_url: String,
    pub feedback_type: String,
    pub status: String,
    pub rating: i64,
    /// Present in stored documents but never written by this service.
    pub screenshot_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Document> for Feedback {
    fn from(document: Document) -> Self {
        Self {
            project_id: document
                .str_field("project_id")
                .unwrap_or_default()
                .to_string(),
            description: document
                .str_field("description")
                .unwrap_or_default()
                .to_string(),
            username: document
                .str_field("username")
                .unwrap_or("Anonymous")
                .to_string(),
            user_email: document
                .str_field("userEmail")
                .unwrap_or("unknown@example.com")
                .to_string(),
            page_url: document
                .str_field("page_url")
                .unwrap_or_default()
                .to_string(),
            feedback_type: document
                .str_field("feedback_type")
                .unwrap_or("general")
                .to_string(),
            status: document.str_field("status").unwrap_or("pending").to_string(),
            rating: document.i64_field("rating").unwrap_or(3),
            screenshot_url: document.str_field("screenshot_url").map(String::from),
            created_at: document.created_at,
            updated_at: document.updated_at,
            id: document.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn document(data: serde_json::Value) -> Document {
        Document {
            id: "f1".to_string(),
            collection_id: "feedbacks".to_string(),
            database_id: "local".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            permissions: Vec::new(),
            data,
        }
    }

    #[test]
    fn feedback_type_parses_known_values_only() {
        assert_eq!("bug".parse::<FeedbackType>(), Ok(FeedbackType::Bug));
        assert_eq!(
            "generalInformation".parse::<FeedbackType>(),
            Ok(FeedbackType::GeneralInformation)
        );
        assert!("complaint".parse::<FeedbackType>().is_err());
    }

    #[test]
    fn feedback_status_parses_known_values_only() {
        assert_eq!("new".parse::<FeedbackStatus>(), Ok(FeedbackStatus::New));
        assert!("pending".parse::<FeedbackStatus>().is_err());
    }

    #[test]
    fn missing_fields_read_back_with_defaults() {
        let feedback = Feedback::from(document(json!({ "project_id": "p1" })));
        assert_eq!(feedback.username, "Anonymous");
        assert_eq!(feedback.user_email, "unknown@example.com");
        assert_eq!(feedback.feedback_type, "general");
        assert_eq!(feedback.status, "pending");
        assert_eq!(feedback.rating, 3);
        assert_eq!(feedback.screenshot_url, None);
    }

    #[test]
    fn stored_screenshot_url_is_carried_through() {
        let feedback = Feedback::from(document(json!({
            "project_id": "p1",
            "screenshot_url": "https://cdn.example.com/shot.png",
        })));
        assert_eq!(
            feedback.screenshot_url.as_deref(),
            Some("https://cdn.example.com/shot.png")
        );
    }

    #[test]
    fn stored_fields_win_over_defaults() {
        let feedback = Feedback::from(document(json!({
            "project_id": "p1",
            "username": "sam",
            "status": "new",
            "rating": 5,
        })));
        assert_eq!(feedback.username, "sam");
        assert_eq!(feedback.status, "new");
        assert_eq!(feedback.rating, 5);
    }
}
