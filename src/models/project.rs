use crate::connectors::Document;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub project_name: String,
    pub project_url: String,
    pub project_description: String,
    /// Denormalized feedback id list carried for wire compatibility. The real
    /// association is feedback -> project, not this array.
    pub feedbacks: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Document> for Project {
    fn from(document: Document) -> Self {
        let feedbacks = document
            .data
            .get("feedbacks")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            user_id: document.str_field("userId").unwrap_or_default().to_string(),
            project_name: document
                .str_field("project_name")
                .unwrap_or_default()
                .to_string(),
            project_url: document
                .str_field("project_url")
                .unwrap_or_default()
                .to_string(),
            project_description: document
                .str_field("project_description")
                .unwrap_or_default()
                .to_string(),
            feedbacks,
            created_at: document.created_at,
            updated_at: document.updated_at,
            id: document.id,
        }
    }
}
