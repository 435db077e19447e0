use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;

/// Submitted by the public widget; no session required. Type, status and
/// rating are checked against their enumerations in the service, not here,
/// so the human-readable message reaches the submitter unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 1000)]
    pub description: String,
    #[validate(max_length = 100)]
    pub username: Option<String>,
    #[validate(max_length = 320)]
    pub user_email: Option<String>,
    #[validate(max_length = 2048)]
    pub page_url: String,
    pub feedback_type: String,
    pub status: String,
    /// Deserialized as a float so 3.5 reaches the integer check instead of
    /// dying in deserialization.
    pub rating: f64,
    #[validate(min_length = 1)]
    pub project_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteManyForm {
    #[validate(min_items = 1)]
    pub ids: Vec<String>,
}
