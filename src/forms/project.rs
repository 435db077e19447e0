use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub project_name: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 2048)]
    pub project_url: String,
    #[validate(max_length = 1000)]
    pub project_description: Option<String>,
}
