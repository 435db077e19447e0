use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Login {
    #[validate(min_length = 3)]
    #[validate(max_length = 320)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Register {
    #[validate(min_length = 3)]
    #[validate(max_length = 320)]
    pub email: String,
    #[validate(min_length = 8)]
    #[validate(max_length = 256)]
    pub password: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub username: String,
    #[validate(max_length = 500)]
    pub bio: Option<String>,
    #[validate(max_length = 2048)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub username: String,
    #[validate(max_length = 500)]
    pub bio: Option<String>,
    #[validate(max_length = 2048)]
    pub avatar: Option<String>,
}
