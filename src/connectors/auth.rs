use super::errors::BackendError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Account record as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Email/password session handle.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Account and session operations. The implementation owns the ambient
/// session (cookie jar for the HTTP client), so `get_account` and
/// `delete_current_session` act on whatever session was last established.
#[async_trait::async_trait]
pub trait AuthStore: Send + Sync {
    async fn create_account(
        &self,
        account_id: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, BackendError>;

    async fn create_email_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, BackendError>;

    /// Account of the current session. `Unauthorized` when there is none.
    async fn get_account(&self) -> Result<Account, BackendError>;

    async fn delete_current_session(&self) -> Result<(), BackendError>;

    /// Redirect URL that starts the OAuth flow at the backend. Building the
    /// URL has no side effect; following it is up to the caller.
    fn oauth2_redirect_url(&self, provider: &str, success_url: &str, failure_url: &str) -> String;
}
