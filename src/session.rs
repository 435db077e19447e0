use crate::configuration::BackendSettings;
use crate::connectors::{AuthStore, DocumentStore};
use crate::models;
use crate::services;
use serde_derive::Serialize;
use std::sync::RwLock;

/// Point-in-time copy of the session state. Consumers only ever see one of
/// these, never the live cell.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionSnapshot {
    pub user: Option<models::User>,
    pub is_logged: bool,
}

/// Session state owned at the composition root. Hydrated once at startup by
/// probing the backend, refreshed after login/profile changes, torn down on
/// logout.
pub struct SessionContext {
    state: RwLock<SessionSnapshot>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().expect("session state poisoned").clone()
    }

    pub fn current_user(&self) -> Option<models::User> {
        self.snapshot().user
    }

    pub fn establish(&self, user: models::User) {
        let mut state = self.state.write().expect("session state poisoned");
        *state = SessionSnapshot {
            user: Some(user),
            is_logged: true,
        };
    }

    pub fn clear(&self) {
        let mut state = self.state.write().expect("session state poisoned");
        *state = SessionSnapshot::default();
    }

    /// Probe the backend for an active session. No session is not an error,
    /// it just resolves to the logged-out state.
    pub async fn hydrate(
        &self,
        auth: &dyn AuthStore,
        documents: &dyn DocumentStore,
        backend: &BackendSettings,
    ) {
        match services::auth::get_user(auth, documents, backend).await {
            Ok(user) => self.establish(user),
            Err(err) => {
                tracing::debug!("No active session: {}", err);
                self.clear();
            }
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
