//! Hosted backend connectors.
//!
//! All persistence lives in a hosted backend-as-a-service (accounts, document
//! database, object storage). Everything the application knows about it goes
//! through three narrow traits so a test double can stand in for the real
//! service:
//!
//! 1. `AuthStore`: accounts, email sessions, OAuth redirect URLs
//! 2. `DocumentStore`: document CRUD plus equality-filtered listing
//! 3. `FileStore`: upload by id, public view URL derivation
//!
//! `BackendClient` is the HTTP implementation of all three; `MemoryBackend`
//! is the in-memory one used by the integration tests.

mod auth;
mod backend;
mod documents;
mod errors;
mod files;
mod memory;

pub use auth::{Account, AuthStore, Session};
pub use backend::BackendClient;
pub use documents::{Document, DocumentList, DocumentStore};
pub use errors::BackendError;
pub use files::{FileStore, StoredFile};
pub use memory::MemoryBackend;

use std::sync::Arc;

/// Store handles shared with the route handlers at startup.
#[derive(Clone)]
pub struct Stores {
    pub auth: Arc<dyn AuthStore>,
    pub documents: Arc<dyn DocumentStore>,
    pub files: Arc<dyn FileStore>,
}
