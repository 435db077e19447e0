use super::auth::{Account, AuthStore, Session};
use super::documents::{Document, DocumentList, DocumentStore};
use super::errors::BackendError;
use super::files::{FileStore, StoredFile};
use chrono::Utc;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Clone)]
struct StoredAccount {
    account: Account,
    password: String,
}

/// In-memory stand-in for the hosted backend. Used by the integration tests
/// and handy for running the server without backend credentials. Semantics
/// mirror the real service: duplicate emails are rejected, document updates
/// merge fields, listing filters by string equality.
pub struct MemoryBackend {
    accounts: Mutex<Vec<StoredAccount>>,
    current_account: Mutex<Option<String>>,
    collections: Mutex<HashMap<String, BTreeMap<String, Document>>>,
    files: Mutex<HashMap<String, (String, Vec<u8>)>>,
    denied_deletes: Mutex<HashSet<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            current_account: Mutex::new(None),
            collections: Mutex::new(HashMap::new()),
            files: Mutex::new(HashMap::new()),
            denied_deletes: Mutex::new(HashSet::new()),
        }
    }

    /// Make every delete of `document_id` fail. Test control for exercising
    /// partial-failure paths in bulk deletion.
    pub fn deny_delete(&self, document_id: &str) {
        self.denied_deletes
            .lock()
            .expect("memory backend poisoned")
            .insert(document_id.to_string());
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AuthStore for MemoryBackend {
    async fn create_account(
        &self,
        account_id: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, BackendError> {
        let mut accounts = self.accounts.lock().expect("memory backend poisoned");
        if accounts.iter().any(|stored| stored.account.email == email) {
            return Err(BackendError::Validation(
                "A user with the same email already exists".to_string(),
            ));
        }

        let account = Account {
            id: account_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            created_at: Some(Utc::now()),
        };
        accounts.push(StoredAccount {
            account: account.clone(),
            password: password.to_string(),
        });
        Ok(account)
    }

    async fn create_email_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, BackendError> {
        let accounts = self.accounts.lock().expect("memory backend poisoned");
        let stored = accounts
            .iter()
            .find(|stored| stored.account.email == email && stored.password == password)
            .ok_or_else(|| {
                BackendError::Unauthorized("Invalid credentials".to_string())
            })?;

        let session = Session {
            id: Uuid::new_v4().to_string(),
            user_id: stored.account.id.clone(),
        };
        *self.current_account.lock().expect("memory backend poisoned") =
            Some(stored.account.id.clone());
        Ok(session)
    }

    async fn get_account(&self) -> Result<Account, BackendError> {
        let current = self
            .current_account
            .lock()
            .expect("memory backend poisoned")
            .clone()
            .ok_or_else(|| BackendError::Unauthorized("No active session".to_string()))?;

        self.accounts
            .lock()
            .expect("memory backend poisoned")
            .iter()
            .find(|stored| stored.account.id == current)
            .map(|stored| stored.account.clone())
            .ok_or_else(|| BackendError::NotFound("Account not found".to_string()))
    }

    async fn delete_current_session(&self) -> Result<(), BackendError> {
        let mut current = self.current_account.lock().expect("memory backend poisoned");
        if current.is_none() {
            return Err(BackendError::Unauthorized("No active session".to_string()));
        }
        *current = None;
        Ok(())
    }

    fn oauth2_redirect_url(&self, provider: &str, success_url: &str, failure_url: &str) -> String {
        format!(
            "memory://oauth2/{}?success={}&failure={}",
            provider, success_url, failure_url
        )
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryBackend {
    async fn create(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Document, BackendError> {
        let mut collections = self.collections.lock().expect("memory backend poisoned");
        let collection = collections
            .entry(collection_id.to_string())
            .or_insert_with(BTreeMap::new);
        if collection.contains_key(document_id) {
            return Err(BackendError::Validation(
                "Document with the requested ID already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let document = Document {
            id: document_id.to_string(),
            collection_id: collection_id.to_string(),
            database_id: "local".to_string(),
            created_at: now,
            updated_at: now,
            permissions: Vec::new(),
            data,
        };
        collection.insert(document_id.to_string(), document.clone());
        Ok(document)
    }

    async fn get(&self, collection_id: &str, document_id: &str) -> Result<Document, BackendError> {
        self.collections
            .lock()
            .expect("memory backend poisoned")
            .get(collection_id)
            .and_then(|collection| collection.get(document_id))
            .cloned()
            .ok_or_else(|| BackendError::NotFound("Document not found".to_string()))
    }

    async fn list_equal(
        &self,
        collection_id: &str,
        field: &str,
        value: &str,
    ) -> Result<DocumentList, BackendError> {
        let collections = self.collections.lock().expect("memory backend poisoned");
        let documents: Vec<Document> = collections
            .get(collection_id)
            .map(|collection| {
                collection
                    .values()
                    .filter(|document| document.str_field(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(DocumentList {
            total: documents.len() as u64,
            documents,
        })
    }

    async fn update(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Document, BackendError> {
        let mut collections = self.collections.lock().expect("memory backend poisoned");
        let document = collections
            .get_mut(collection_id)
            .and_then(|collection| collection.get_mut(document_id))
            .ok_or_else(|| BackendError::NotFound("Document not found".to_string()))?;

        if let (Value::Object(stored), Value::Object(incoming)) = (&mut document.data, data) {
            for (key, value) in incoming {
                stored.insert(key, value);
            }
        }
        document.updated_at = Utc::now();
        Ok(document.clone())
    }

    async fn delete(&self, collection_id: &str, document_id: &str) -> Result<(), BackendError> {
        if self
            .denied_deletes
            .lock()
            .expect("memory backend poisoned")
            .contains(document_id)
        {
            return Err(BackendError::Http(format!(
                "delete of {} rejected",
                document_id
            )));
        }

        self.collections
            .lock()
            .expect("memory backend poisoned")
            .get_mut(collection_id)
            .and_then(|collection| collection.remove(document_id))
            .map(|_| ())
            .ok_or_else(|| BackendError::NotFound("Document not found".to_string()))
    }
}

#[async_trait::async_trait]
impl FileStore for MemoryBackend {
    async fn upload(
        &self,
        file_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredFile, BackendError> {
        let size = bytes.len();
        self.files
            .lock()
            .expect("memory backend poisoned")
            .insert(file_id.to_string(), (file_name.to_string(), bytes));
        Ok(StoredFile {
            id: file_id.to_string(),
            name: file_name.to_string(),
            size,
        })
    }

    fn view_url(&self, file_id: &str) -> String {
        format!("memory://files/{}/view", file_id)
    }

    async fn fetch(&self, file_id: &str) -> Result<Vec<u8>, BackendError> {
        self.files
            .lock()
            .expect("memory backend poisoned")
            .get(file_id)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| BackendError::NotFound("File not found".to_string()))
    }
}
