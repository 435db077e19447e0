use super::errors::BackendError;

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub id: String,
    pub name: String,
    pub size: usize,
}

/// Object storage scoped to the configured bucket.
#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    async fn upload(
        &self,
        file_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredFile, BackendError>;

    /// Public view URL derived from (bucket id, file id). The backend does
    /// not return this verbatim; it is constructed.
    fn view_url(&self, file_id: &str) -> String;

    async fn fetch(&self, file_id: &str) -> Result<Vec<u8>, BackendError>;
}
