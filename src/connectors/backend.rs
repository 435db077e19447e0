use super::auth::{Account, AuthStore, Session};
use super::documents::{Document, DocumentList, DocumentStore};
use super::errors::BackendError;
use super::files::{FileStore, StoredFile};
use crate::configuration::BackendSettings;
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::Instrument;

const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// HTTP client for the hosted backend. One instance implements all three
/// store traits; the cookie jar carries the ambient session the way the
/// vendor SDK does, so `get_account` works after `create_email_session`
/// without threading a token around.
pub struct BackendClient {
    endpoint: String,
    project_id: String,
    database_id: String,
    bucket_id: String,
    http_client: reqwest::Client,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, BackendError> {
        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| BackendError::Unavailable(err.to_string()))?;

        Ok(Self {
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            project_id: settings.project_id.clone(),
            database_id: settings.database_id.clone(),
            bucket_id: settings.storage_bucket_id.clone(),
            http_client,
        })
    }

    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, url)
            .header(PROJECT_HEADER, &self.project_id)
    }

    fn documents_url(&self, collection_id: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, collection_id
        )
    }

    fn document_url(&self, collection_id: &str, document_id: &str) -> String {
        format!("{}/{}", self.documents_url(collection_id), document_id)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            404 => BackendError::NotFound(body),
            401 | 403 => BackendError::Unauthorized(body),
            400 => BackendError::Validation(body),
            code if code >= 500 => BackendError::Unavailable(body),
            _ => BackendError::Http(format!("{}: {}", status, body)),
        })
    }

    async fn json_body(response: reqwest::Response) -> Result<Value, BackendError> {
        let text = response.text().await.map_err(BackendError::from)?;
        serde_json::from_str(&text).map_err(|_| BackendError::InvalidResponse(text))
    }
}

#[async_trait::async_trait]
impl AuthStore for BackendClient {
    async fn create_account(
        &self,
        account_id: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, BackendError> {
        let span = tracing::info_span!("backend_create_account", email = %email);
        let response = self
            .request(Method::POST, format!("{}/account", self.endpoint))
            .json(&json!({
                "userId": account_id,
                "email": email,
                "password": password,
                "name": name,
            }))
            .send()
            .instrument(span)
            .await?;

        let body = Self::json_body(Self::check(response).await?).await?;
        serde_json::from_value(body).map_err(|err| BackendError::InvalidResponse(err.to_string()))
    }

    async fn create_email_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, BackendError> {
        let span = tracing::info_span!("backend_create_session", email = %email);
        let response = self
            .request(
                Method::POST,
                format!("{}/account/sessions/email", self.endpoint),
            )
            .json(&json!({ "email": email, "password": password }))
            .send()
            .instrument(span)
            .await?;

        let body = Self::json_body(Self::check(response).await?).await?;
        serde_json::from_value(body).map_err(|err| BackendError::InvalidResponse(err.to_string()))
    }

    async fn get_account(&self) -> Result<Account, BackendError> {
        let span = tracing::info_span!("backend_get_account");
        let response = self
            .request(Method::GET, format!("{}/account", self.endpoint))
            .send()
            .instrument(span)
            .await?;

        let body = Self::json_body(Self::check(response).await?).await?;
        serde_json::from_value(body).map_err(|err| BackendError::InvalidResponse(err.to_string()))
    }

    async fn delete_current_session(&self) -> Result<(), BackendError> {
        let span = tracing::info_span!("backend_delete_session");
        let response = self
            .request(
                Method::DELETE,
                format!("{}/account/sessions/current", self.endpoint),
            )
            .send()
            .instrument(span)
            .await?;

        Self::check(response).await.map(|_| ())
    }

    fn oauth2_redirect_url(&self, provider: &str, success_url: &str, failure_url: &str) -> String {
        format!(
            "{}/account/sessions/oauth2/{}?project={}&success={}&failure={}",
            self.endpoint, provider, self.project_id, success_url, failure_url
        )
    }
}

#[async_trait::async_trait]
impl DocumentStore for BackendClient {
    async fn create(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Document, BackendError> {
        let span = tracing::info_span!("backend_create_document", collection = %collection_id);
        let response = self
            .request(Method::POST, self.documents_url(collection_id))
            .json(&json!({ "documentId": document_id, "data": data }))
            .send()
            .instrument(span)
            .await?;

        Document::from_value(Self::json_body(Self::check(response).await?).await?)
    }

    async fn get(&self, collection_id: &str, document_id: &str) -> Result<Document, BackendError> {
        let span = tracing::info_span!("backend_get_document", collection = %collection_id, document = %document_id);
        let response = self
            .request(Method::GET, self.document_url(collection_id, document_id))
            .send()
            .instrument(span)
            .await?;

        Document::from_value(Self::json_body(Self::check(response).await?).await?)
    }

    async fn list_equal(
        &self,
        collection_id: &str,
        field: &str,
        value: &str,
    ) -> Result<DocumentList, BackendError> {
        let span = tracing::info_span!("backend_list_documents", collection = %collection_id, field = %field);
        let query = format!("equal(\"{}\", [\"{}\"])", field, value);
        let response = self
            .request(Method::GET, self.documents_url(collection_id))
            .query(&[("queries[]", query)])
            .send()
            .instrument(span)
            .await?;

        let body = Self::json_body(Self::check(response).await?).await?;
        let total = body.get("total").and_then(Value::as_u64).unwrap_or(0);
        let documents = body
            .get("documents")
            .and_then(Value::as_array)
            .ok_or_else(|| BackendError::InvalidResponse(body.to_string()))?
            .iter()
            .cloned()
            .map(Document::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DocumentList { total, documents })
    }

    async fn update(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Document, BackendError> {
        let span = tracing::info_span!("backend_update_document", collection = %collection_id, document = %document_id);
        let response = self
            .request(Method::PATCH, self.document_url(collection_id, document_id))
            .json(&json!({ "data": data }))
            .send()
            .instrument(span)
            .await?;

        Document::from_value(Self::json_body(Self::check(response).await?).await?)
    }

    async fn delete(&self, collection_id: &str, document_id: &str) -> Result<(), BackendError> {
        let span = tracing::info_span!("backend_delete_document", collection = %collection_id, document = %document_id);
        let response = self
            .request(
                Method::DELETE,
                self.document_url(collection_id, document_id),
            )
            .send()
            .instrument(span)
            .await?;

        Self::check(response).await.map(|_| ())
    }
}

#[async_trait::async_trait]
impl FileStore for BackendClient {
    async fn upload(
        &self,
        file_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredFile, BackendError> {
        let span = tracing::info_span!("backend_upload_file", file = %file_id);
        let size = bytes.len();
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("fileId", file_id.to_string())
            .part("file", part);

        let response = self
            .request(
                Method::POST,
                format!("{}/storage/buckets/{}/files", self.endpoint, self.bucket_id),
            )
            .multipart(form)
            .send()
            .instrument(span)
            .await?;

        Self::check(response).await?;
        Ok(StoredFile {
            id: file_id.to_string(),
            name: file_name.to_string(),
            size,
        })
    }

    fn view_url(&self, file_id: &str) -> String {
        format!(
            "{}/storage/buckets/{}/files/{}/view?project={}",
            self.endpoint, self.bucket_id, file_id, self.project_id
        )
    }

    async fn fetch(&self, file_id: &str) -> Result<Vec<u8>, BackendError> {
        let span = tracing::info_span!("backend_fetch_file", file = %file_id);
        let response = self
            .request(Method::GET, self.view_url(file_id))
            .send()
            .instrument(span)
            .await?;

        let bytes = Self::check(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
