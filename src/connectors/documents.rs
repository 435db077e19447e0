use super::errors::BackendError;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A document plus the metadata the backend keeps alongside it.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub collection_id: String,
    pub database_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub permissions: Vec<String>,
    /// Domain fields only; metadata keys are stripped on parse.
    pub data: Value,
}

impl Document {
    /// Parse the backend's wire shape: metadata keys are `$`-prefixed and sit
    /// next to the domain fields in one flat object.
    pub fn from_value(value: Value) -> Result<Self, BackendError> {
        let obj = value
            .as_object()
            .ok_or_else(|| BackendError::InvalidResponse(value.to_string()))?;

        let id = meta_str(obj, "$id")?;
        let collection_id = meta_str(obj, "$collectionId")?;
        let database_id = meta_str(obj, "$databaseId").unwrap_or_default();
        let created_at = meta_timestamp(obj, "$createdAt")?;
        let updated_at = meta_timestamp(obj, "$updatedAt")?;
        let permissions = obj
            .get("$permissions")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let data: serde_json::Map<String, Value> = obj
            .iter()
            .filter(|(key, _)| !key.starts_with('$'))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Document {
            id,
            collection_id,
            database_id,
            created_at,
            updated_at,
            permissions,
            data: Value::Object(data),
        })
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    pub fn i64_field(&self, key: &str) -> Option<i64> {
        self.data.get(key).and_then(Value::as_i64)
    }
}

fn meta_str(obj: &serde_json::Map<String, Value>, key: &str) -> Result<String, BackendError> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| BackendError::InvalidResponse(format!("document is missing {}", key)))
}

fn meta_timestamp(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<DateTime<Utc>, BackendError> {
    let raw = meta_str(obj, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|stamp| stamp.with_timezone(&Utc))
        .map_err(|err| BackendError::InvalidResponse(format!("bad {} timestamp: {}", key, err)))
}

#[derive(Debug, Clone)]
pub struct DocumentList {
    pub total: u64,
    pub documents: Vec<Document>,
}

/// Document CRUD against one database. Listing supports exactly one filter
/// shape: equality on a single field, which is all the application uses
/// (owner id, project id).
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Document, BackendError>;

    async fn get(&self, collection_id: &str, document_id: &str) -> Result<Document, BackendError>;

    async fn list_equal(
        &self,
        collection_id: &str,
        field: &str,
        value: &str,
    ) -> Result<DocumentList, BackendError>;

    /// Partial update; fields absent from `data` keep their stored value.
    async fn update(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Document, BackendError>;

    async fn delete(&self, collection_id: &str, document_id: &str) -> Result<(), BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_metadata_and_strips_it_from_data() {
        let doc = Document::from_value(json!({
            "$id": "abc",
            "$collectionId": "projects",
            "$databaseId": "main",
            "$createdAt": "2024-03-01T10:00:00+00:00",
            "$updatedAt": "2024-03-02T10:00:00+00:00",
            "$permissions": ["read(\"any\")"],
            "project_name": "Feedy",
            "userId": "u1",
        }))
        .expect("valid document");

        assert_eq!(doc.id, "abc");
        assert_eq!(doc.collection_id, "projects");
        assert_eq!(doc.permissions, vec!["read(\"any\")".to_string()]);
        assert_eq!(doc.str_field("project_name"), Some("Feedy"));
        assert!(doc.data.get("$id").is_none());
    }

    #[test]
    fn rejects_document_without_id() {
        let err = Document::from_value(json!({"project_name": "Feedy"})).unwrap_err();
        assert!(matches!(err, BackendError::InvalidResponse(_)));
    }
}
