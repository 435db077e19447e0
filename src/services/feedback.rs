use crate::configuration::BackendSettings;
use crate::connectors::{BackendError, DocumentStore};
use crate::forms;
use crate::models;
use crate::models::{FeedbackStatus, FeedbackType};
use serde_json::json;
use uuid::Uuid;

/// Applies anonymous defaults, checks type, status and rating against their
/// enumerations and only then writes. A validation failure short-circuits
/// before any backend call.
#[tracing::instrument(name = "Create feedback.", skip(documents, form))]
pub async fn create_feedback(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    form: &forms::FeedbackForm,
) -> Result<String, BackendError> {
    let username = form
        .username
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("Anonymous");
    let user_email = form
        .user_email
        .as_deref()
        .filter(|email| !email.is_empty())
        .unwrap_or("anonymous@example.com");

    let feedback_type = form
        .feedback_type
        .parse::<FeedbackType>()
        .map_err(BackendError::Validation)?;
    let status = form
        .status
        .parse::<FeedbackStatus>()
        .map_err(BackendError::Validation)?;

    if form.rating.fract() != 0.0 || form.rating < 1.0 || form.rating > 5.0 {
        return Err(BackendError::Validation(
            "Rating must be an integer between 1 and 5".to_string(),
        ));
    }
    let rating = form.rating as i64;

    let document_id = Uuid::new_v4().to_string();
    documents
        .create(
            &backend.feedback_collection_id,
            &document_id,
            json!({
                "description": form.description,
                "username": username,
                "userEmail": user_email,
                "page_url": form.page_url,
                "feedback_type": feedback_type.as_str(),
                "status": status.as_str(),
                "rating": rating,
                "project_id": form.project_id,
            }),
        )
        .await
        .map(|document| document.id)
        .map_err(|err| {
            tracing::error!("Failed to create feedback: {:?}", err);
            err
        })
}

/// Every feedback document whose project field equals `project_id`, with
/// read-side defaults applied per field.
pub async fn get_all_feedbacks(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    project_id: &str,
) -> Result<Vec<models::Feedback>, BackendError> {
    documents
        .list_equal(&backend.feedback_collection_id, "project_id", project_id)
        .await
        .map(|list| {
            list.documents
                .into_iter()
                .map(models::Feedback::from)
                .collect()
        })
}

#[tracing::instrument(name = "Delete feedback.", skip(documents))]
pub async fn delete_feedback(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    feedback_id: &str,
) -> Result<(), BackendError> {
    documents
        .delete(&backend.feedback_collection_id, feedback_id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete feedback {}: {:?}", feedback_id, err);
            err
        })
}

/// Sequential deletes, stopping at the first failure. Earlier deletions are
/// not compensated and later ids are never attempted; the caller only learns
/// that the call as a whole failed.
#[tracing::instrument(name = "Delete many feedbacks.", skip(documents, feedback_ids))]
pub async fn delete_many_feedback(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    feedback_ids: &[String],
) -> Result<(), BackendError> {
    for feedback_id in feedback_ids {
        delete_feedback(documents, backend, feedback_id).await?;
    }
    Ok(())
}
