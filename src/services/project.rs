use crate::configuration::BackendSettings;
use crate::connectors::{BackendError, DocumentStore};
use crate::forms;
use crate::models;
use serde_json::json;
use uuid::Uuid;

#[tracing::instrument(name = "Create project.", skip(documents, form))]
pub async fn create_project(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    user_id: &str,
    form: &forms::ProjectForm,
) -> Result<String, BackendError> {
    let document_id = Uuid::new_v4().to_string();
    documents
        .create(
            &backend.projects_collection_id,
            &document_id,
            json!({
                "project_name": form.project_name,
                "project_url": form.project_url,
                "project_description": form.project_description,
                "userId": user_id,
            }),
        )
        .await
        .map(|document| document.id)
        .map_err(|err| {
            tracing::error!("Failed to create project: {:?}", err);
            err
        })
}

pub async fn get_project(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    project_id: &str,
) -> Result<models::Project, BackendError> {
    documents
        .get(&backend.projects_collection_id, project_id)
        .await
        .map(models::Project::from)
}

/// Every project whose owner field equals `user_id`, plus the backend total.
/// No pagination; the backend's default page size is the ceiling.
pub async fn get_all_projects(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    user_id: &str,
) -> Result<(Vec<models::Project>, u64), BackendError> {
    documents
        .list_equal(&backend.projects_collection_id, "userId", user_id)
        .await
        .map(|list| {
            let projects = list
                .documents
                .into_iter()
                .map(models::Project::from)
                .collect();
            (projects, list.total)
        })
}

/// Fetch to verify existence and ownership, then overwrite the mutable
/// fields.
#[tracing::instrument(name = "Update project.", skip(documents, form))]
pub async fn update_project(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    project_id: &str,
    user_id: &str,
    form: &forms::ProjectForm,
) -> Result<models::Project, BackendError> {
    let existing = get_project(documents, backend, project_id).await?;
    if existing.user_id != user_id {
        return Err(BackendError::NotFound("Project not found".to_string()));
    }

    documents
        .update(
            &backend.projects_collection_id,
            project_id,
            json!({
                "project_name": form.project_name,
                "project_url": form.project_url,
                "project_description": form.project_description,
            }),
        )
        .await
        .map(models::Project::from)
}

/// Delete by id with no existence check. Associated feedback documents are
/// not cascaded and survive as dangling rows.
#[tracing::instrument(name = "Delete project.", skip(documents))]
pub async fn delete_project(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    project_id: &str,
) -> Result<(), BackendError> {
    documents
        .delete(&backend.projects_collection_id, project_id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete project {}: {:?}", project_id, err);
            err
        })
}

/// Same owner filter as `get_all_projects`, count only.
pub async fn count_user_projects(
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    user_id: &str,
) -> Result<u64, BackendError> {
    documents
        .list_equal(&backend.projects_collection_id, "userId", user_id)
        .await
        .map(|list| list.total)
}
