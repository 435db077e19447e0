use crate::configuration::Settings;
use crate::connectors::DocumentStore;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::session::SessionContext;
use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;

/// Deletes by id with no prior existence check; the backend's own not-found
/// surfaces as the failure. Feedback rows of the project are left behind.
#[tracing::instrument(name = "Delete project.", skip(documents, session, settings))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    if session.current_user().is_none() {
        return Err(JsonResponse::<models::Project>::build().unauthorized("Not logged in"));
    }

    services::project::delete_project(documents.get_ref().as_ref(), &settings.backend, &project_id)
        .await
        .map(|_| JsonResponse::<models::Project>::build().ok("Document Deleted"))
        .map_err(|err| {
            JsonResponse::<models::Project>::build()
                .backend_error("Failed to delete the document", err)
        })
}
