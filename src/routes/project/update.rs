use crate::configuration::Settings;
use crate::connectors::{BackendError, DocumentStore};
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::session::SessionContext;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Update project.", skip(form, documents, session, settings))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    form: web::Json<forms::ProjectForm>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let user = session.current_user().ok_or_else(|| {
        JsonResponse::<models::Project>::build().unauthorized("Not logged in")
    })?;

    form.validate()
        .map_err(|errors| JsonResponse::<models::Project>::build().bad_request(errors))?;

    services::project::update_project(
        documents.get_ref().as_ref(),
        &settings.backend,
        &project_id,
        &user.id,
        &form,
    )
    .await
    .map(|project| JsonResponse::build().set_item(project).ok("Document updated"))
    .map_err(|err| match err {
        // Deliberately detail-free, matching the observable contract.
        BackendError::NotFound(_) => {
            JsonResponse::<models::Project>::build().not_found("Project do not exists")
        }
        other => {
            JsonResponse::<models::Project>::build().backend_error("Failed to update", other)
        }
    })
}
