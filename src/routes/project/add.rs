use crate::configuration::Settings;
use crate::connectors::DocumentStore;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::session::SessionContext;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Add project.", skip(form, documents, session, settings))]
#[post("")]
pub async fn item(
    form: web::Json<forms::ProjectForm>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let user = session.current_user().ok_or_else(|| {
        JsonResponse::<models::Project>::build().unauthorized("Not logged in")
    })?;

    form.validate()
        .map_err(|errors| JsonResponse::<models::Project>::build().bad_request(errors))?;

    services::project::create_project(
        documents.get_ref().as_ref(),
        &settings.backend,
        &user.id,
        &form,
    )
    .await
    .map(|project_id| {
        JsonResponse::<models::Project>::build()
            .set_id(project_id)
            .ok("Project Created")
    })
    .map_err(|err| JsonResponse::<models::Project>::build().backend_error("Creation Failed", err))
}
