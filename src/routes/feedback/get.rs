use crate::configuration::Settings;
use crate::connectors::DocumentStore;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::session::SessionContext;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// Feedback is scoped by exact project-id equality only; there is no
/// inherited permission model on top of the login requirement.
#[tracing::instrument(name = "List feedback for project.", skip(documents, session, settings))]
#[get("/project/{project_id}")]
pub async fn list_by_project_handler(
    path: web::Path<(String,)>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    if session.current_user().is_none() {
        return Err(JsonResponse::<models::Feedback>::build().unauthorized("Not logged in"));
    }

    services::feedback::get_all_feedbacks(
        documents.get_ref().as_ref(),
        &settings.backend,
        &project_id,
    )
    .await
    .map(|feedbacks| JsonResponse::build().set_list(feedbacks).ok("OK"))
    .map_err(|err| {
        JsonResponse::<models::Feedback>::build().backend_error("Error fetching feedbacks", err)
    })
}
