use crate::configuration::Settings;
use crate::connectors::DocumentStore;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::session::SessionContext;
use actix_web::{delete, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Delete feedback.", skip(documents, session, settings))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let (feedback_id,) = path.into_inner();
    if session.current_user().is_none() {
        return Err(JsonResponse::<models::Feedback>::build().unauthorized("Not logged in"));
    }

    services::feedback::delete_feedback(
        documents.get_ref().as_ref(),
        &settings.backend,
        &feedback_id,
    )
    .await
    .map(|_| JsonResponse::<models::Feedback>::build().ok("Delete the feedback"))
    .map_err(|err| {
        JsonResponse::<models::Feedback>::build()
            .backend_error("Failed to Delete the feedback", err)
    })
}

/// Bulk delete is sequential with no partial-failure recovery: ids before
/// the failing one are already gone, ids after it are never attempted, and
/// the response does not say which succeeded.
#[tracing::instrument(name = "Delete many feedbacks.", skip(form, documents, session, settings))]
#[delete("")]
pub async fn delete_many_handler(
    form: web::Json<forms::DeleteManyForm>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if session.current_user().is_none() {
        return Err(JsonResponse::<models::Feedback>::build().unauthorized("Not logged in"));
    }

    form.validate()
        .map_err(|errors| JsonResponse::<models::Feedback>::build().bad_request(errors))?;

    services::feedback::delete_many_feedback(
        documents.get_ref().as_ref(),
        &settings.backend,
        &form.ids,
    )
    .await
    .map(|_| JsonResponse::<models::Feedback>::build().ok("Delete the feedback"))
    .map_err(|err| {
        JsonResponse::<models::Feedback>::build()
            .backend_error("Failed to Delete the feedback", err)
    })
}
