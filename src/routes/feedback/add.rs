use crate::configuration::Settings;
use crate::connectors::DocumentStore;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

/// Public endpoint: anonymous submitters are allowed; missing identity
/// fields get the anonymous defaults in the service.
#[tracing::instrument(name = "Add feedback.", skip(form, documents, settings))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::FeedbackForm>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<models::Feedback>::build().bad_request(errors))?;

    services::feedback::create_feedback(documents.get_ref().as_ref(), &settings.backend, &form)
        .await
        .map(|feedback_id| {
            JsonResponse::<models::Feedback>::build()
                .set_id(feedback_id)
                .ok("Feedback created successfully")
        })
        .map_err(|err| {
            JsonResponse::<models::Feedback>::build().backend_error("Error creating feedback", err)
        })
}
