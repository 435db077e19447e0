use crate::configuration::Settings;
use crate::connectors::{AuthStore, DocumentStore};
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::session::SessionContext;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Update profile.", skip(form, auth, documents, session, settings))]
#[put("/profile")]
pub async fn profile_update_handler(
    form: web::Json<forms::ProfileUpdate>,
    auth: web::Data<Arc<dyn AuthStore>>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<models::User>::build().bad_request(errors))?;

    let user = services::auth::update_profile(
        auth.get_ref().as_ref(),
        documents.get_ref().as_ref(),
        &settings.backend,
        &form,
    )
    .await
    .map_err(|err| {
        JsonResponse::<models::User>::build().backend_error("Error updating user", err)
    })?;

    session.establish(user.clone());

    Ok(JsonResponse::build()
        .set_item(user)
        .ok("User Updated successfully"))
}
