use crate::configuration::Settings;
use crate::connectors::{AuthStore, DocumentStore};
use crate::forms;
use crate::helpers::JsonResponse;
use crate::services;
use crate::session::{SessionContext, SessionSnapshot};
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Log user in.", skip(form, auth, documents, session, settings))]
#[post("/login")]
pub async fn login_handler(
    form: web::Json<forms::Login>,
    auth: web::Data<Arc<dyn AuthStore>>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<SessionSnapshot>::build().bad_request(errors))?;

    services::auth::sign_in(auth.get_ref().as_ref(), &form.email, &form.password)
        .await
        .map_err(|err| {
            JsonResponse::<SessionSnapshot>::build().backend_error("User login Failed", err)
        })?;

    session
        .hydrate(
            auth.get_ref().as_ref(),
            documents.get_ref().as_ref(),
            &settings.backend,
        )
        .await;

    Ok(JsonResponse::build()
        .set_item(session.snapshot())
        .ok("Login Successful"))
}
