use crate::configuration::Settings;
use crate::connectors::AuthStore;
use crate::helpers::JsonResponse;
use crate::services;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// Hands back the OAuth redirect URL; the client follows it and lands on the
/// configured success or failure URL. Nothing is awaited here.
#[tracing::instrument(name = "Google login redirect.", skip(auth, settings))]
#[get("/google")]
pub async fn google_handler(
    auth: web::Data<Arc<dyn AuthStore>>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let url = services::auth::login_with_google(auth.get_ref().as_ref(), &settings.backend);

    Ok(JsonResponse::build().set_item(url).ok("User Login Successful"))
}
