use crate::connectors::AuthStore;
use crate::helpers::JsonResponse;
use crate::services;
use crate::session::{SessionContext, SessionSnapshot};
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Log user out.", skip(auth, session))]
#[post("/logout")]
pub async fn logout_handler(
    auth: web::Data<Arc<dyn AuthStore>>,
    session: web::Data<SessionContext>,
) -> Result<impl Responder> {
    let result = services::auth::logout(auth.get_ref().as_ref()).await;

    // Local state is torn down whatever the backend said.
    session.clear();

    result.map_err(|err| {
        JsonResponse::<SessionSnapshot>::build().backend_error("Logging Out Failed", err)
    })?;

    Ok(JsonResponse::<SessionSnapshot>::build().ok("Logout Successful"))
}
