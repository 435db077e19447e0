use crate::helpers::JsonResponse;
use crate::session::SessionContext;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get session snapshot.", skip(session))]
#[get("/me")]
pub async fn me_handler(session: web::Data<SessionContext>) -> Result<impl Responder> {
    Ok(JsonResponse::build().set_item(session.snapshot()).ok("OK"))
}
