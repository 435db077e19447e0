use crate::configuration::Settings;
use crate::connectors::DocumentStore;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::session::SessionContext;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// Count of the session user's projects, for display.
#[tracing::instrument(name = "Count user projects.", skip(documents, session, settings))]
#[get("/count")]
pub async fn count(
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let user = session.current_user().ok_or_else(|| {
        JsonResponse::<models::Project>::build().unauthorized("Not logged in")
    })?;

    services::project::count_user_projects(
        documents.get_ref().as_ref(),
        &settings.backend,
        &user.id,
    )
    .await
    .map(|total| JsonResponse::<models::Project>::build().set_total(total).ok("OK"))
    .map_err(|err| {
        JsonResponse::<models::Project>::build().backend_error("Failed to Fetch the data", err)
    })
}

#[tracing::instrument(name = "Get user's project list.", skip(documents, session, settings))]
#[get("")]
pub async fn list(
    documents: web::Data<Arc<dyn DocumentStore>>,
    session: web::Data<SessionContext>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let user = session.current_user().ok_or_else(|| {
        JsonResponse::<models::Project>::build().unauthorized("Not logged in")
    })?;

    services::project::get_all_projects(
        documents.get_ref().as_ref(),
        &settings.backend,
        &user.id,
    )
    .await
    .map(|(projects, total)| {
        JsonResponse::build()
            .set_list(projects)
            .set_total(total)
            .ok("OK")
    })
    .map_err(|err| {
        JsonResponse::<models::Project>::build().backend_error("Failed to Fetch the data", err)
    })
}

/// Public: the shareable project page and the widget read through here.
#[tracing::instrument(name = "Get project.", skip(documents, settings))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    documents: web::Data<Arc<dyn DocumentStore>>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();

    services::project::get_project(documents.get_ref().as_ref(), &settings.backend, &project_id)
        .await
        .map(|project| JsonResponse::build().set_item(project).ok("OK"))
        .map_err(|err| {
            JsonResponse::<models::Project>::build().backend_error("Failed to Fetch the data", err)
        })
}
