use crate::connectors::FileStore;
use crate::helpers::JsonResponse;
use crate::services;
use crate::services::avatar::AvatarUpload;
use actix_web::{post, web, Responder, Result};
use serde_derive::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AvatarQuery {
    pub filename: String,
}

/// Raw bytes in the body, filename in the query string. The advertised size
/// limit lives in the client; nothing is enforced here.
#[tracing::instrument(name = "Upload avatar.", skip(body, files))]
#[post("/avatar")]
pub async fn avatar_upload_handler(
    query: web::Query<AvatarQuery>,
    body: web::Bytes,
    files: web::Data<Arc<dyn FileStore>>,
) -> Result<impl Responder> {
    let upload =
        services::avatar::upload_avatar(files.get_ref().as_ref(), &query.filename, body.to_vec())
            .await
            .map_err(|err| {
                JsonResponse::<AvatarUpload>::build().backend_error("Failed to upload file", err)
            })?;

    Ok(JsonResponse::build().set_item(upload).ok("File uploaded"))
}
