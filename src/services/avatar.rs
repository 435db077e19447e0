use crate::connectors::{BackendError, FileStore};
use serde_derive::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct AvatarUpload {
    pub file_id: String,
    pub file_url: String,
}

/// Uploads the bytes under a fresh id and derives the public view URL from
/// (bucket, file id). Size and type are not enforced here.
#[tracing::instrument(name = "Upload avatar.", skip(files, bytes))]
pub async fn upload_avatar(
    files: &dyn FileStore,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<AvatarUpload, BackendError> {
    let file_id = Uuid::new_v4().to_string();
    files
        .upload(&file_id, file_name, bytes)
        .await
        .map_err(|err| {
            tracing::error!("Failed to upload avatar: {:?}", err);
            err
        })?;

    Ok(AvatarUpload {
        file_url: files.view_url(&file_id),
        file_id,
    })
}
