use crate::configuration::BackendSettings;
use crate::connectors::{AuthStore, BackendError, DocumentStore, Session};
use crate::forms;
use crate::models;
use serde_json::json;
use uuid::Uuid;

#[tracing::instrument(name = "Sign user in.", skip(auth, password))]
pub async fn sign_in(
    auth: &dyn AuthStore,
    email: &str,
    password: &str,
) -> Result<Session, BackendError> {
    auth.create_email_session(email, password)
        .await
        .map_err(|err| {
            tracing::error!("Failed to create email session: {:?}", err);
            err
        })
}

/// Account, session and profile document are three sequential writes with no
/// rollback: a failure after account creation leaves the account without a
/// profile document. The partial-failure window is accepted, not hidden.
#[tracing::instrument(name = "Register user.", skip(auth, documents, form))]
pub async fn create_user(
    auth: &dyn AuthStore,
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    form: &forms::Register,
) -> Result<models::User, BackendError> {
    let account_id = Uuid::new_v4().to_string();
    let account = auth
        .create_account(&account_id, &form.email, &form.password, &form.username)
        .await?;

    sign_in(auth, &form.email, &form.password).await?;

    documents
        .create(
            &backend.user_collection_id,
            &account.id,
            json!({
                "email": form.email,
                "username": form.username,
                "avatar": form.avatar,
                "bio": form.bio,
            }),
        )
        .await
        .map_err(|err| {
            tracing::error!("Failed to create profile document: {:?}", err);
            err
        })?;

    get_user(auth, documents, backend).await
}

/// Current account merged with its profile document. Fails when there is no
/// session or the profile document is missing.
pub async fn get_user(
    auth: &dyn AuthStore,
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
) -> Result<models::User, BackendError> {
    let account = auth.get_account().await?;
    let profile = documents
        .get(&backend.user_collection_id, &account.id)
        .await?;

    Ok(models::User {
        id: account.id,
        email: account.email,
        username: account.name,
        avatar: profile.str_field("avatar").map(String::from),
        bio: profile.str_field("bio").map(String::from),
        created_at: account.created_at,
    })
}

#[tracing::instrument(name = "Log user out.", skip(auth))]
pub async fn logout(auth: &dyn AuthStore) -> Result<(), BackendError> {
    auth.delete_current_session().await.map_err(|err| {
        tracing::error!("Failed to delete session: {:?}", err);
        err
    })
}

/// Builds the Google OAuth redirect URL. Fire-and-forget: nothing here waits
/// for the flow to complete.
pub fn login_with_google(auth: &dyn AuthStore, backend: &BackendSettings) -> String {
    auth.oauth2_redirect_url(
        "google",
        &backend.oauth_success_url,
        &backend.oauth_failure_url,
    )
}

/// Overwrites the profile fields of the current account. No optimistic
/// concurrency control: last writer wins.
#[tracing::instrument(name = "Update profile.", skip(auth, documents, form))]
pub async fn update_profile(
    auth: &dyn AuthStore,
    documents: &dyn DocumentStore,
    backend: &BackendSettings,
    form: &forms::ProfileUpdate,
) -> Result<models::User, BackendError> {
    let account = auth.get_account().await?;
    let profile = documents
        .get(&backend.user_collection_id, &account.id)
        .await?;

    documents
        .update(
            &backend.user_collection_id,
            &profile.id,
            json!({
                "username": form.username,
                "bio": form.bio,
                "avatar": form.avatar,
            }),
        )
        .await?;

    get_user(auth, documents, backend).await
}
