#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    pub backend: BackendSettings,
}

/// Identifiers of the hosted backend everything is persisted in. There are no
/// working defaults; every id comes from `configuration.yaml` or the
/// environment (`FEEDY_BACKEND__PROJECT_ID` and friends).
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BackendSettings {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub user_collection_id: String,
    pub projects_collection_id: String,
    pub feedback_collection_id: String,
    pub storage_bucket_id: String,
    pub oauth_success_url: String,
    pub oauth_failure_url: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize our configuration reader
    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    // Environment overrides, e.g. FEEDY_BACKEND__ENDPOINT
    settings.merge(config::Environment::with_prefix("feedy").separator("__"))?;

    settings.try_deserialize()
}
