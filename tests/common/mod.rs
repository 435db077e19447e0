use feedy::configuration::{BackendSettings, Settings};
use feedy::connectors::{MemoryBackend, Stores};
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub backend: Arc<MemoryBackend>,
}

pub fn test_settings() -> Settings {
    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        backend: BackendSettings {
            endpoint: "memory://backend".to_string(),
            project_id: "test-project".to_string(),
            database_id: "main".to_string(),
            user_collection_id: "users".to_string(),
            projects_collection_id: "projects".to_string(),
            feedback_collection_id: "feedbacks".to_string(),
            storage_bucket_id: "avatars".to_string(),
            oauth_success_url: "http://localhost:3000/dashboard".to_string(),
            oauth_failure_url: "http://localhost:3000/register".to_string(),
        },
    }
}

pub async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let backend = Arc::new(MemoryBackend::new());
    let stores = Stores {
        auth: backend.clone(),
        documents: backend.clone(),
        files: backend.clone(),
    };

    let server = feedy::startup::run(listener, stores, test_settings())
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address, backend }
}

pub async fn register(app: &TestApp, email: &str, username: &str) -> Value {
    let client = reqwest::Client::new();
    let response = client
        .post(&format!("{}/auth/register", &app.address))
        .json(&json!({
            "email": email,
            "password": "correct horse",
            "username": username,
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "registration failed");
    response.json().await.expect("invalid register response")
}

pub async fn logout(app: &TestApp) {
    let client = reqwest::Client::new();
    let response = client
        .post(&format!("{}/auth/logout", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "logout failed");
}

pub async fn create_project(app: &TestApp, name: &str, url: &str, description: Option<&str>) -> String {
    let client = reqwest::Client::new();
    let mut payload = json!({
        "project_name": name,
        "project_url": url,
    });
    if let Some(description) = description {
        payload["project_description"] = json!(description);
    }

    let response = client
        .post(&format!("{}/project", &app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "project creation failed");

    let body: Value = response.json().await.expect("invalid project response");
    body["id"].as_str().expect("missing project id").to_string()
}

pub async fn create_feedback(app: &TestApp, project_id: &str, description: &str) -> String {
    let client = reqwest::Client::new();
    let response = client
        .post(&format!("{}/feedback", &app.address))
        .json(&json!({
            "description": description,
            "page_url": "https://example.com/pricing",
            "feedback_type": "bug",
            "status": "new",
            "rating": 4,
            "project_id": project_id,
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "feedback creation failed");

    let body: Value = response.json().await.expect("invalid feedback response");
    body["id"].as_str().expect("missing feedback id").to_string()
}

pub async fn list_feedbacks(app: &TestApp, project_id: &str) -> Vec<Value> {
    let client = reqwest::Client::new();
    let response = client
        .get(&format!("{}/feedback/project/{}", &app.address, project_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "feedback listing failed");

    let body: Value = response.json().await.expect("invalid list response");
    body["list"].as_array().cloned().unwrap_or_default()
}
