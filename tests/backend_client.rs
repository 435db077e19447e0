use feedy::configuration::BackendSettings;
use feedy::connectors::{AuthStore, BackendClient, BackendError, DocumentStore, FileStore};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(endpoint: &str) -> BackendSettings {
    BackendSettings {
        endpoint: endpoint.to_string(),
        project_id: "feedy-test".to_string(),
        database_id: "main".to_string(),
        user_collection_id: "users".to_string(),
        projects_collection_id: "projects".to_string(),
        feedback_collection_id: "feedbacks".to_string(),
        storage_bucket_id: "avatars".to_string(),
        oauth_success_url: "http://localhost:3000/dashboard".to_string(),
        oauth_failure_url: "http://localhost:3000/register".to_string(),
    }
}

#[tokio::test]
async fn missing_document_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/databases/main/collections/projects/documents/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Document with the requested ID could not be found.",
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(&settings(&server.uri())).expect("client");
    let err = client.get("projects", "nope").await.unwrap_err();
    assert!(matches!(err, BackendError::NotFound(_)));
}

#[tokio::test]
async fn missing_session_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "User (role: guests) missing scope (account)",
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(&settings(&server.uri())).expect("client");
    let err = client.get_account().await.unwrap_err();
    assert!(matches!(err, BackendError::Unauthorized(_)));
}

#[tokio::test]
async fn unreachable_backend_maps_to_unavailable() {
    // Grab a free port and release it so the connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let endpoint = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    drop(listener);

    let client = BackendClient::new(&settings(&endpoint)).expect("client");
    let err = client.get_account().await.unwrap_err();
    assert!(matches!(err, BackendError::Unavailable(_)));
}

#[tokio::test]
async fn email_session_parses_and_sends_the_project_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/sessions/email"))
        .and(header("X-Appwrite-Project", "feedy-test"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "$id": "session-1",
            "userId": "user-1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BackendClient::new(&settings(&server.uri())).expect("client");
    let session = client
        .create_email_session("mira@example.com", "correct horse")
        .await
        .expect("session");
    assert_eq!(session.id, "session-1");
    assert_eq!(session.user_id, "user-1");
}

#[tokio::test]
async fn created_document_is_parsed_with_metadata_stripped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/main/collections/projects/documents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "$id": "p1",
            "$collectionId": "projects",
            "$databaseId": "main",
            "$createdAt": "2024-03-01T10:00:00+00:00",
            "$updatedAt": "2024-03-01T10:00:00+00:00",
            "$permissions": [],
            "project_name": "Feedy",
            "project_url": "https://feedy.example.com",
            "userId": "user-1",
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(&settings(&server.uri())).expect("client");
    let document = client
        .create(
            "projects",
            "p1",
            json!({
                "project_name": "Feedy",
                "project_url": "https://feedy.example.com",
                "userId": "user-1",
            }),
        )
        .await
        .expect("document");

    assert_eq!(document.id, "p1");
    assert_eq!(document.str_field("project_name"), Some("Feedy"));
    assert!(document.data.get("$id").is_none());
}

#[tokio::test]
async fn listing_parses_total_and_documents() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/databases/main/collections/projects/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 7,
            "documents": [{
                "$id": "p1",
                "$collectionId": "projects",
                "$databaseId": "main",
                "$createdAt": "2024-03-01T10:00:00+00:00",
                "$updatedAt": "2024-03-01T10:00:00+00:00",
                "$permissions": [],
                "project_name": "Feedy",
                "userId": "user-1",
            }],
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(&settings(&server.uri())).expect("client");
    let list = client
        .list_equal("projects", "userId", "user-1")
        .await
        .expect("list");
    assert_eq!(list.total, 7);
    assert_eq!(list.documents.len(), 1);
    assert_eq!(list.documents[0].str_field("userId"), Some("user-1"));
}

#[tokio::test]
async fn view_url_is_derived_from_bucket_and_file_id() {
    let client = BackendClient::new(&settings("http://backend.example.com/v1")).expect("client");
    assert_eq!(
        client.view_url("file-9"),
        "http://backend.example.com/v1/storage/buckets/avatars/files/file-9/view?project=feedy-test"
    );
}
