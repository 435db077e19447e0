mod common;

use serde_json::{json, Value};

async fn post_feedback(app: &common::TestApp, payload: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(&format!("{}/feedback", &app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.")
}

fn feedback_payload(project_id: &str) -> Value {
    json!({
        "description": "The pricing table overflows on mobile",
        "page_url": "https://example.com/pricing",
        "feedback_type": "bug",
        "status": "new",
        "rating": 4,
        "project_id": project_id,
    })
}

#[tokio::test]
async fn out_of_range_and_fractional_ratings_are_rejected_before_any_write() {
    let app = common::spawn_app().await;

    common::register(&app, "owner@example.com", "owner").await;
    let project_id =
        common::create_project(&app, "Feedy", "https://feedy.example.com", None).await;

    for rating in [json!(0), json!(6), json!(3.5)] {
        let mut payload = feedback_payload(&project_id);
        payload["rating"] = rating.clone();

        let response = post_feedback(&app, payload).await;
        assert_eq!(response.status().as_u16(), 400, "rating {} accepted", rating);

        let body: Value = response.json().await.expect("invalid response");
        assert_eq!(body["message"], "Rating must be an integer between 1 and 5");
    }

    assert!(common::list_feedbacks(&app, &project_id).await.is_empty());
}

#[tokio::test]
async fn unknown_feedback_type_is_rejected_before_any_write() {
    let app = common::spawn_app().await;

    common::register(&app, "owner@example.com", "owner").await;
    let project_id =
        common::create_project(&app, "Feedy", "https://feedy.example.com", None).await;

    let mut payload = feedback_payload(&project_id);
    payload["feedback_type"] = json!("complaint");

    let response = post_feedback(&app, payload).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("invalid response");
    assert_eq!(
        body["message"],
        "Invalid feedback type. Must be one of: bug, generalInformation, feature"
    );

    assert!(common::list_feedbacks(&app, &project_id).await.is_empty());
}

#[tokio::test]
async fn unknown_status_is_rejected_before_any_write() {
    let app = common::spawn_app().await;

    common::register(&app, "owner@example.com", "owner").await;
    let project_id =
        common::create_project(&app, "Feedy", "https://feedy.example.com", None).await;

    let mut payload = feedback_payload(&project_id);
    payload["status"] = json!("pending");

    let response = post_feedback(&app, payload).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("invalid response");
    assert_eq!(
        body["message"],
        "Invalid status. Must be one of: new, inProgress, resolved"
    );

    assert!(common::list_feedbacks(&app, &project_id).await.is_empty());
}

#[tokio::test]
async fn anonymous_defaults_are_applied_on_create() {
    let app = common::spawn_app().await;

    common::register(&app, "owner@example.com", "owner").await;
    let project_id =
        common::create_project(&app, "Feedy", "https://feedy.example.com", None).await;

    let response = post_feedback(&app, feedback_payload(&project_id)).await;
    assert!(response.status().is_success());

    let feedbacks = common::list_feedbacks(&app, &project_id).await;
    assert_eq!(feedbacks.len(), 1);
    assert_eq!(feedbacks[0]["username"], "Anonymous");
    assert_eq!(feedbacks[0]["user_email"], "anonymous@example.com");
    assert_eq!(feedbacks[0]["status"], "new");
    assert_eq!(feedbacks[0]["rating"], 4);
}

#[tokio::test]
async fn listing_is_scoped_by_project_id() {
    let app = common::spawn_app().await;

    common::register(&app, "owner@example.com", "owner").await;
    let first = common::create_project(&app, "First", "https://first.example.com", None).await;
    let second = common::create_project(&app, "Second", "https://second.example.com", None).await;

    common::create_feedback(&app, &first, "for the first project").await;
    common::create_feedback(&app, &second, "for the second project").await;

    let feedbacks = common::list_feedbacks(&app, &first).await;
    assert_eq!(feedbacks.len(), 1);
    assert_eq!(feedbacks[0]["description"], "for the first project");
}
