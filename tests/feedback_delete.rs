mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn single_delete_removes_the_feedback() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    common::register(&app, "owner@example.com", "owner").await;
    let project_id =
        common::create_project(&app, "Feedy", "https://feedy.example.com", None).await;
    let feedback_id = common::create_feedback(&app, &project_id, "first").await;

    let response = client
        .delete(&format!("{}/feedback/{}", &app.address, feedback_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    assert!(common::list_feedbacks(&app, &project_id).await.is_empty());
}

#[tokio::test]
async fn bulk_delete_stops_at_the_first_failure() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    common::register(&app, "owner@example.com", "owner").await;
    let project_id =
        common::create_project(&app, "Feedy", "https://feedy.example.com", None).await;

    let first = common::create_feedback(&app, &project_id, "first").await;
    let second = common::create_feedback(&app, &project_id, "second").await;
    let third = common::create_feedback(&app, &project_id, "third").await;

    app.backend.deny_delete(&second);

    let response = client
        .delete(&format!("{}/feedback", &app.address))
        .json(&json!({ "ids": [first, second, third] }))
        .send()
        .await
        .expect("Failed to execute request.");

    // The call as a whole fails without saying which ids went through.
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.expect("invalid response");
    assert!(body["message"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Failed to Delete the feedback"));

    // First is gone, second survived the rejected delete, third was never
    // attempted.
    let remaining: Vec<String> = common::list_feedbacks(&app, &project_id)
        .await
        .iter()
        .filter_map(|feedback| feedback["description"].as_str().map(String::from))
        .collect();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.contains(&"second".to_string()));
    assert!(remaining.contains(&"third".to_string()));
}

#[tokio::test]
async fn deleting_a_project_leaves_its_feedback_dangling() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    common::register(&app, "owner@example.com", "owner").await;
    let project_id =
        common::create_project(&app, "Feedy", "https://feedy.example.com", None).await;
    common::create_feedback(&app, &project_id, "still here").await;

    let response = client
        .delete(&format!("{}/project/{}", &app.address, project_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    // No cascade: the feedback row survives its project.
    let feedbacks = common::list_feedbacks(&app, &project_id).await;
    assert_eq!(feedbacks.len(), 1);
    assert_eq!(feedbacks[0]["description"], "still here");
}
