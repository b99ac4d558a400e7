use crate::helpers::{TEST_AUTHORIZATION, client_for, config_for};

use asana_client::{AsanaClient, AsanaClientError, ClientConfig};
use models::{NewProject, NewTask};

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: End-to-end GET through reqwest: URL, basic auth header, envelope unwrap.
///
/// **WHY THIS MATTERS**: The unit tests use a recording transport; this proves the
/// real transport sends the same thing over HTTP.
///
/// **BUG THIS CATCHES**: Would catch the Authorization header not being attached, or
/// the base URL join dropping the `/api/1.0` prefix.
#[tokio::test]
async fn given_mock_server_when_user_info_then_authenticated_get_returns_user() {
    // GIVEN: A server expecting an authenticated GET on users/me
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/users/me"))
        .and(header("authorization", TEST_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 42,
                "name": "Alice",
                "email": "alice@example.com",
                "workspaces": [{"id": 7, "name": "Acme"}],
                "photo": null
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching the current user
    let user = client_for(&server).user_info(None).await.unwrap();

    // THEN: The decoded user carries known and unknown fields
    assert_eq!(user.id, 42);
    assert_eq!(user.workspaces[0].id, 7);
    assert!(user.extra.contains_key("photo"));
}

#[tokio::test]
async fn given_mock_server_when_list_tasks_then_query_params_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/tasks"))
        .and(query_param("workspace", "11"))
        .and(query_param("assignee", "me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server).list_tasks(11, "me").await.unwrap();

    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn given_filters_when_list_users_then_opt_fields_query_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/users"))
        .and(query_param("opt_fields", "email,name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "email": "a@example.com", "name": "A"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client_for(&server)
        .list_users(None, &["Email", " Name "])
        .await
        .unwrap();

    assert_eq!(users[0].email.as_deref(), Some("a@example.com"));
}

/// **VALUE**: Verifies POST bodies are form-encoded in field order.
///
/// **WHY THIS MATTERS**: The v1.0 API reads form fields, not JSON. A JSON body is
/// accepted with 200 but every field is ignored.
///
/// **BUG THIS CATCHES**: Would catch the transport switching to `.json()`.
#[tokio::test]
async fn given_archived_project_when_created_then_form_body_contains_archived() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/projects"))
        .and(header("authorization", TEST_AUTHORIZATION))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("name=X&notes=n&workspace=1&archived=true"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 99, "name": "X", "notes": "n", "archived": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let project = client_for(&server)
        .create_project(
            NewProject::builder()
                .with_name("X")
                .with_notes("n")
                .with_workspace(1)
                .with_archived(true),
        )
        .await
        .unwrap();

    assert_eq!(project.id, 99);
}

#[tokio::test]
async fn given_task_with_followers_when_created_then_indexed_followers_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/tasks"))
        .and(body_string(
            "assignee=me&name=Plan&workspace=11&completed=true&followers%5B0%5D=5&followers%5B1%5D=6",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 1001, "name": "Plan", "completed": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server)
        .create_task(
            NewTask::builder()
                .with_name("Plan")
                .with_workspace(11)
                .with_completed(true)
                .with_followers(["5", "6"]),
        )
        .await
        .unwrap();

    assert_eq!(task.completed, Some(true));
}

#[tokio::test]
async fn given_comment_when_add_story_then_text_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/tasks/22/stories"))
        .and(body_string("text=looks+good"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 3, "text": "looks good", "type": "comment"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let story = client_for(&server).add_story(22, "looks good").await.unwrap();

    assert_eq!(story.story_type.as_deref(), Some("comment"));
}

/// **VALUE**: Verifies 404 flows through as success.
///
/// **WHY THIS MATTERS**: Long-standing callers treat "not found" as an empty result.
///
/// **BUG THIS CATCHES**: Would catch reqwest's status helpers being used instead of
/// the client's own classifier.
#[tokio::test]
async fn given_404_with_data_when_requested_then_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/tasks/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"data": {"id": 5}})))
        .mount(&server)
        .await;

    let task = client_for(&server).get_task(5).await.unwrap();

    assert_eq!(task.id, 5);
}

#[tokio::test]
async fn given_403_when_requested_then_api_request_error_with_asana_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/projects/8"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{"message": "You do not have access to this project"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_project(8).await.unwrap_err();

    match err {
        AsanaClientError::ApiRequest {
            status, message, ..
        } => {
            assert_eq!(status.0, 403);
            assert_eq!(message, "You do not have access to this project");
        }
        other => panic!("expected ApiRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn given_500_when_requested_then_api_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/workspaces"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_workspaces().await.unwrap_err();

    assert!(matches!(err, AsanaClientError::ApiServer { .. }));
}

#[tokio::test]
async fn given_204_when_requested_then_unexpected_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/tasks/1/addTag"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client_for(&server).add_tag_to_task(1, 2).await.unwrap_err();

    assert!(matches!(err, AsanaClientError::UnexpectedStatus { .. }));
    assert_eq!(err.status_code(), Some(204));
}

#[tokio::test]
async fn given_plain_text_success_when_requested_then_unexpected_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/tags/4/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_tag_tasks(4).await.unwrap_err();

    assert!(matches!(err, AsanaClientError::UnexpectedContentType { .. }));
}

#[tokio::test]
async fn given_raw_escape_hatch_when_get_data_then_value_returned_unchanged() {
    let server = MockServer::start().await;
    let data = json!({"id": 1, "custom": {"deep": [true, null]}});
    Mock::given(method("GET"))
        .and(path("/api/1.0/teams/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": data.clone()})))
        .mount(&server)
        .await;

    let value: Value = client_for(&server).get_data("teams/1").await.unwrap();

    assert_eq!(value, data);
}

/// **VALUE**: Verifies the configured timeout is enforced and classified.
///
/// **WHY THIS MATTERS**: Without a timeout a stalled Asana request blocks the caller
/// indefinitely.
///
/// **BUG THIS CATCHES**: Would catch the timeout not being passed to the reqwest
/// client builder.
#[tokio::test]
async fn given_slow_server_when_timeout_elapses_then_http_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/workspaces"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let client =
        AsanaClient::from_config(config_for(&server).with_timeout(Duration::from_millis(100)))
            .unwrap();

    let err = client.list_workspaces().await.unwrap_err();

    assert_eq!(err.error_category(), "timeout");
}

#[tokio::test]
async fn given_unreachable_host_when_requested_then_http_error() {
    let client = AsanaClient::from_config(
        ClientConfig::new("0/key")
            .with_base_url("http://127.0.0.1:1/api/1.0")
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    let err = client.list_workspaces().await.unwrap_err();

    assert!(matches!(err, AsanaClientError::Http { .. }));
}
