// Construction, authentication and error propagation of AsanaClient.

use crate::error::asana_client::AsanaClientError;
use crate::tests::log_capture;
use crate::tests::mock_transport::{MockTransport, TEST_API_KEY, client_with, json_response};
use crate::{AsanaClient, ClientConfig};

use models::NewTask;

use log::Level;
use serde_json::{Value, json};

/// **VALUE**: Verifies an empty API key is rejected at construction.
///
/// **WHY THIS MATTERS**: An empty key still produces a syntactically valid basic-auth
/// header, so the failure would otherwise surface as a confusing 401 on first use.
///
/// **BUG THIS CATCHES**: Would catch the key check being removed from `validate()`.
#[test]
fn given_empty_api_key_when_constructing_client_then_configuration_error() {
    for key in ["", "   "] {
        let result = AsanaClient::with_transport(ClientConfig::new(key), MockTransport::new());

        assert!(
            matches!(result, Err(AsanaClientError::Configuration { .. })),
            "key {key:?} should be rejected"
        );
    }
}

#[test]
fn given_empty_api_key_when_using_new_then_configuration_error() {
    let result = AsanaClient::new("", false);

    assert!(matches!(result, Err(AsanaClientError::Configuration { .. })));
}

#[test]
fn given_default_config_when_constructing_client_then_targets_asana_v1() {
    let client = AsanaClient::with_transport(
        ClientConfig::new(TEST_API_KEY).with_debug(true),
        MockTransport::new(),
    )
    .unwrap();

    assert_eq!(client.base_url().as_str(), "https://app.asana.com/api/1.0/");
    assert!(client.is_debug());
}

#[test]
fn given_base_url_without_trailing_slash_when_constructing_then_slash_added() {
    let client = AsanaClient::with_transport(
        ClientConfig::new(TEST_API_KEY).with_base_url("http://localhost:9999/api/1.0"),
        MockTransport::new(),
    )
    .unwrap();

    assert_eq!(client.base_url().as_str(), "http://localhost:9999/api/1.0/");
}

/// **VALUE**: Verifies every request carries `Basic base64(key:)`.
///
/// **WHY THIS MATTERS**: Asana authenticates the key as a username with an empty
/// password; any other encoding is a 401.
///
/// **BUG THIS CATCHES**: Would catch the trailing colon being dropped, or the header
/// being built from the raw key.
#[tokio::test]
async fn given_client_when_request_sent_then_authorization_is_basic_key_colon() {
    let transport = MockTransport::new();
    let client = client_with(transport.clone());

    let _: Value = client.get_data("workspaces").await.unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.authorization.as_str(),
        "Basic MC90ZXN0LWFwaS1rZXk6"
    );
}

/// **VALUE**: Verifies debug mode traces the URL, the status and the raw body at
/// debug level, and that a non-debug client traces nothing.
///
/// **WHY THIS MATTERS**: Debug mode is the only way to see what Asana actually sent
/// back when a decode fails; it must not leak into normal operation.
///
/// **BUG THIS CATCHES**: Would catch the trace lines being dropped, moved to another
/// level, or emitted regardless of the flag.
#[tokio::test]
async fn given_debug_client_when_request_sent_then_url_status_and_body_logged() {
    log_capture::install();
    let transport = MockTransport::new();
    let client = AsanaClient::with_transport(
        ClientConfig::new(TEST_API_KEY).with_debug(true),
        transport.clone(),
    )
    .unwrap();
    transport.push_response(json_response(200, json!({"data": ["debug-body-marker"]})));

    let data: Value = client.get_data("workspaces/7001/tags").await.unwrap();

    assert_eq!(data, json!(["debug-body-marker"]));
    let url_lines = log_capture::records_containing("workspaces/7001/tags");
    assert!(url_lines.iter().any(|(_, m)| m.starts_with("-> Calling:")));
    assert!(url_lines.iter().any(|(_, m)| m.starts_with("<- Got: 200")));
    let body_lines = log_capture::records_containing("debug-body-marker");
    assert_eq!(body_lines.len(), 1);
    assert!(
        url_lines
            .iter()
            .chain(body_lines.iter())
            .all(|(level, _)| *level == Level::Debug)
    );
}

#[tokio::test]
async fn given_non_debug_client_when_request_sent_then_nothing_logged() {
    log_capture::install();
    let transport = MockTransport::new();
    let client = client_with(transport.clone());
    transport.push_response(json_response(200, json!({"data": ["quiet-body-marker"]})));

    let _: Value = client.get_data("workspaces/7002/tags").await.unwrap();

    assert!(log_capture::records_containing("workspaces/7002/tags").is_empty());
    assert!(log_capture::records_containing("quiet-body-marker").is_empty());
}

/// **VALUE**: Verifies an invalid due date fails before anything is sent.
///
/// **WHY THIS MATTERS**: A bad date is a caller bug; it must not cost a round trip or
/// create a half-specified task.
///
/// **BUG THIS CATCHES**: Would catch validation moving after the POST.
#[tokio::test]
async fn given_invalid_due_date_when_create_task_then_validation_error_and_no_request() {
    let transport = MockTransport::new();
    let client = client_with(transport.clone());

    let result = client
        .create_task(
            NewTask::builder()
                .with_name("Report")
                .with_workspace(1)
                .with_due_on("2024-02-30"),
        )
        .await;

    assert!(matches!(result, Err(AsanaClientError::Validation { .. })));
    assert!(transport.requests().is_empty());
}

/// **VALUE**: Verifies the update stubs fail loudly.
///
/// **WHY THIS MATTERS**: A stub that returns an empty success would make callers
/// believe their change was saved.
///
/// **BUG THIS CATCHES**: Would catch a stub being changed to `Ok(Value::Null)`.
#[tokio::test]
async fn given_update_stubs_when_called_then_not_implemented_and_no_request() {
    let transport = MockTransport::new();
    let client = client_with(transport.clone());

    let task = client.update_task(1).await.unwrap_err();
    let project = client.update_project(2).await.unwrap_err();
    let workspace = client.update_workspace(3).await.unwrap_err();

    for (err, name) in [
        (task, "update_task"),
        (project, "update_project"),
        (workspace, "update_workspace"),
    ] {
        match err {
            AsanaClientError::NotImplemented { operation, .. } => assert_eq!(operation, name),
            other => panic!("expected NotImplemented, got {other:?}"),
        }
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn given_server_error_when_endpoint_called_then_error_propagates() {
    let transport = MockTransport::new();
    let client = client_with(transport.clone());
    transport.push_response(json_response(500, json!({"errors": []})));

    let result = client.get_task(1).await;

    assert!(matches!(result, Err(AsanaClientError::ApiServer { .. })));
}

#[test]
fn given_client_when_debug_formatted_then_key_not_exposed() {
    let client = client_with(MockTransport::new());

    let debug = format!("{client:?}");

    assert!(!debug.contains(TEST_API_KEY));
    assert!(!debug.contains("MC90ZXN0LWFwaS1rZXk6"));
}
