use asana_client::AsanaClientError;
use common::HttpStatusCode;
use models::ModelError;

/// **VALUE**: Verifies client errors carry the file/line where they were raised.
///
/// **WHY THIS MATTERS**: A failed Asana call deep inside an application is only
/// debuggable if the error says which call produced it.
///
/// **BUG THIS CATCHES**: Would catch a helper constructor losing `#[track_caller]`,
/// which would make every error point into the error module instead.
#[test]
fn given_error_helper_when_formatted_then_includes_call_site_location() {
    let err = AsanaClientError::configuration("API key cannot be empty");

    let text = err.to_string();

    assert!(text.contains("Configuration Error"));
    assert!(text.contains("API key cannot be empty"));
    assert!(text.contains("integration_tests/error.rs") || text.contains("error.rs"));
}

#[test]
fn given_model_validation_error_when_converted_then_keeps_message_and_location() {
    let model_err = ModelError::validation("Bad task due date: 2024-02-30");
    let original = match &model_err {
        ModelError::Validation { location, .. } => *location,
    };

    let err = AsanaClientError::from(model_err);

    match err {
        AsanaClientError::Validation { message, location } => {
            assert_eq!(message, "Bad task due date: 2024-02-30");
            assert_eq!(location, original);
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_each_kind_when_categorized_then_stable_names() {
    let cases = [
        (AsanaClientError::configuration("x"), "configuration"),
        (AsanaClientError::validation("x"), "validation"),
        (AsanaClientError::not_implemented("update_task"), "not_implemented"),
        (AsanaClientError::malformed_response("x"), "malformed_response"),
        (AsanaClientError::unexpected_content_type("text/html"), "unexpected_content_type"),
        (AsanaClientError::unexpected_status(HttpStatusCode(204), ""), "unexpected_status"),
        (AsanaClientError::api_request(HttpStatusCode(403), "{}"), "api_request"),
        (AsanaClientError::api_server(HttpStatusCode(500), "{}"), "api_server"),
    ];

    for (err, category) in cases {
        assert_eq!(err.error_category(), category);
    }
}

#[test]
fn given_non_http_error_when_asking_status_then_none() {
    assert_eq!(AsanaClientError::validation("x").status_code(), None);
    assert_eq!(
        AsanaClientError::api_request(HttpStatusCode(401), "").status_code(),
        Some(401)
    );
}
