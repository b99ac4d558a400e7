// Status classification, content-type check and envelope unwrapping.

use crate::asana_client::decode_response;
use crate::error::asana_client::AsanaClientError;
use crate::tests::mock_transport::json_response;
use crate::transport::HttpResponse;

use common::HttpStatusCode;

use serde_json::{Value, json};

/// **VALUE**: Verifies a 200 JSON response yields the `data` value unchanged.
///
/// **WHY THIS MATTERS**: This is the happy path for every endpoint.
///
/// **BUG THIS CATCHES**: Would catch returning the whole envelope or re-shaping data.
#[test]
fn given_200_json_with_data_when_decoded_then_returns_data_unchanged() {
    let data = json!({"id": 1, "nested": {"list": [1, 2, 3]}, "flag": null});
    let response = json_response(200, json!({"data": data.clone(), "next_page": null}));

    let decoded: Value = decode_response(response).unwrap();

    assert_eq!(decoded, data);
}

/// **VALUE**: Verifies 404 is treated as success and goes through the decode path.
///
/// **WHY THIS MATTERS**: Callers rely on "not found" not raising a request error.
///
/// **BUG THIS CATCHES**: Would catch 404 being reported as ApiRequest.
#[test]
fn given_404_with_data_when_decoded_then_succeeds() {
    let response = json_response(404, json!({"data": {"id": 5}}));

    let decoded: Value = decode_response(response).unwrap();

    assert_eq!(decoded, json!({"id": 5}));
}

#[test]
fn given_404_without_data_when_decoded_then_malformed_not_request_error() {
    let response = json_response(404, json!({"errors": [{"message": "Not found"}]}));

    let result = decode_response::<Value>(response);

    assert!(matches!(result, Err(AsanaClientError::MalformedResponse { .. })));
}

/// **VALUE**: Verifies 403 becomes ApiRequest carrying the status and Asana's message.
///
/// **WHY THIS MATTERS**: Permission failures are the most common user-facing error;
/// the message from Asana is what tells the user which resource was denied.
///
/// **BUG THIS CATCHES**: Would catch the body being dropped or the status lost.
#[test]
fn given_403_when_decoded_then_api_request_error_with_message() {
    let body = json!({"errors": [{"message": "Forbidden"}, {"message": "Not a member"}]});
    let response = json_response(403, body.clone());

    let result = decode_response::<Value>(response);

    match result {
        Err(AsanaClientError::ApiRequest {
            status,
            message,
            body: raw,
            ..
        }) => {
            assert_eq!(status, HttpStatusCode(403));
            assert_eq!(message, "Forbidden; Not a member");
            assert_eq!(raw, body.to_string());
        }
        other => panic!("expected ApiRequest, got {other:?}"),
    }
}

#[test]
fn given_400_with_plain_body_when_decoded_then_message_falls_back_to_body() {
    let response = HttpResponse {
        status: HttpStatusCode(400),
        content_type: Some("text/plain".to_string()),
        body: "bad request".to_string(),
    };

    let err = decode_response::<Value>(response).unwrap_err();

    match err {
        AsanaClientError::ApiRequest { message, .. } => assert_eq!(message, "bad request"),
        other => panic!("expected ApiRequest, got {other:?}"),
    }
}

#[test]
fn given_500_when_decoded_then_api_server_error() {
    let response = json_response(500, json!({"errors": [{"message": "Server Error"}]}));

    let err = decode_response::<Value>(response).unwrap_err();

    assert!(matches!(err, AsanaClientError::ApiServer { .. }));
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.error_category(), "api_server");
}

/// **VALUE**: Verifies codes outside the contract raise UnexpectedStatus.
///
/// **WHY THIS MATTERS**: An unclassified status must never fall through with no value at
/// all; it must be an explicit, inspectable error.
///
/// **BUG THIS CATCHES**: Would catch 204 or 503 silently passing as success.
#[test]
fn given_uncovered_status_when_decoded_then_unexpected_status_error() {
    for code in [204, 302, 503] {
        let response = json_response(code, json!({"data": {}}));

        let err = decode_response::<Value>(response).unwrap_err();

        assert!(
            matches!(err, AsanaClientError::UnexpectedStatus { .. }),
            "{code}: {err:?}"
        );
        assert_eq!(err.status_code(), Some(code));
    }
}

#[test]
fn given_success_with_html_body_when_decoded_then_unexpected_content_type() {
    let response = HttpResponse {
        status: HttpStatusCode(200),
        content_type: Some("text/html; charset=utf-8".to_string()),
        body: "<html></html>".to_string(),
    };

    let err = decode_response::<Value>(response).unwrap_err();

    match err {
        AsanaClientError::UnexpectedContentType { content_type, .. } => {
            assert_eq!(content_type, "text/html");
        }
        other => panic!("expected UnexpectedContentType, got {other:?}"),
    }
}

#[test]
fn given_success_without_content_type_when_decoded_then_unexpected_content_type() {
    let response = HttpResponse {
        status: HttpStatusCode(200),
        content_type: None,
        body: "{\"data\": 1}".to_string(),
    };

    let err = decode_response::<Value>(response).unwrap_err();

    assert!(matches!(err, AsanaClientError::UnexpectedContentType { .. }));
}

#[test]
fn given_json_without_data_field_when_decoded_then_malformed_response() {
    let response = json_response(200, json!({"items": []}));

    let err = decode_response::<Value>(response).unwrap_err();

    assert!(matches!(err, AsanaClientError::MalformedResponse { .. }));
}

#[test]
fn given_invalid_json_body_when_decoded_then_json_error() {
    let response = HttpResponse {
        status: HttpStatusCode(200),
        content_type: Some("application/json".to_string()),
        body: "{not json".to_string(),
    };

    let err = decode_response::<Value>(response).unwrap_err();

    assert!(matches!(err, AsanaClientError::Json { .. }));
}

#[test]
fn given_data_with_wrong_shape_when_decoded_as_task_then_malformed_response() {
    let response = json_response(200, json!({"data": "not a task"}));

    let err = decode_response::<models::Task>(response).unwrap_err();

    assert!(matches!(err, AsanaClientError::MalformedResponse { .. }));
}

#[test]
fn given_task_with_new_assignee_status_when_decoded_then_succeeds() {
    let response = json_response(
        200,
        json!({"data": {"id": 5, "name": "t", "assignee_status": "new"}}),
    );

    let task = decode_response::<models::Task>(response).unwrap();

    assert_eq!(task.assignee_status.as_deref(), Some("new"));
}
