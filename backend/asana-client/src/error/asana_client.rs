//! Error types for Asana API calls.
//!
//! - HTTP status codes stored directly as [`HttpStatusCode`]
//! - Every variant carries an [`ErrorLocation`]
//! - `#[track_caller]` on constructors and `From` impls for location capture

use models::ModelError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use serde::Deserialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AsanaClientError {
    #[error("Configuration Error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected Status Error: HTTP {status} - {body} {location}")]
    UnexpectedStatus {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("API Request Error: HTTP {status} - {message} {location}")]
    ApiRequest {
        status: HttpStatusCode,
        message: String,
        body: String,
        location: ErrorLocation,
    },

    #[error("API Server Error: HTTP {status} - {message} {location}")]
    ApiServer {
        status: HttpStatusCode,
        message: String,
        body: String,
        location: ErrorLocation,
    },

    #[error("Unexpected Content Type Error: expected application/json, got '{content_type}' {location}")]
    UnexpectedContentType {
        content_type: String,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not Implemented Error: {operation} {location}")]
    NotImplemented {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

/// Error envelope Asana sends with 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEntry {
    #[serde(default)]
    message: Option<String>,
}

/// Pull the human-readable messages out of an Asana error body.
///
/// Falls back to the raw body when it is not the usual `{"errors": [...]}`.
fn api_error_message(body: &str) -> String {
    let messages: Vec<String> = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.errors.into_iter().filter_map(|e| e.message).collect())
        .unwrap_or_default();

    if messages.is_empty() {
        body.to_string()
    } else {
        messages.join("; ")
    }
}

impl AsanaClientError {
    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        AsanaClientError::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        AsanaClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_implemented(operation: &'static str) -> Self {
        AsanaClientError::NotImplemented {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_response(message: impl Into<String>) -> Self {
        AsanaClientError::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_content_type(content_type: impl Into<String>) -> Self {
        AsanaClientError::UnexpectedContentType {
            content_type: content_type.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_status(status: HttpStatusCode, body: impl Into<String>) -> Self {
        AsanaClientError::UnexpectedStatus {
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api_request(status: HttpStatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        AsanaClientError::ApiRequest {
            status,
            message: api_error_message(&body),
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api_server(status: HttpStatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        AsanaClientError::ApiServer {
            status,
            message: api_error_message(&body),
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AsanaClientError::UnexpectedStatus { status, .. }
            | AsanaClientError::ApiRequest { status, .. }
            | AsanaClientError::ApiServer { status, .. } => Some(status.0),
            _ => None,
        }
    }

    /// Stable category name, one per error kind.
    pub fn error_category(&self) -> &'static str {
        match self {
            AsanaClientError::Configuration { .. } => "configuration",
            AsanaClientError::UnexpectedStatus { .. } => "unexpected_status",
            AsanaClientError::ApiRequest { .. } => "api_request",
            AsanaClientError::ApiServer { .. } => "api_server",
            AsanaClientError::UnexpectedContentType { .. } => "unexpected_content_type",
            AsanaClientError::MalformedResponse { .. } => "malformed_response",
            AsanaClientError::Validation { .. } => "validation",
            AsanaClientError::NotImplemented { .. } => "not_implemented",
            AsanaClientError::Http { is_timeout: true, .. } => "timeout",
            AsanaClientError::Http { is_connection: true, .. } => "connection",
            AsanaClientError::Http { .. } => "http",
            AsanaClientError::Json { .. } => "json",
            AsanaClientError::UrlParse { .. } => "url_parse",
        }
    }
}

impl From<ModelError> for AsanaClientError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Validation { message, location } => {
                AsanaClientError::Validation { message, location }
            }
        }
    }
}

impl From<url::ParseError> for AsanaClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        AsanaClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AsanaClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        AsanaClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AsanaClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        AsanaClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
