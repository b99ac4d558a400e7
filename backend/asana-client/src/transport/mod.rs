//! The HTTP seam between [`AsanaClient`](crate::AsanaClient) and the network.
//!
//! The client only ever needs "send this authenticated GET/POST, give me the
//! status, content type and body". Keeping that behind a trait lets tests
//! swap in a recording transport.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use crate::error::asana_client::AsanaClientError;

use common::{HttpStatusCode, RedactedApiKey};

use std::fmt;

use async_trait::async_trait;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    /// Full `Authorization` header value.
    pub authorization: RedactedApiKey,
    /// Form fields for POST, sent urlencoded in this order. Empty for GET.
    pub form: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: HttpStatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    /// Media type without parameters (`application/json; charset=UTF-8` →
    /// `application/json`).
    pub fn media_type(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .map(|value| value.split(';').next().unwrap_or_default().trim())
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AsanaClientError>;
}
