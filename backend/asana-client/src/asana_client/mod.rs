//! The Asana REST client.
//!
//! Every endpoint method is a thin wrapper over [`AsanaClient::get_data`] or
//! [`AsanaClient::post_data`], which share one pipeline: build URL → send
//! with basic auth → classify status → check content type → unwrap the
//! `data` envelope.

mod projects;
mod stories;
mod tags;
pub(crate) mod tasks;
pub(crate) mod users;
mod workspaces;

use crate::config::ClientConfig;
use crate::credential::BasicCredential;
use crate::error::asana_client::AsanaClientError;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};

use common::StatusClass;

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::{Url, form_urlencoded};

const JSON_MEDIA_TYPE: &str = "application/json";
const DATA_FIELD: &str = "data";

#[derive(Clone)]
pub struct AsanaClient {
    base_url: Url,
    credential: BasicCredential,
    debug: bool,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for AsanaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsanaClient")
            .field("base_url", &self.base_url.as_str())
            .field("credential", &self.credential)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl AsanaClient {
    /// Client against the public Asana API with default settings.
    ///
    /// # Errors
    /// Returns [`AsanaClientError::Configuration`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>, debug: bool) -> Result<Self, AsanaClientError> {
        Self::from_config(ClientConfig::new(api_key).with_debug(debug))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, AsanaClientError> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Client over any [`Transport`] implementation.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, AsanaClientError> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;
        let credential = BasicCredential::derive(&config.api_key);

        if config.debug {
            debug!(
                "Asana client ready: {} (key {} chars)",
                base_url,
                config.api_key.len()
            );
        }

        Ok(Self {
            base_url,
            credential,
            debug: config.debug,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credential(&self) -> &BasicCredential {
        &self.credential
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// GET `target` (relative to the base URL, may carry a query string) and
    /// decode the `data` field as `T`.
    pub async fn get_data<T: DeserializeOwned>(&self, target: &str) -> Result<T, AsanaClientError> {
        self.execute(HttpMethod::Get, target, Vec::new()).await
    }

    /// POST `form` to `target` and decode the `data` field as `T`.
    pub async fn post_data<T: DeserializeOwned>(
        &self,
        target: &str,
        form: Vec<(String, String)>,
    ) -> Result<T, AsanaClientError> {
        self.execute(HttpMethod::Post, target, form).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        target: &str,
        form: Vec<(String, String)>,
    ) -> Result<T, AsanaClientError> {
        let url = self.base_url.join(target)?;

        if self.debug {
            match method {
                HttpMethod::Get => debug!("-> Calling: {url}"),
                HttpMethod::Post => {
                    debug!("-> Posting to: {url}");
                    debug!("-> Post payload: {form:?}");
                }
            }
        }

        let request = HttpRequest {
            method,
            url: url.clone(),
            authorization: self.credential.header_value(),
            form,
        };

        let response = self.transport.send(request).await?;

        if self.debug {
            debug!("<- Got: {} from {url}", response.status);
            debug!("<- {}", response.body);
        }

        decode_response(response)
    }
}

/// Form-encode a value for use inside a query string.
pub(crate) fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Percent-encode a value for use as a single path segment.
///
/// `byte_serialize` leaves only `[A-Za-z0-9*-._]` unescaped and writes
/// spaces as `+`; a literal `+` is already `%2B`, so swapping `+` for `%20`
/// yields path encoding.
pub(crate) fn encode_path_segment(value: &str) -> String {
    encode_query_value(value).replace('+', "%20")
}

/// Turn a raw response into the decoded `data` payload.
pub(crate) fn decode_response<T: DeserializeOwned>(
    response: HttpResponse,
) -> Result<T, AsanaClientError> {
    match response.status.classify() {
        StatusClass::Success => {}
        StatusClass::ClientError => {
            return Err(AsanaClientError::api_request(response.status, response.body));
        }
        StatusClass::ServerError => {
            return Err(AsanaClientError::api_server(response.status, response.body));
        }
        StatusClass::Unexpected => {
            return Err(AsanaClientError::unexpected_status(response.status, response.body));
        }
    }

    match response.media_type() {
        Some(JSON_MEDIA_TYPE) => {}
        Some(other) => return Err(AsanaClientError::unexpected_content_type(other)),
        None => return Err(AsanaClientError::unexpected_content_type("<missing>")),
    }

    let envelope: Value = serde_json::from_str(&response.body)?;

    let data = match envelope {
        Value::Object(mut fields) => fields.remove(DATA_FIELD),
        _ => None,
    }
    .ok_or_else(|| {
        AsanaClientError::malformed_response(format!(
            "response has no '{DATA_FIELD}' field (HTTP {})",
            response.status
        ))
    })?;

    serde_json::from_value(data).map_err(|e| {
        AsanaClientError::malformed_response(format!("unexpected '{DATA_FIELD}' shape: {e}"))
    })
}
