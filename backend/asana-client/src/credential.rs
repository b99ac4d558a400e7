//! HTTP basic-auth credential derived from the Asana API key.
//!
//! Asana accepts the API key as the basic-auth username with an empty
//! password, so the credential is `base64(key + ":")`.

use common::RedactedApiKey;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const BASIC_SCHEME: &str = "Basic";

#[derive(Debug, Clone)]
pub struct BasicCredential {
    encoded: RedactedApiKey,
}

impl BasicCredential {
    pub fn derive(api_key: &RedactedApiKey) -> Self {
        let encoded = STANDARD.encode(format!("{}:", api_key.as_str()));
        Self {
            encoded: RedactedApiKey::new(encoded),
        }
    }

    /// The base64 token without the scheme.
    pub fn encoded(&self) -> &RedactedApiKey {
        &self.encoded
    }

    /// Full `Authorization` header value.
    pub fn header_value(&self) -> RedactedApiKey {
        RedactedApiKey::new(format!("{BASIC_SCHEME} {}", self.encoded.as_str()))
    }

    /// Recover the username (the API key) from the encoded credential.
    pub fn decode_username(&self) -> Option<String> {
        let bytes = STANDARD.decode(self.encoded.as_str()).ok()?;
        let decoded = String::from_utf8(bytes).ok()?;
        decoded.strip_suffix(':').map(str::to_owned)
    }
}
