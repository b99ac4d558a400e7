use crate::credential::BasicCredential;

use common::RedactedApiKey;

/// **VALUE**: Verifies the credential is `base64(key + ":")` and decodes back to the key.
///
/// **WHY THIS MATTERS**: The derivation is the whole of the authentication scheme.
///
/// **BUG THIS CATCHES**: Would catch URL-safe base64 being used, or the separator
/// colon going missing.
#[test]
fn given_api_keys_when_credential_derived_then_decodes_back_to_key() {
    for key in ["0/abc", "1/2345:678", "ключ", "a"] {
        let credential = BasicCredential::derive(&RedactedApiKey::new(key));

        assert_eq!(credential.decode_username().as_deref(), Some(key));
    }
}

#[test]
fn given_known_key_when_credential_derived_then_matches_reference_encoding() {
    let credential = BasicCredential::derive(&RedactedApiKey::new("abc"));

    assert_eq!(credential.encoded().as_str(), "YWJjOg==");
    assert_eq!(credential.header_value().as_str(), "Basic YWJjOg==");
}

#[test]
fn given_same_key_when_derived_twice_then_identical() {
    let key = RedactedApiKey::new("0/stable");

    let first = BasicCredential::derive(&key);
    let second = BasicCredential::derive(&key);

    assert_eq!(first.encoded().as_str(), second.encoded().as_str());
}

#[test]
fn given_credential_when_debug_formatted_then_redacted() {
    let credential = BasicCredential::derive(&RedactedApiKey::new("abc"));

    assert!(!format!("{credential:?}").contains("YWJjOg"));
}
