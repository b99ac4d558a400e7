//! HTTP status code utilities for response classification.

/// HTTP status code for error categorization.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

/// Outcome of classifying a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Body should carry a JSON `data` envelope.
    Success,
    /// 4xx other than 404.
    ClientError,
    /// Exactly 500.
    ServerError,
    /// Anything the API contract does not describe.
    Unexpected,
}

const NO_CONTENT: u16 = 204;
const NOT_FOUND: u16 = 404;
const INTERNAL_SERVER_ERROR: u16 = 500;

impl HttpStatusCode {
    /// 2xx responses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    pub fn is_not_found(&self) -> bool {
        self.0 == NOT_FOUND
    }

    /// Classify the status the way the Asana API contract expects.
    ///
    /// NOTE: 404 is folded into [`StatusClass::Success`]. Callers have relied
    /// on "not found" flowing through the normal decode path, so it stays even
    /// though it is almost certainly not what a fresh design would do.
    ///
    /// 204 carries no body to decode, so it is reported as
    /// [`StatusClass::Unexpected`] rather than success.
    pub fn classify(&self) -> StatusClass {
        match self.0 {
            NO_CONTENT => StatusClass::Unexpected,
            INTERNAL_SERVER_ERROR => StatusClass::ServerError,
            _ if self.is_not_found() || self.is_success() => StatusClass::Success,
            _ if self.is_client_error() => StatusClass::ClientError,
            _ => StatusClass::Unexpected,
        }
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
