//! Catalog and endpoint error kinds and error value helpers.
//!
//! ```rust
//! use mprovider::{EndpointError, EndpointErrorKind};
//!
//! let http = EndpointError::http(500, "server overloaded");
//! assert_eq!(http.kind, EndpointErrorKind::Http);
//! assert_eq!(http.status, Some(500));
//! assert_eq!(http.message, "server overloaded");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    UnknownProvider,
    UnknownModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unknown_provider(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::UnknownProvider, message)
    }

    pub fn unknown_model(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::UnknownModel, message)
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ProviderError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointErrorKind {
    /// No response was received.
    Transport,
    /// The endpoint answered with a non-success status.
    Http,
    /// A success status carried a body that is not a chat reply.
    MalformedResponse,
}

/// Failure of a single chat endpoint call.
///
/// `message` is the human-readable part surfaced to the transcript. For
/// [`EndpointErrorKind::Http`] it is the raw response body, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointError {
    pub kind: EndpointErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl EndpointError {
    pub fn new(kind: EndpointErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(EndpointErrorKind::Transport, message)
    }

    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self {
            kind: EndpointErrorKind::Http,
            message: body.into(),
            status: Some(status),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(EndpointErrorKind::MalformedResponse, message)
    }
}

impl Display for EndpointError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} ({status}): {}", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for EndpointError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_http_failures_carry_status() {
        assert_eq!(EndpointError::transport("connection refused").status, None);
        assert_eq!(EndpointError::malformed_response("eof").status, None);
        assert_eq!(EndpointError::http(502, "bad gateway").status, Some(502));
    }

    #[test]
    fn display_includes_kind_and_status() {
        assert_eq!(
            EndpointError::http(500, "server overloaded").to_string(),
            "Http (500): server overloaded"
        );
        assert_eq!(
            EndpointError::transport("connection refused").to_string(),
            "Transport: connection refused"
        );
        assert_eq!(
            ProviderError::unknown_model("nope").to_string(),
            "UnknownModel: nope"
        );
    }
}
