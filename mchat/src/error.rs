//! Chat-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use mprovider::{ProviderError, ProviderErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    InvalidProvider,
    InvalidModel,
    EmptyCredential,
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_provider(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidProvider, message)
    }

    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidModel, message)
    }

    pub fn empty_credential(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::EmptyCredential, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidRequest, message)
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ChatError {}

impl From<ProviderError> for ChatError {
    fn from(value: ProviderError) -> Self {
        match value.kind {
            ProviderErrorKind::UnknownProvider => ChatError::invalid_provider(value.message),
            ProviderErrorKind::UnknownModel => ChatError::invalid_model(value.message),
        }
    }
}
