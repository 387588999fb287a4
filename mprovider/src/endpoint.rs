//! Chat endpoint contract shared by the HTTP client and test doubles.

use std::future::Future;
use std::pin::Pin;

use crate::{EndpointError, Message, ProviderId, SecretString};

pub type EndpointFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One outbound chat request.
///
/// `messages` is the full history at send time, system seed included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPayload {
    pub provider: ProviderId,
    pub model: String,
    pub credential: SecretString,
    pub messages: Vec<Message>,
}

impl ChatPayload {
    pub fn new(
        provider: ProviderId,
        model: impl Into<String>,
        credential: SecretString,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            credential,
            messages,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
}

impl ChatReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

pub trait ChatEndpoint: Send + Sync + std::fmt::Debug {
    fn send<'a>(&'a self, payload: ChatPayload)
    -> EndpointFuture<'a, Result<ChatReply, EndpointError>>;
}
