//! Session wiring helpers.

use std::sync::Arc;

use mchat::{ChatSession, ConversationHooks};
use mobserve::{
    FanoutConversationHooks, MetricsConversationHooks, SafeConversationHooks,
    TracingConversationHooks,
};
use mprovider::http::HttpChatEndpoint;
use mprovider::{ChatEndpoint, EndpointError};
use reqwest::Client;

use crate::EndpointConfig;

pub fn build_endpoint(config: &EndpointConfig) -> Result<Arc<dyn ChatEndpoint>, EndpointError> {
    let http = Client::builder()
        .build()
        .map_err(|err| EndpointError::transport(err.to_string()))?;

    Ok(Arc::new(
        HttpChatEndpoint::new(http).with_base_url(config.base_url.clone()),
    ))
}

pub fn session(config: &EndpointConfig) -> Result<ChatSession, EndpointError> {
    Ok(ChatSession::new(build_endpoint(config)?))
}

pub fn session_with_hooks(
    config: &EndpointConfig,
    hooks: Arc<dyn ConversationHooks>,
) -> Result<ChatSession, EndpointError> {
    Ok(ChatSession::with_hooks(build_endpoint(config)?, hooks))
}

pub fn session_with_endpoint(endpoint: Arc<dyn ChatEndpoint>) -> ChatSession {
    ChatSession::new(endpoint)
}

/// Tracing and metrics hooks, each isolated from panics.
pub fn observability_hooks() -> FanoutConversationHooks {
    FanoutConversationHooks::new()
        .with(Arc::new(SafeConversationHooks::new(TracingConversationHooks)))
        .with(Arc::new(SafeConversationHooks::new(MetricsConversationHooks)))
}

/// Session with tracing and metrics wired in. `renderer`, when given, is
/// notified after them.
pub fn observed_session(
    config: &EndpointConfig,
    renderer: Option<Arc<dyn ConversationHooks>>,
) -> Result<ChatSession, EndpointError> {
    let mut hooks = observability_hooks();
    if let Some(renderer) = renderer {
        hooks = hooks.with(renderer);
    }

    session_with_hooks(config, Arc::new(hooks))
}
