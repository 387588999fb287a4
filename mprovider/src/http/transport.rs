//! Reqwest-based chat endpoint client.

use reqwest::Client;

use crate::{ChatEndpoint, ChatPayload, ChatReply, EndpointError, EndpointFuture};

use super::serde_api::{build_api_request, parse_reply};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct HttpChatEndpoint {
    client: Client,
    base_url: String,
}

impl HttpChatEndpoint {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl ChatEndpoint for HttpChatEndpoint {
    fn send<'a>(
        &'a self,
        payload: ChatPayload,
    ) -> EndpointFuture<'a, Result<ChatReply, EndpointError>> {
        Box::pin(async move {
            let url = self.endpoint("chat");
            let api_request = build_api_request(&payload);

            tracing::debug!(
                phase = "endpoint",
                event = "request",
                url = %url,
                provider = %payload.provider,
                model = %payload.model,
                messages = payload.messages.len()
            );

            let response = self
                .client
                .post(&url)
                .json(&api_request)
                .send()
                .await
                .map_err(|err| EndpointError::transport(err.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| EndpointError::transport(err.to_string()))?;

            if !status.is_success() {
                tracing::warn!(
                    phase = "endpoint",
                    event = "http_failure",
                    url = %url,
                    status = status.as_u16()
                );
                return Err(EndpointError::http(status.as_u16(), body));
            }

            let reply = parse_reply(&body)?;
            tracing::debug!(
                phase = "endpoint",
                event = "reply",
                url = %url,
                content_len = reply.content.len()
            );

            Ok(reply)
        })
    }
}
