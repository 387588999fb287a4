//! Chat endpoint HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::{ChatPayload, ChatReply, EndpointError, Message, Role};

pub(crate) fn build_api_request(payload: &ChatPayload) -> ChatApiRequest<'_> {
    ChatApiRequest {
        provider: payload.provider.as_str(),
        model: &payload.model,
        api_key: payload.credential.expose(),
        messages: payload.messages.iter().map(ChatApiMessage::from).collect(),
    }
}

pub(crate) fn parse_reply(body: &str) -> Result<ChatReply, EndpointError> {
    let parsed: ChatApiResponse = serde_json::from_str(body)
        .map_err(|err| EndpointError::malformed_response(err.to_string()))?;

    Ok(ChatReply {
        content: parsed.content.unwrap_or_default(),
    })
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatApiRequest<'a> {
    pub provider: &'a str,
    pub model: &'a str,
    pub api_key: &'a str,
    pub messages: Vec<ChatApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatApiMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

impl<'a> From<&'a Message> for ChatApiMessage<'a> {
    fn from(value: &'a Message) -> Self {
        Self {
            role: value.role,
            content: &value.content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatApiResponse {
    #[serde(default)]
    pub content: Option<String>,
}
