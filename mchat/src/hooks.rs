//! Observer contract for rendering and instrumenting a conversation.

use std::time::Duration;

use mprovider::{ChatReply, EndpointError, Message, ProviderId};

use crate::{ChatError, TurnId};

pub trait ConversationHooks: Send + Sync {
    fn on_message_appended(&self, _index: usize, _message: &Message) {}

    fn on_selection_changed(&self, _provider: ProviderId, _model: &str) {}

    fn on_credential_changed(&self, _present: bool) {}

    fn on_reset(&self) {}

    fn on_send_start(&self, _turn: TurnId, _provider: ProviderId, _model: &str, _messages: usize) {
    }

    fn on_send_settled(
        &self,
        _turn: TurnId,
        _provider: ProviderId,
        _model: &str,
        _outcome: Result<&ChatReply, &EndpointError>,
        _elapsed: Duration,
    ) {
    }

    /// A turn left `Sending` without a reply, because its request was dropped.
    fn on_send_abandoned(&self, _turn: TurnId) {}

    fn on_intent_rejected(&self, _error: &ChatError) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopConversationHooks;

impl ConversationHooks for NoopConversationHooks {}
