//! Forwards every callback to an ordered list of hooks.

use std::sync::Arc;
use std::time::Duration;

use mchat::{ChatError, ConversationHooks, TurnId};
use mprovider::{ChatReply, EndpointError, Message, ProviderId};

#[derive(Clone, Default)]
pub struct FanoutConversationHooks {
    hooks: Vec<Arc<dyn ConversationHooks>>,
}

impl FanoutConversationHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hooks: Arc<dyn ConversationHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl ConversationHooks for FanoutConversationHooks {
    fn on_message_appended(&self, index: usize, message: &Message) {
        for hooks in &self.hooks {
            hooks.on_message_appended(index, message);
        }
    }

    fn on_selection_changed(&self, provider: ProviderId, model: &str) {
        for hooks in &self.hooks {
            hooks.on_selection_changed(provider, model);
        }
    }

    fn on_credential_changed(&self, present: bool) {
        for hooks in &self.hooks {
            hooks.on_credential_changed(present);
        }
    }

    fn on_reset(&self) {
        for hooks in &self.hooks {
            hooks.on_reset();
        }
    }

    fn on_send_start(&self, turn: TurnId, provider: ProviderId, model: &str, messages: usize) {
        for hooks in &self.hooks {
            hooks.on_send_start(turn, provider, model, messages);
        }
    }

    fn on_send_settled(
        &self,
        turn: TurnId,
        provider: ProviderId,
        model: &str,
        outcome: Result<&ChatReply, &EndpointError>,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_send_settled(turn, provider, model, outcome, elapsed);
        }
    }

    fn on_send_abandoned(&self, turn: TurnId) {
        for hooks in &self.hooks {
            hooks.on_send_abandoned(turn);
        }
    }

    fn on_intent_rejected(&self, error: &ChatError) {
        for hooks in &self.hooks {
            hooks.on_intent_rejected(error);
        }
    }
}
