//! Tracing-based observability hooks for conversation mutations and sends.
//!
//! ```rust
//! use mchat::ConversationHooks;
//! use mobserve::TracingConversationHooks;
//!
//! fn accepts_hooks(_hooks: &dyn ConversationHooks) {}
//!
//! let hooks = TracingConversationHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use mchat::{ChatError, ConversationHooks, TurnId};
use mprovider::{ChatReply, EndpointError, Message, ProviderId};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConversationHooks;

impl ConversationHooks for TracingConversationHooks {
    fn on_message_appended(&self, index: usize, message: &Message) {
        tracing::debug!(
            phase = "store",
            event = "message_appended",
            index,
            role = message.role.as_str(),
            content_len = message.content.len()
        );
    }

    fn on_selection_changed(&self, provider: ProviderId, model: &str) {
        tracing::info!(
            phase = "store",
            event = "selection_changed",
            provider = %provider,
            model
        );
    }

    fn on_credential_changed(&self, present: bool) {
        tracing::info!(phase = "store", event = "credential_changed", present);
    }

    fn on_reset(&self) {
        tracing::info!(phase = "store", event = "reset");
    }

    fn on_send_start(&self, turn: TurnId, provider: ProviderId, model: &str, messages: usize) {
        tracing::info!(
            phase = "send",
            event = "start",
            turn = %turn,
            provider = %provider,
            model,
            messages
        );
    }

    fn on_send_settled(
        &self,
        turn: TurnId,
        provider: ProviderId,
        model: &str,
        outcome: Result<&ChatReply, &EndpointError>,
        elapsed: Duration,
    ) {
        match outcome {
            Ok(reply) => tracing::info!(
                phase = "send",
                event = "success",
                turn = %turn,
                provider = %provider,
                model,
                elapsed_ms = elapsed.as_millis() as u64,
                content_len = reply.content.len()
            ),
            Err(error) => tracing::error!(
                phase = "send",
                event = "failure",
                turn = %turn,
                provider = %provider,
                model,
                elapsed_ms = elapsed.as_millis() as u64,
                error_kind = ?error.kind,
                status = error.status,
                error = %error
            ),
        }
    }

    fn on_send_abandoned(&self, turn: TurnId) {
        tracing::warn!(phase = "send", event = "abandoned", turn = %turn);
    }

    fn on_intent_rejected(&self, error: &ChatError) {
        tracing::warn!(
            phase = "intent",
            event = "rejected",
            error_kind = ?error.kind,
            error = %error
        );
    }
}
