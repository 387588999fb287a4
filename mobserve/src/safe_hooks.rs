use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use mchat::{ChatError, ConversationHooks, TurnId};
use mprovider::{ChatReply, EndpointError, Message, ProviderId};

/// Swallows panics raised by the wrapped hooks so rendering or telemetry
/// faults never interrupt a turn.
pub struct SafeConversationHooks<H> {
    inner: H,
}

impl<H> SafeConversationHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ConversationHooks for SafeConversationHooks<H>
where
    H: ConversationHooks,
{
    fn on_message_appended(&self, index: usize, message: &Message) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_message_appended(index, message)
        }));
    }

    fn on_selection_changed(&self, provider: ProviderId, model: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_selection_changed(provider, model)
        }));
    }

    fn on_credential_changed(&self, present: bool) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_credential_changed(present)
        }));
    }

    fn on_reset(&self) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_reset()));
    }

    fn on_send_start(&self, turn: TurnId, provider: ProviderId, model: &str, messages: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_send_start(turn, provider, model, messages)
        }));
    }

    fn on_send_settled(
        &self,
        turn: TurnId,
        provider: ProviderId,
        model: &str,
        outcome: Result<&ChatReply, &EndpointError>,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_send_settled(turn, provider, model, outcome, elapsed)
        }));
    }

    fn on_send_abandoned(&self, turn: TurnId) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_send_abandoned(turn)));
    }

    fn on_intent_rejected(&self, error: &ChatError) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_intent_rejected(error)));
    }
}
