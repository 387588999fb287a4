//! Metrics-based observability hooks for conversation sends.
//!
//! ```rust
//! use mchat::ConversationHooks;
//! use mobserve::MetricsConversationHooks;
//!
//! fn accepts_hooks(_hooks: &dyn ConversationHooks) {}
//!
//! let hooks = MetricsConversationHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use mchat::{ChatError, ConversationHooks, TurnId};
use mprovider::{ChatReply, EndpointError, Message, ProviderId};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsConversationHooks;

impl ConversationHooks for MetricsConversationHooks {
    fn on_message_appended(&self, _index: usize, message: &Message) {
        metrics::counter!(
            "modelswitch_messages_appended_total",
            "role" => message.role.as_str()
        )
        .increment(1);
    }

    fn on_selection_changed(&self, provider: ProviderId, model: &str) {
        metrics::counter!(
            "modelswitch_selection_changed_total",
            "provider" => provider.to_string(),
            "model" => model.to_string()
        )
        .increment(1);
    }

    fn on_reset(&self) {
        metrics::counter!("modelswitch_reset_total").increment(1);
    }

    fn on_send_start(&self, _turn: TurnId, provider: ProviderId, model: &str, messages: usize) {
        metrics::counter!(
            "modelswitch_send_start_total",
            "provider" => provider.to_string(),
            "model" => model.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "modelswitch_send_payload_messages",
            "provider" => provider.to_string()
        )
        .record(messages as f64);
    }

    fn on_send_settled(
        &self,
        _turn: TurnId,
        provider: ProviderId,
        model: &str,
        outcome: Result<&ChatReply, &EndpointError>,
        elapsed: Duration,
    ) {
        match outcome {
            Ok(_) => {
                metrics::counter!(
                    "modelswitch_send_success_total",
                    "provider" => provider.to_string(),
                    "model" => model.to_string()
                )
                .increment(1);
            }
            Err(error) => {
                metrics::counter!(
                    "modelswitch_send_failure_total",
                    "provider" => provider.to_string(),
                    "model" => model.to_string(),
                    "error_kind" => format!("{:?}", error.kind)
                )
                .increment(1);
            }
        }

        metrics::histogram!(
            "modelswitch_send_latency_seconds",
            "provider" => provider.to_string()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_send_abandoned(&self, _turn: TurnId) {
        metrics::counter!("modelswitch_send_abandoned_total").increment(1);
    }

    fn on_intent_rejected(&self, error: &ChatError) {
        metrics::counter!(
            "modelswitch_intent_rejected_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }
}
