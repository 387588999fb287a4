//! Conversation state and request orchestration over a chat endpoint.

mod error;
mod hooks;
mod service;
mod store;
mod types;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, ChatSession, Conversation, ConversationHooks,
        ConversationSnapshot, InFlightTurn, NoopConversationHooks, SendState, SettledTurn,
        SkipReason, SubmitOutcome, TurnId, TurnStart,
    };
    pub use mprovider::{ChatEndpoint, ChatPayload, ChatReply, Message, ProviderId, Role};
}

pub use error::{ChatError, ChatErrorKind};
pub use hooks::{ConversationHooks, NoopConversationHooks};
pub use service::{ChatSession, InFlightTurn, SettledTurn, TurnStart, fold_outcome};
pub use store::Conversation;
pub use types::{
    ConversationSnapshot, ERROR_PREFIX, GREETING, REQUEST_ABANDONED, SYSTEM_PROMPT, SendState,
    SkipReason, SubmitOutcome, TurnId, UNKNOWN_ERROR,
};
