//! Common imports for most modelswitch applications.

pub use crate::{
    BACKEND_URL_ENV, EndpointConfig, build_endpoint, observability_hooks, observed_session,
    session, session_with_endpoint, session_with_hooks,
};
pub use crate::{
    ChatEndpoint, ChatError, ChatErrorKind, ChatPayload, ChatReply, ChatSession, Conversation,
    ConversationHooks, ConversationSnapshot, EndpointError, EndpointErrorKind, InFlightTurn,
    Message, ProviderId, Role, SettledTurn, SkipReason, SubmitOutcome, TurnStart,
};
