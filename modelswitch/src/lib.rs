//! Unified facade over the modelswitch workspace crates.
//!
//! This crate is designed to be the single dependency for a presentation
//! layer. It re-exports the conversation core and wires sessions to the HTTP
//! chat endpoint.
//!
//! ```rust,no_run
//! use modelswitch::{EndpointConfig, SubmitOutcome};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = modelswitch::observed_session(&EndpointConfig::from_env(), None)?;
//! session.set_provider("anthropic")?;
//! session.set_credential("sk-ant-...");
//!
//! if let SubmitOutcome::Settled(reply) = session.submit("Hello").await? {
//!     println!("{}", reply.content);
//! }
//! # Ok(())
//! # }
//! ```

mod config;

pub mod prelude;
pub mod runtime;

pub use mchat;
pub use mobserve;
pub use mprovider;

pub use config::{BACKEND_URL_ENV, EndpointConfig};
pub use mchat::{
    ChatError, ChatErrorKind, ChatSession, Conversation, ConversationHooks, ConversationSnapshot,
    ERROR_PREFIX, GREETING, InFlightTurn, NoopConversationHooks, REQUEST_ABANDONED, SYSTEM_PROMPT,
    SendState, SettledTurn, SkipReason, SubmitOutcome, TurnId, TurnStart, UNKNOWN_ERROR,
    fold_outcome,
};
pub use mobserve::{
    FanoutConversationHooks, MetricsConversationHooks, SafeConversationHooks,
    TracingConversationHooks,
};
pub use mprovider::http::{DEFAULT_BASE_URL, HttpChatEndpoint};
pub use mprovider::{
    ChatEndpoint, ChatPayload, ChatReply, EndpointError, EndpointErrorKind, EndpointFuture,
    Message, ProviderError, ProviderErrorKind, ProviderId, Role, SecretString,
};
pub use runtime::{
    build_endpoint, observability_hooks, observed_session, session, session_with_endpoint,
    session_with_hooks,
};
