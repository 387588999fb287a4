//! Session state, turn, and submit outcome types.

use std::fmt::{Display, Formatter};

use mprovider::{Message, ProviderId, Role};

pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

pub const GREETING: &str = "Hi! Ask me anything, and you can switch models from the top toolbar.";

/// Prefix marking an assistant message that reports a failed send.
pub const ERROR_PREFIX: &str = "Error: ";

pub const UNKNOWN_ERROR: &str = "Unknown error";

pub const REQUEST_ABANDONED: &str = "request abandoned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnId(u64);

impl TurnId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for TurnId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "turn-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending {
        turn: TurnId,
    },
}

impl SendState {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Sending { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The submitted text was empty after trimming.
    EmptyInput,
    /// A request is already in flight.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Skipped(SkipReason),
    /// The turn ran to completion; holds the appended assistant message.
    Settled(Message),
}

impl SubmitOutcome {
    pub fn reply(&self) -> Option<&Message> {
        match self {
            Self::Settled(message) => Some(message),
            Self::Skipped(_) => None,
        }
    }
}

/// Read-only view of a conversation for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSnapshot {
    pub history: Vec<Message>,
    pub provider: ProviderId,
    pub model: String,
    pub pending: bool,
    pub has_credential: bool,
}

impl ConversationSnapshot {
    /// Messages shown to the user; system messages are sent but never displayed.
    pub fn transcript(&self) -> impl Iterator<Item = &Message> {
        self.history
            .iter()
            .filter(|message| message.role != Role::System)
    }

    pub fn available_models(&self) -> &'static [&'static str] {
        self.provider.models()
    }
}
