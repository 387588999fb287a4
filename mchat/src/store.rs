//! Single-writer conversation store: history plus provider, model, and credential selection.
//!
//! ```rust
//! use mchat::Conversation;
//! use mprovider::ProviderId;
//!
//! let mut conversation = Conversation::new();
//! conversation.set_provider("anthropic").expect("known provider");
//! assert_eq!(conversation.model(), "claude-3-5-sonnet-20241022");
//!
//! let snapshot = conversation.snapshot();
//! assert_eq!(snapshot.provider, ProviderId::Anthropic);
//! assert_eq!(snapshot.transcript().count(), 1);
//! ```

use std::sync::Arc;

use mprovider::{ChatPayload, Message, ProviderId, Role, SecretString};

use crate::{
    ChatError, ConversationHooks, ConversationSnapshot, GREETING, NoopConversationHooks,
    SYSTEM_PROMPT, SendState, TurnId,
};

pub struct Conversation {
    history: Vec<Message>,
    provider: ProviderId,
    model: &'static str,
    credential: SecretString,
    send_state: SendState,
    next_turn: u64,
    hooks: Arc<dyn ConversationHooks>,
}

impl Conversation {
    /// Starts a session with the system seed and the assistant greeting.
    pub fn new() -> Self {
        Self::with_hooks(Arc::new(NoopConversationHooks))
    }

    pub fn with_hooks(hooks: Arc<dyn ConversationHooks>) -> Self {
        let provider = ProviderId::OpenAi;
        Self {
            history: vec![Message::system(SYSTEM_PROMPT), Message::assistant(GREETING)],
            provider,
            model: provider.default_model(),
            credential: SecretString::default(),
            send_state: SendState::Idle,
            next_turn: 1,
            hooks,
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn provider(&self) -> ProviderId {
        self.provider
    }

    pub fn model(&self) -> &str {
        self.model
    }

    pub fn available_models(&self) -> &'static [&'static str] {
        self.provider.models()
    }

    /// Exposed for display masking only.
    pub fn credential(&self) -> &SecretString {
        &self.credential
    }

    pub fn send_state(&self) -> SendState {
        self.send_state
    }

    pub fn is_pending(&self) -> bool {
        self.send_state.is_pending()
    }

    pub fn append_message(&mut self, role: Role, content: impl Into<String>) -> &Message {
        let index = self.history.len();
        self.history.push(Message::new(role, content));
        let message = &self.history[index];
        self.hooks.on_message_appended(index, message);
        message
    }

    /// Selects a provider by wire id and resets the model to its default.
    pub fn set_provider(&mut self, provider: &str) -> Result<ProviderId, ChatError> {
        let provider = provider
            .parse::<ProviderId>()
            .map_err(|err| self.reject(err.into()))?;

        self.select_provider(provider);
        Ok(provider)
    }

    pub fn select_provider(&mut self, provider: ProviderId) {
        self.provider = provider;
        self.model = provider.default_model();
        self.hooks.on_selection_changed(self.provider, self.model);
    }

    pub fn set_model(&mut self, model: &str) -> Result<(), ChatError> {
        let model = self
            .provider
            .resolve_model(model)
            .map_err(|err| self.reject(err.into()))?;

        self.model = model;
        self.hooks.on_selection_changed(self.provider, self.model);
        Ok(())
    }

    pub fn set_credential(&mut self, credential: impl Into<String>) {
        self.credential = SecretString::new(credential);
        self.hooks.on_credential_changed(!self.credential.is_empty());
    }

    /// Truncates history to the system seed. Selection and credential are kept.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Message::system(SYSTEM_PROMPT));
        self.hooks.on_reset();
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            history: self.history.clone(),
            provider: self.provider,
            model: self.model.to_string(),
            pending: self.is_pending(),
            has_credential: !self.credential.is_empty(),
        }
    }

    pub(crate) fn hooks(&self) -> &dyn ConversationHooks {
        self.hooks.as_ref()
    }

    pub(crate) fn reject(&self, error: ChatError) -> ChatError {
        self.hooks.on_intent_rejected(&error);
        error
    }

    pub(crate) fn payload(&self) -> ChatPayload {
        ChatPayload::new(
            self.provider,
            self.model,
            self.credential.clone(),
            self.history.clone(),
        )
    }

    /// Idle -> Sending. Callers check `is_pending` first.
    pub(crate) fn begin_send(&mut self) -> TurnId {
        let turn = TurnId::new(self.next_turn);
        self.next_turn += 1;
        self.send_state = SendState::Sending { turn };
        turn
    }

    /// Sending -> Idle for the matching turn only.
    pub(crate) fn finish_send(&mut self, turn: TurnId) -> bool {
        match self.send_state {
            SendState::Sending { turn: current } if current == turn => {
                self.send_state = SendState::Idle;
                true
            }
            _ => false,
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("history", &self.history)
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("credential", &self.credential)
            .field("send_state", &self.send_state)
            .finish_non_exhaustive()
    }
}
