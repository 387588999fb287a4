//! Request orchestration: one user turn to one endpoint call, folded back into history.
//!
//! A turn can be driven in one call with [`ChatSession::submit`], or in three
//! phases (`begin_submit`, [`InFlightTurn::dispatch`], `settle`) so the caller
//! can keep applying intents to the session while the request is outstanding.

use std::sync::Arc;
use std::time::{Duration, Instant};

use mprovider::{ChatEndpoint, ChatPayload, ChatReply, EndpointError, Message, ProviderId, Role};

use crate::{
    ChatError, Conversation, ConversationHooks, ConversationSnapshot, ERROR_PREFIX,
    REQUEST_ABANDONED, SendState, SkipReason, SubmitOutcome, TurnId, UNKNOWN_ERROR,
};

pub struct ChatSession {
    conversation: Conversation,
    endpoint: Arc<dyn ChatEndpoint>,
}

impl ChatSession {
    pub fn new(endpoint: Arc<dyn ChatEndpoint>) -> Self {
        Self::with_conversation(endpoint, Conversation::new())
    }

    pub fn with_hooks(endpoint: Arc<dyn ChatEndpoint>, hooks: Arc<dyn ConversationHooks>) -> Self {
        Self::with_conversation(endpoint, Conversation::with_hooks(hooks))
    }

    pub fn with_conversation(endpoint: Arc<dyn ChatEndpoint>, conversation: Conversation) -> Self {
        Self {
            conversation,
            endpoint,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        self.conversation.snapshot()
    }

    pub fn is_pending(&self) -> bool {
        self.conversation.is_pending()
    }

    pub fn set_provider(&mut self, provider: &str) -> Result<ProviderId, ChatError> {
        self.conversation.set_provider(provider)
    }

    pub fn select_provider(&mut self, provider: ProviderId) {
        self.conversation.select_provider(provider);
    }

    pub fn set_model(&mut self, model: &str) -> Result<(), ChatError> {
        self.conversation.set_model(model)
    }

    pub fn set_credential(&mut self, credential: impl Into<String>) {
        self.conversation.set_credential(credential);
    }

    pub fn reset(&mut self) {
        self.conversation.reset();
    }

    /// Runs a full turn. Endpoint failures are folded into the transcript and
    /// never returned as `Err`.
    ///
    /// Dropping the returned future mid-request (a timeout, `select!`, an
    /// aborted task) abandons the turn: the session goes back to Idle and an
    /// `"Error: request abandoned"` message is appended.
    pub async fn submit(&mut self, text: &str) -> Result<SubmitOutcome, ChatError> {
        let turn = match self.begin_submit(text)? {
            TurnStart::Skipped(reason) => return Ok(SubmitOutcome::Skipped(reason)),
            TurnStart::InFlight(turn) => turn,
        };

        let guard = AbandonOnDrop::new(&mut self.conversation, turn.id());
        let settled = turn.dispatch().await;
        guard.disarm();

        let reply = self.settle(settled)?.clone();
        Ok(SubmitOutcome::Settled(reply))
    }

    /// Idle -> Sending. Appends the user message and builds the payload from
    /// the full history, system seed included.
    pub fn begin_submit(&mut self, text: &str) -> Result<TurnStart, ChatError> {
        let content = text.trim();
        if content.is_empty() {
            return Ok(TurnStart::Skipped(SkipReason::EmptyInput));
        }

        if self.conversation.is_pending() {
            return Ok(TurnStart::Skipped(SkipReason::Busy));
        }

        if self.conversation.credential().is_empty() {
            let error = ChatError::empty_credential(format!(
                "an API key is required for provider '{}'",
                self.conversation.provider()
            ));
            return Err(self.conversation.reject(error));
        }

        self.conversation.append_message(Role::User, content);
        let turn = self.conversation.begin_send();
        let payload = self.conversation.payload();

        self.conversation.hooks().on_send_start(
            turn,
            payload.provider,
            &payload.model,
            payload.messages.len(),
        );

        Ok(TurnStart::InFlight(InFlightTurn {
            turn,
            payload,
            endpoint: Arc::clone(&self.endpoint),
        }))
    }

    /// Sending -> Idle. Appends the reply or the folded error and returns it.
    pub fn settle(&mut self, settled: SettledTurn) -> Result<&Message, ChatError> {
        let SettledTurn {
            turn,
            provider,
            model,
            outcome,
            elapsed,
        } = settled;

        if !self.conversation.finish_send(turn) {
            return Err(reject_stale(&self.conversation, turn, "settled"));
        }

        self.conversation
            .hooks()
            .on_send_settled(turn, provider, &model, outcome.as_ref(), elapsed);

        let reply = fold_outcome(outcome);
        Ok(self.conversation.append_message(reply.role, reply.content))
    }

    /// Sending -> Idle without a reply, for a split-phase turn whose
    /// [`InFlightTurn`] or dispatch future was dropped.
    pub fn abandon(&mut self, turn: TurnId) -> Result<&Message, ChatError> {
        abandon_turn(&mut self.conversation, turn)
    }
}

fn reject_stale(conversation: &Conversation, turn: TurnId, action: &str) -> ChatError {
    let error = ChatError::invalid_request(match conversation.send_state() {
        SendState::Idle => format!("{turn} {action} while no request is in flight"),
        SendState::Sending { turn: current } => {
            format!("{turn} {action} while {current} is in flight")
        }
    });
    conversation.reject(error)
}

fn abandon_turn(conversation: &mut Conversation, turn: TurnId) -> Result<&Message, ChatError> {
    if !conversation.finish_send(turn) {
        return Err(reject_stale(conversation, turn, "abandoned"));
    }

    conversation.hooks().on_send_abandoned(turn);

    let reply = fold_outcome(Err(EndpointError::transport(REQUEST_ABANDONED)));
    Ok(conversation.append_message(reply.role, reply.content))
}

/// Abandons the turn unless disarmed once its reply is in hand.
struct AbandonOnDrop<'a> {
    conversation: &'a mut Conversation,
    turn: Option<TurnId>,
}

impl<'a> AbandonOnDrop<'a> {
    fn new(conversation: &'a mut Conversation, turn: TurnId) -> Self {
        Self {
            conversation,
            turn: Some(turn),
        }
    }

    fn disarm(mut self) {
        self.turn = None;
    }
}

impl Drop for AbandonOnDrop<'_> {
    fn drop(&mut self) {
        if let Some(turn) = self.turn.take() {
            let _ = abandon_turn(self.conversation, turn);
        }
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("conversation", &self.conversation)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[derive(Debug)]
#[must_use = "an in-flight turn keeps the session busy until it is settled or abandoned"]
pub enum TurnStart {
    Skipped(SkipReason),
    InFlight(InFlightTurn),
}

/// A request that has been committed to history but not yet sent.
///
/// Dropping it, or the future returned by [`InFlightTurn::dispatch`], leaves
/// the session `Sending` until [`ChatSession::abandon`] is called with its id.
#[derive(Debug)]
#[must_use = "the session stays busy until this turn is settled or abandoned"]
pub struct InFlightTurn {
    turn: TurnId,
    payload: ChatPayload,
    endpoint: Arc<dyn ChatEndpoint>,
}

impl InFlightTurn {
    pub fn id(&self) -> TurnId {
        self.turn
    }

    pub fn payload(&self) -> &ChatPayload {
        &self.payload
    }

    /// Performs the endpoint call. Always runs to completion.
    pub async fn dispatch(self) -> SettledTurn {
        let Self {
            turn,
            payload,
            endpoint,
        } = self;
        let provider = payload.provider;
        let model = payload.model.clone();

        let started = Instant::now();
        let outcome = endpoint.send(payload).await;

        SettledTurn {
            turn,
            provider,
            model,
            outcome,
            elapsed: started.elapsed(),
        }
    }
}

/// Endpoint result for one turn. Only [`InFlightTurn::dispatch`] produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledTurn {
    turn: TurnId,
    provider: ProviderId,
    model: String,
    outcome: Result<ChatReply, EndpointError>,
    elapsed: Duration,
}

impl SettledTurn {
    pub fn turn(&self) -> TurnId {
        self.turn
    }

    pub fn provider(&self) -> ProviderId {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn outcome(&self) -> Result<&ChatReply, &EndpointError> {
        self.outcome.as_ref()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Maps an endpoint result to the assistant message appended to history.
pub fn fold_outcome(outcome: Result<ChatReply, EndpointError>) -> Message {
    match outcome {
        Ok(reply) => Message::assistant(reply.content),
        Err(error) => {
            let detail = if error.message.is_empty() {
                UNKNOWN_ERROR
            } else {
                error.message.as_str()
            };
            Message::assistant(format!("{ERROR_PREFIX}{detail}"))
        }
    }
}
