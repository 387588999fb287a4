use std::sync::{Arc, Mutex};
use std::time::Duration;

use mchat::prelude::*;
use mchat::{GREETING, SYSTEM_PROMPT};
use mprovider::{EndpointError, EndpointFuture};

type EventLog = Arc<Mutex<Vec<String>>>;

#[derive(Debug)]
struct ScriptedEndpoint {
    reply: Result<ChatReply, EndpointError>,
    log: EventLog,
}

impl ChatEndpoint for ScriptedEndpoint {
    fn send<'a>(
        &'a self,
        payload: ChatPayload,
    ) -> EndpointFuture<'a, Result<ChatReply, EndpointError>> {
        Box::pin(async move {
            self.log
                .lock()
                .expect("log lock")
                .push(format!("endpoint:{}", payload.messages.len()));
            self.reply.clone()
        })
    }
}

struct LoggingHooks {
    log: EventLog,
}

impl ConversationHooks for LoggingHooks {
    fn on_message_appended(&self, index: usize, message: &Message) {
        self.log
            .lock()
            .expect("log lock")
            .push(format!("appended:{index}:{}", message.role.as_str()));
    }

    fn on_send_start(&self, turn: TurnId, provider: ProviderId, model: &str, messages: usize) {
        self.log
            .lock()
            .expect("log lock")
            .push(format!("start:{turn}:{provider}:{model}:{messages}"));
    }

    fn on_send_settled(
        &self,
        turn: TurnId,
        _provider: ProviderId,
        _model: &str,
        outcome: Result<&ChatReply, &EndpointError>,
        _elapsed: Duration,
    ) {
        self.log
            .lock()
            .expect("log lock")
            .push(format!("settled:{turn}:{}", outcome.is_ok()));
    }

    fn on_send_abandoned(&self, turn: TurnId) {
        self.log
            .lock()
            .expect("log lock")
            .push(format!("abandoned:{turn}"));
    }

    fn on_intent_rejected(&self, error: &ChatError) {
        self.log
            .lock()
            .expect("log lock")
            .push(format!("rejected:{:?}", error.kind));
    }
}

fn observed_session(reply: Result<ChatReply, EndpointError>) -> (ChatSession, EventLog) {
    let log = EventLog::default();
    let endpoint = Arc::new(ScriptedEndpoint {
        reply,
        log: log.clone(),
    });
    let hooks = Arc::new(LoggingHooks { log: log.clone() });
    (ChatSession::with_hooks(endpoint, hooks), log)
}

#[tokio::test]
async fn successful_turn_appends_reply_after_user_message() {
    let (mut session, log) = observed_session(Ok(ChatReply::new("Hi there")));

    let initial = session.snapshot();
    assert_eq!(initial.history.len(), 2);
    assert_eq!(initial.transcript().count(), 1);

    session.set_credential("sk-test");
    session.submit("Hello").await.expect("submit should work");

    let snapshot = session.snapshot();
    assert_eq!(
        snapshot.history,
        vec![
            Message::new(Role::System, SYSTEM_PROMPT),
            Message::new(Role::Assistant, GREETING),
            Message::new(Role::User, "Hello"),
            Message::new(Role::Assistant, "Hi there"),
        ]
    );
    assert!(!snapshot.pending);

    let log = log.lock().expect("log lock");
    assert_eq!(
        *log,
        vec![
            "appended:2:user".to_string(),
            "start:turn-1:openai:gpt-4o-mini:3".to_string(),
            "endpoint:3".to_string(),
            "settled:turn-1:true".to_string(),
            "appended:3:assistant".to_string(),
        ]
    );
}

#[tokio::test]
async fn server_error_becomes_assistant_error_message() {
    let (mut session, log) =
        observed_session(Err(EndpointError::http(500, "server overloaded")));

    session.set_credential("sk-test");
    session.submit("Hello").await.expect("failure is absorbed");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.history.len(), 4);
    assert_eq!(
        snapshot.history[3],
        Message::new(Role::Assistant, "Error: server overloaded")
    );
    assert!(!snapshot.pending);
    assert!(
        log.lock()
            .expect("log lock")
            .contains(&"settled:turn-1:false".to_string())
    );
}

#[tokio::test]
async fn missing_credential_rejects_submit_without_transcript_entry() {
    let (mut session, log) = observed_session(Ok(ChatReply::new("unused")));

    let error = session.submit("hi").await.expect_err("credential required");
    assert_eq!(error.kind, ChatErrorKind::EmptyCredential);
    assert_eq!(session.snapshot().history.len(), 2);

    let log = log.lock().expect("log lock");
    assert_eq!(*log, vec!["rejected:EmptyCredential".to_string()]);
}

#[tokio::test]
async fn turns_are_numbered_per_session() {
    let (mut session, log) = observed_session(Ok(ChatReply::new("ok")));
    session.set_credential("sk-test");

    session.submit("one").await.expect("first turn");
    session.submit("two").await.expect("second turn");

    let log = log.lock().expect("log lock");
    assert!(log.contains(&"start:turn-1:openai:gpt-4o-mini:3".to_string()));
    assert!(log.contains(&"start:turn-2:openai:gpt-4o-mini:5".to_string()));
}

#[tokio::test]
async fn abandoned_turn_is_reported_and_folded_into_transcript() {
    let (mut session, log) = observed_session(Ok(ChatReply::new("unused")));
    session.set_credential("sk-test");

    let id = match session.begin_submit("Hello").expect("begin should work") {
        TurnStart::InFlight(turn) => turn.id(),
        TurnStart::Skipped(reason) => panic!("unexpected skip: {reason:?}"),
    };
    assert!(session.is_pending());

    session.abandon(id).expect("abandon should work");

    let snapshot = session.snapshot();
    assert!(!snapshot.pending);
    assert_eq!(
        snapshot.history.last(),
        Some(&Message::new(Role::Assistant, "Error: request abandoned"))
    );

    let log = log.lock().expect("log lock");
    assert_eq!(
        *log,
        vec![
            "appended:2:user".to_string(),
            "start:turn-1:openai:gpt-4o-mini:3".to_string(),
            "abandoned:turn-1".to_string(),
            "appended:3:assistant".to_string(),
        ]
    );
}
