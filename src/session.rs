//! One view instance: the problem page (editor + output pane) and the
//! assistant chat of a single client.
//!
//! The session is owned by exactly one task (the WebSocket loop). Delayed
//! completions come back as `SessionEvent`s on the channel returned by
//! `ViewSession::new`; the owner feeds them to `handle_event`. Pending timers
//! are held as `ScheduledTask` guards, so dropping the session cancels them.

use rand::RngCore;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::chat::ChatSession;
use crate::config::Timings;
use crate::domain::{Language, Message, Problem};
use crate::evaluation::{EvalKind, EvaluationResult};
use crate::seeds::DEFAULT_SOURCE;
use crate::timer::ScheduledTask;
use crate::util::trunc_for_log;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
  pub source: String,
  pub language: Language,
}

impl Default for EditorState {
  fn default() -> Self {
    Self { source: DEFAULT_SOURCE.to_string(), language: Language::default() }
  }
}

/// Timer completions. The ticket ties a completion to the operation that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
  EvaluationDone { ticket: u64, kind: EvalKind },
  ReplyDue { ticket: u64 },
}

/// State changes the owner should forward to the client.
#[derive(Clone, Debug)]
pub enum SessionUpdate {
  Output(EvaluationResult),
  ChatMessage(Message),
  ChatTyping(bool),
}

struct Pending {
  ticket: u64,
  _task: ScheduledTask,
}

pub struct ViewSession {
  problem: Problem,
  editor: EditorState,
  evaluation: EvaluationResult,
  chat: ChatSession,
  timings: Timings,
  events: mpsc::UnboundedSender<SessionEvent>,
  pending_eval: Option<Pending>,
  pending_reply: Option<Pending>,
  next_ticket: u64,
}

impl ViewSession {
  pub fn new(
    problem: Problem,
    timings: Timings,
    rng: Box<dyn RngCore + Send>,
  ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
    let (events, rx) = mpsc::unbounded_channel();
    let session = Self {
      problem,
      editor: EditorState::default(),
      evaluation: EvaluationResult::default(),
      chat: ChatSession::new(rng),
      timings,
      events,
      pending_eval: None,
      pending_reply: None,
      next_ticket: 0,
    };
    (session, rx)
  }

  pub fn problem(&self) -> &Problem {
    &self.problem
  }

  pub fn editor(&self) -> &EditorState {
    &self.editor
  }

  pub fn evaluation(&self) -> &EvaluationResult {
    &self.evaluation
  }

  pub fn transcript(&self) -> &[Message] {
    self.chat.transcript()
  }

  fn ticket(&mut self) -> u64 {
    self.next_ticket += 1;
    self.next_ticket
  }

  /// Navigate the problem page. The old page is torn down: its pending
  /// evaluation is cancelled and the editor and output start fresh.
  #[instrument(level = "info", skip_all, fields(id = problem.id))]
  pub fn open_problem(&mut self, problem: Problem) {
    if self.pending_eval.take().is_some() {
      debug!(target: "session", from = self.problem.id, "Cancelled pending evaluation on navigation");
    }
    self.problem = problem;
    self.editor = EditorState::default();
    self.evaluation = EvaluationResult::default();
  }

  pub fn set_code(&mut self, code: String) {
    self.editor.source = code;
  }

  pub fn set_language(&mut self, language: Language) {
    self.editor.language = language;
  }

  pub fn run(&mut self) -> Option<SessionUpdate> {
    self.start_evaluation(EvalKind::Run)
  }

  pub fn submit(&mut self) -> Option<SessionUpdate> {
    self.start_evaluation(EvalKind::Submit)
  }

  #[instrument(level = "info", skip(self), fields(problem = self.problem.id, language = ?self.editor.language))]
  fn start_evaluation(&mut self, kind: EvalKind) -> Option<SessionUpdate> {
    if !self.evaluation.begin(kind, &self.editor.source) {
      debug!(target: "session", ?kind, busy = self.evaluation.is_running(), "Evaluation request ignored");
      return None;
    }
    let ticket = self.ticket();
    let delay = kind.delay(&self.timings);
    let task = ScheduledTask::schedule(delay, self.events.clone(), SessionEvent::EvaluationDone { ticket, kind });
    self.pending_eval = Some(Pending { ticket, _task: task });
    info!(target: "session", ?kind, ticket, delay_ms = delay.as_millis() as u64, "Evaluation scheduled");
    Some(SessionUpdate::Output(self.evaluation.clone()))
  }

  pub fn hint(&mut self) -> SessionUpdate {
    self.evaluation.hint();
    info!(target: "session", problem = self.problem.id, "Hint served");
    SessionUpdate::Output(self.evaluation.clone())
  }

  #[instrument(level = "info", skip_all, fields(text = %trunc_for_log(text, 64)))]
  pub fn send_chat(&mut self, text: &str) -> Vec<SessionUpdate> {
    match self.chat.send(text).cloned() {
      Some(msg) => self.await_reply(msg),
      None => {
        debug!(target: "session", awaiting = self.chat.is_awaiting(), "Chat message ignored");
        Vec::new()
      }
    }
  }

  pub fn quick_action(&mut self, index: usize) -> Vec<SessionUpdate> {
    match self.chat.send_quick_action(index).cloned() {
      Some(msg) => self.await_reply(msg),
      None => {
        debug!(target: "session", index, "Quick action ignored");
        Vec::new()
      }
    }
  }

  fn await_reply(&mut self, msg: Message) -> Vec<SessionUpdate> {
    let ticket = self.ticket();
    let task = ScheduledTask::schedule(self.timings.reply_delay(), self.events.clone(), SessionEvent::ReplyDue { ticket });
    self.pending_reply = Some(Pending { ticket, _task: task });
    info!(target: "session", ticket, transcript_len = self.chat.transcript().len(), "Assistant reply scheduled");
    vec![SessionUpdate::ChatMessage(msg), SessionUpdate::ChatTyping(true)]
  }

  /// Apply a timer completion. Completions for operations that are no longer
  /// pending (navigated away, superseded) are dropped.
  pub fn handle_event(&mut self, event: SessionEvent) -> Vec<SessionUpdate> {
    match event {
      SessionEvent::EvaluationDone { ticket, kind } => {
        if !take_if_current(&mut self.pending_eval, ticket) || !self.evaluation.complete(kind) {
          debug!(target: "session", ticket, "Stale evaluation completion dropped");
          return Vec::new();
        }
        info!(target: "session", ?kind, ticket, "Evaluation finished");
        vec![SessionUpdate::Output(self.evaluation.clone())]
      }
      SessionEvent::ReplyDue { ticket } => {
        if !take_if_current(&mut self.pending_reply, ticket) {
          debug!(target: "session", ticket, "Stale reply dropped");
          return Vec::new();
        }
        match self.chat.deliver_reply().cloned() {
          Some(msg) => {
            info!(target: "session", ticket, "Assistant reply delivered");
            vec![SessionUpdate::ChatMessage(msg), SessionUpdate::ChatTyping(false)]
          }
          None => Vec::new(),
        }
      }
    }
  }
}

fn take_if_current(slot: &mut Option<Pending>, ticket: u64) -> bool {
  if slot.as_ref().is_some_and(|p| p.ticket == ticket) {
    *slot = None;
    true
  } else {
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Role;
  use crate::evaluation::EvalPhase;
  use crate::seeds::{seed_problems, ACCEPTED_REPORT, HINT_TEXT, SAMPLE_RUN_REPORT};
  use rand::rngs::mock::StepRng;
  use std::time::Duration;
  use tokio::time::Instant;

  fn session() -> (ViewSession, mpsc::UnboundedReceiver<SessionEvent>) {
    let problem = seed_problems().remove(0);
    ViewSession::new(problem, Timings::default(), Box::new(StepRng::new(0, 0)))
  }

  #[tokio::test(start_paused = true)]
  async fn run_stays_loading_until_delay_elapses() {
    let (mut s, mut rx) = session();
    let start = Instant::now();
    assert!(s.run().is_some());
    assert!(s.evaluation().is_running());

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(rx.try_recv().is_err());
    assert!(s.evaluation().is_running());

    let ev = rx.recv().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(2000));
    let updates = s.handle_event(ev);
    assert_eq!(updates.len(), 1);
    assert!(!s.evaluation().is_running());
    assert_eq!(s.evaluation().output(), SAMPLE_RUN_REPORT);
  }

  #[tokio::test(start_paused = true)]
  async fn submit_reports_accepted_after_longer_delay() {
    let (mut s, mut rx) = session();
    let start = Instant::now();
    s.submit().unwrap();
    assert_eq!(s.evaluation().phase(), EvalPhase::Submitting);

    let ev = rx.recv().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(3000));
    s.handle_event(ev);
    assert_eq!(s.evaluation().output(), ACCEPTED_REPORT);
  }

  #[tokio::test(start_paused = true)]
  async fn second_request_while_busy_is_ignored() {
    let (mut s, mut rx) = session();
    s.run().unwrap();
    assert!(s.submit().is_none());
    assert!(s.run().is_none());

    let ev = rx.recv().await.unwrap();
    s.handle_event(ev);
    assert_eq!(s.evaluation().output(), SAMPLE_RUN_REPORT);
    // Only one completion was ever scheduled.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());
  }

  #[tokio::test(start_paused = true)]
  async fn blank_editor_never_starts_loading() {
    let (mut s, mut rx) = session();
    s.set_code("   \n".into());
    assert!(s.run().is_none());
    assert!(s.submit().is_none());
    assert!(!s.evaluation().is_running());
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
  }

  #[tokio::test]
  async fn hint_updates_output_immediately() {
    let (mut s, _rx) = session();
    let update = s.hint();
    assert_eq!(s.evaluation().output(), HINT_TEXT);
    match update {
      SessionUpdate::Output(r) => assert!(!r.is_running()),
      other => panic!("unexpected update: {:?}", other),
    }
  }

  #[tokio::test(start_paused = true)]
  async fn navigation_cancels_pending_evaluation() {
    let (mut s, mut rx) = session();
    s.set_code("print(42)".into());
    s.run().unwrap();
    let next = seed_problems().remove(2);
    s.open_problem(next);

    assert_eq!(s.problem().id, 3);
    assert_eq!(s.editor(), &EditorState::default());
    assert!(!s.evaluation().is_running());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
  }

  #[tokio::test(start_paused = true)]
  async fn stale_completion_is_dropped() {
    let (mut s, _rx) = session();
    s.run().unwrap();
    let updates = s.handle_event(SessionEvent::EvaluationDone { ticket: 999, kind: EvalKind::Run });
    assert!(updates.is_empty());
    assert!(s.evaluation().is_running());
  }

  #[tokio::test(start_paused = true)]
  async fn dropping_session_cancels_timers() {
    let (mut s, mut rx) = session();
    s.run().unwrap();
    s.send_chat("hello");
    drop(s);
    assert_eq!(rx.recv().await, None);
  }

  #[tokio::test(start_paused = true)]
  async fn chat_round_trip_alternates() {
    let (mut s, mut rx) = session();
    assert!(s.send_chat("  ").is_empty());

    for i in 0..3 {
      let updates = s.send_chat(&format!("q{}", i));
      assert!(matches!(updates.as_slice(), [SessionUpdate::ChatMessage(_), SessionUpdate::ChatTyping(true)]));
      assert!(s.send_chat("interrupt").is_empty());

      let start = Instant::now();
      let ev = rx.recv().await.unwrap();
      assert!(start.elapsed() >= Duration::from_millis(1500));
      let updates = s.handle_event(ev);
      assert!(matches!(updates.as_slice(), [SessionUpdate::ChatMessage(_), SessionUpdate::ChatTyping(false)]));
    }

    let roles: Vec<Role> = s.transcript().iter().map(|m| m.role).collect();
    assert_eq!(roles.len(), 7);
    assert!(roles.iter().enumerate().all(|(i, r)| *r == if i % 2 == 0 { Role::Assistant } else { Role::User }));
  }

  #[tokio::test(start_paused = true)]
  async fn chat_and_evaluation_run_side_by_side() {
    let (mut s, mut rx) = session();
    s.run().unwrap();
    s.quick_action(0);

    let first = rx.recv().await.unwrap();
    assert!(matches!(first, SessionEvent::ReplyDue { .. }));
    s.handle_event(first);
    assert!(s.evaluation().is_running());

    let second = rx.recv().await.unwrap();
    assert!(matches!(second, SessionEvent::EvaluationDone { kind: EvalKind::Run, .. }));
    s.handle_event(second);
    assert_eq!(s.transcript().len(), 3);
    assert_eq!(s.evaluation().output(), SAMPLE_RUN_REPORT);
  }
}
