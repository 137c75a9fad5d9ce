//! Assistant chat: an append-only transcript and a two-state reply cycle.
//!
//! Idle --send(non-blank)--> Awaiting --deliver_reply--> Idle
//!
//! The reply is one of the canned answers, picked with the injected random
//! source. Nothing here waits; the owning session schedules `deliver_reply`.

use rand::{Rng, RngCore};

use crate::domain::{Message, QuickAction};
use crate::seeds::{quick_actions, CANNED_REPLIES, GREETING};
use crate::util::is_blank;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChatPhase {
  Idle,
  Awaiting,
}

pub struct ChatSession {
  transcript: Vec<Message>,
  phase: ChatPhase,
  rng: Box<dyn RngCore + Send>,
}

impl ChatSession {
  pub fn new(rng: Box<dyn RngCore + Send>) -> Self {
    Self { transcript: vec![Message::assistant(GREETING)], phase: ChatPhase::Idle, rng }
  }

  pub fn transcript(&self) -> &[Message] {
    &self.transcript
  }

  pub fn is_awaiting(&self) -> bool {
    self.phase == ChatPhase::Awaiting
  }

  /// Quick actions are offered until the first user message.
  pub fn quick_actions_available(&self) -> bool {
    self.transcript.len() <= 1
  }

  /// Append a user message and start awaiting the reply.
  /// Blank text, or text sent while a reply is pending, changes nothing.
  pub fn send(&mut self, text: &str) -> Option<&Message> {
    if is_blank(text) || self.is_awaiting() {
      return None;
    }
    self.transcript.push(Message::user(text));
    self.phase = ChatPhase::Awaiting;
    self.transcript.last()
  }

  /// Send the query of quick action `index`, if it exists and is still offered.
  pub fn send_quick_action(&mut self, index: usize) -> Option<&Message> {
    if !self.quick_actions_available() {
      return None;
    }
    let action: QuickAction = quick_actions().into_iter().nth(index)?;
    self.send(action.query)
  }

  /// Awaiting -> Idle, appending a canned reply. Ignored when nothing is pending.
  pub fn deliver_reply(&mut self) -> Option<&Message> {
    if !self.is_awaiting() {
      return None;
    }
    let pick = self.rng.gen_range(0..CANNED_REPLIES.len());
    self.transcript.push(CANNED_REPLIES[pick].to_message());
    self.phase = ChatPhase::Idle;
    self.transcript.last()
  }
}
