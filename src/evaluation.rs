//! Simulated evaluation of the editor contents.
//!
//! `EvaluationResult` is the output pane of a problem view: one output string
//! and an explicit phase. Run and submit move it out of `Idle` and a later
//! `complete` call (driven by a timer owned by the session) writes the fixed
//! report. The source text is never inspected beyond the blank check; every
//! evaluation succeeds.

use std::time::Duration;

use serde::Serialize;

use crate::config::Timings;
use crate::seeds::{ACCEPTED_REPORT, HINT_TEXT, RUNNING_TEXT, SAMPLE_RUN_REPORT, SUBMITTING_TEXT};
use crate::util::is_blank;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvalPhase {
  #[default]
  Idle,
  Running,
  Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalKind {
  Run,
  Submit,
}

impl EvalKind {
  fn phase(self) -> EvalPhase {
    match self {
      EvalKind::Run => EvalPhase::Running,
      EvalKind::Submit => EvalPhase::Submitting,
    }
  }

  fn pending_text(self) -> &'static str {
    match self {
      EvalKind::Run => RUNNING_TEXT,
      EvalKind::Submit => SUBMITTING_TEXT,
    }
  }

  pub fn report(self) -> &'static str {
    match self {
      EvalKind::Run => SAMPLE_RUN_REPORT,
      EvalKind::Submit => ACCEPTED_REPORT,
    }
  }

  pub fn delay(self, timings: &Timings) -> Duration {
    match self {
      EvalKind::Run => timings.run_delay(),
      EvalKind::Submit => timings.submit_delay(),
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationResult {
  output: String,
  phase: EvalPhase,
}

impl EvaluationResult {
  pub fn output(&self) -> &str {
    &self.output
  }

  pub fn phase(&self) -> EvalPhase {
    self.phase
  }

  pub fn is_running(&self) -> bool {
    self.phase != EvalPhase::Idle
  }

  /// Idle -> Running/Submitting. Returns false (no change) when busy or the source is blank.
  pub fn begin(&mut self, kind: EvalKind, source: &str) -> bool {
    if self.is_running() || is_blank(source) {
      return false;
    }
    self.phase = kind.phase();
    self.output = kind.pending_text().to_string();
    true
  }

  /// Running/Submitting -> Idle with the matching report. Ignored in any other phase.
  pub fn complete(&mut self, kind: EvalKind) -> bool {
    if self.phase != kind.phase() {
      return false;
    }
    self.phase = EvalPhase::Idle;
    self.output = kind.report().to_string();
    true
  }

  /// Synchronous; the phase is left untouched.
  pub fn hint(&mut self) {
    self.output = HINT_TEXT.to_string();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seeds::DEFAULT_SOURCE;

  #[test]
  fn run_then_complete_writes_sample_report() {
    let mut eval = EvaluationResult::default();
    assert!(eval.begin(EvalKind::Run, DEFAULT_SOURCE));
    assert!(eval.is_running());
    assert_eq!(eval.phase(), EvalPhase::Running);
    assert_eq!(eval.output(), RUNNING_TEXT);

    assert!(eval.complete(EvalKind::Run));
    assert!(!eval.is_running());
    assert_eq!(eval.output(), SAMPLE_RUN_REPORT);
  }

  #[test]
  fn submit_writes_accepted_report() {
    let mut eval = EvaluationResult::default();
    assert!(eval.begin(EvalKind::Submit, "print(1)"));
    assert_eq!(eval.output(), SUBMITTING_TEXT);
    assert!(eval.complete(EvalKind::Submit));
    assert_eq!(eval.output(), ACCEPTED_REPORT);
  }

  #[test]
  fn busy_view_rejects_new_evaluations() {
    let mut eval = EvaluationResult::default();
    assert!(eval.begin(EvalKind::Run, "x"));
    assert!(!eval.begin(EvalKind::Submit, "x"));
    assert_eq!(eval.phase(), EvalPhase::Running);
    // A stray submit completion does not end the run.
    assert!(!eval.complete(EvalKind::Submit));
    assert!(eval.is_running());
  }

  #[test]
  fn blank_source_never_starts_loading() {
    let mut eval = EvaluationResult::default();
    assert!(!eval.begin(EvalKind::Run, "   \n\t"));
    assert!(!eval.is_running());
    assert_eq!(eval.output(), "");
  }

  #[test]
  fn hint_is_synchronous_and_keeps_phase() {
    let mut eval = EvaluationResult::default();
    eval.hint();
    assert_eq!(eval.output(), HINT_TEXT);
    assert!(!eval.is_running());

    eval.begin(EvalKind::Run, "x");
    eval.hint();
    assert_eq!(eval.output(), HINT_TEXT);
    assert_eq!(eval.phase(), EvalPhase::Running);
  }

  #[test]
  fn submit_waits_longer_than_run() {
    let t = Timings::default();
    assert!(EvalKind::Submit.delay(&t) > EvalKind::Run.delay(&t));
  }
}
