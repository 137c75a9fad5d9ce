//! Delayed, cancellable event delivery.
//!
//! A `ScheduledTask` sleeps on a tokio timer and then posts one event to its
//! owner's channel. Dropping the guard aborts the task, so an owner that goes
//! away never receives (or acts on) a late event.

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::trace;

#[derive(Debug)]
pub struct ScheduledTask {
  handle: JoinHandle<()>,
}

impl ScheduledTask {
  /// Deliver `event` on `tx` after `delay`. A closed channel is ignored.
  pub fn schedule<T: Send + 'static>(delay: Duration, tx: UnboundedSender<T>, event: T) -> Self {
    let handle = tokio::spawn(async move {
      tokio::time::sleep(delay).await;
      if tx.send(event).is_err() {
        trace!(target: "session", "Timer fired after receiver closed");
      }
    });
    Self { handle }
  }
}

impl Drop for ScheduledTask {
  fn drop(&mut self) {
    self.handle.abort();
  }
}
