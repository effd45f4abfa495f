//! Trailing-edge debouncing for noisy inputs such as search keystrokes.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delivers only the last value pushed within `delay`.
///
/// Each [`push`](Debouncer::push) aborts the pending delivery task and
/// schedules a fresh one, so a burst of keystrokes settles into a single
/// value on the receiver returned by [`Debouncer::new`].
///
/// `push` spawns onto the current tokio runtime and panics outside of one,
/// like [`tokio::spawn`].
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    sender: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                sender,
                pending: None,
            },
            receiver,
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn push(&mut self, value: T) {
        self.cancel();

        let sender = self.sender.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means nobody is listening anymore.
            let _ = sender.send(value);
        }));
    }

    /// Drop the pending delivery, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
