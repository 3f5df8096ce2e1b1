//! Debounced value propagation.
//!
//! # Responsibility
//! - Hold back a rapidly changing value until it has been quiet for a fixed
//!   window, then publish only the latest one.
//!
//! # Invariants
//! - Each new value cancels the pending timer and schedules a new one.
//! - Intermediate values are never published.
//! - A fired value is published exactly once.

use log::{debug, warn};
use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Quiescence window used by the search box.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Clock-driven debounce timer.
///
/// The caller supplies `now` on every call, so the timer can be driven by a
/// UI event loop tick or by tests without sleeping.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    settled: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            settled: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value and restarts the quiescence window at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Fires the pending value if its window has elapsed by `now`.
    ///
    /// Returns the newly settled value, or `None` when nothing fired.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !due {
            return None;
        }
        self.settled = self.pending.take().map(|pending| pending.value);
        self.settled.as_ref()
    }

    /// Drops the pending value without publishing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Last value that fired.
    pub fn settled(&self) -> Option<&T> {
        self.settled.as_ref()
    }
}

/// Debounce timer running on a background thread.
///
/// Values go in through [`DebounceWorker::send`]; settled values are handed to
/// the subscriber callback on the worker thread. Dropping the worker discards
/// any pending value and joins the thread.
pub struct DebounceWorker<T: Send + 'static> {
    sender: Option<Sender<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> DebounceWorker<T> {
    /// Starts the worker thread.
    pub fn spawn<F>(delay: Duration, mut on_settle: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (sender, receiver) = channel::<T>();
        let handle = std::thread::spawn(move || {
            let mut pending: Option<Pending<T>> = None;
            loop {
                let received = match pending.as_ref() {
                    None => receiver
                        .recv()
                        .map_err(|_| RecvTimeoutError::Disconnected),
                    Some(current) => receiver
                        .recv_timeout(current.deadline.saturating_duration_since(Instant::now())),
                };

                match received {
                    Ok(value) => {
                        pending = Some(Pending {
                            value,
                            deadline: Instant::now() + delay,
                        });
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        if let Some(fired) = pending.take() {
                            on_settle(fired.value);
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("event=debounce_worker_stop module=search status=ok");
        });

        Self {
            sender: Some(sender),
            handle: Some(handle),
        }
    }

    /// Feeds one raw value. Returns `false` when the worker has stopped.
    pub fn send(&self, value: T) -> bool {
        self.sender
            .as_ref()
            .is_some_and(|sender| sender.send(value).is_ok())
    }
}

impl<T: Send + 'static> Drop for DebounceWorker<T> {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("event=debounce_worker_stop module=search status=error reason=subscriber_panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use std::time::{Duration, Instant};

    #[test]
    fn poll_before_deadline_fires_nothing() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.push("a", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert!(debouncer.is_pending());
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(300)),
            Some(&"a")
        );
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn cancel_discards_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.push(1, start);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
        assert_eq!(debouncer.settled(), None);
    }
}
