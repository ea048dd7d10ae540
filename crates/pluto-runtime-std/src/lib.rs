//! Standard timer runtime backed by Rust's `std` library.
//!
//! This crate provides a concrete [`TimerDriver`] for hosts without a frame
//! clock of their own. Deadlines are kept on a background thread; callbacks
//! are queued back to the thread that owns the [`StdTimerRuntime`] and run
//! there when the host calls [`StdTimerRuntime::drain`] or
//! [`StdTimerRuntime::wait_and_drain`], so slider state is never touched
//! concurrently.

mod worker;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use pluto_core::collections::map::HashMap;
use pluto_core::platform::TimerCallback;
use pluto_core::{TimerDriver, TimerId, TimerRequest};

use worker::TimerWorker;

struct TimerSlot {
    /// `None` while the callback is executing.
    callback: Option<TimerCallback>,
    repeating: bool,
}

/// Thread-backed [`TimerDriver`] that delivers callbacks on its owner thread.
pub struct StdTimerRuntime {
    callbacks: RefCell<HashMap<TimerId, TimerSlot>>,
    next_id: Cell<TimerId>,
    fired: mpsc::Receiver<TimerId>,
    worker: TimerWorker,
}

impl StdTimerRuntime {
    pub fn new() -> Self {
        let (sender, fired) = mpsc::channel();
        Self {
            callbacks: RefCell::new(HashMap::default()),
            next_id: Cell::new(0),
            fired,
            worker: TimerWorker::spawn(sender),
        }
    }

    /// Returns whether the deadline thread is alive.
    pub fn is_running(&self) -> bool {
        self.worker.is_running()
    }

    /// Number of armed timers (repeating timers count once).
    pub fn active_timers(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Registers a waker invoked from the timer thread whenever callbacks are
    /// ready to be drained. Use it to wake an event loop.
    pub fn set_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        self.worker.set_waker(Some(Arc::new(waker)));
    }

    /// Clears any registered waker.
    pub fn clear_waker(&self) {
        self.worker.set_waker(None);
    }

    /// Runs every callback whose deadline has passed. Never blocks.
    /// Returns the number of callbacks invoked.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        while let Ok(id) = self.fired.try_recv() {
            if self.dispatch(id) {
                ran += 1;
            }
        }
        ran
    }

    /// Blocks until at least one timer fires or `timeout` elapses, then drains.
    pub fn wait_and_drain(&self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.fired.recv_timeout(remaining) {
                Ok(id) => {
                    let ran = usize::from(self.dispatch(id)) + self.drain();
                    // A cancelled timer may have been in flight; keep waiting.
                    if ran > 0 || remaining.is_zero() {
                        return ran;
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => return 0,
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    log::warn!("timer thread is gone, nothing left to wait for");
                    return 0;
                }
            }
        }
    }

    fn dispatch(&self, id: TimerId) -> bool {
        let callback = self
            .callbacks
            .borrow_mut()
            .get_mut(&id)
            .and_then(|slot| slot.callback.take());
        let Some(mut callback) = callback else {
            log::trace!("timer {id} fired after cancel, skipping");
            return false;
        };

        callback();

        let mut callbacks = self.callbacks.borrow_mut();
        if let Some(slot) = callbacks.get_mut(&id) {
            if slot.repeating {
                slot.callback = Some(callback);
            } else {
                callbacks.remove(&id);
            }
        }
        true
    }
}

impl TimerDriver for StdTimerRuntime {
    fn schedule(&self, request: TimerRequest, callback: TimerCallback) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.callbacks.borrow_mut().insert(
            id,
            TimerSlot {
                callback: Some(callback),
                repeating: request.is_repeating(),
            },
        );
        if !self.worker.is_running() {
            log::warn!("timer {id} armed without a timer thread; it will never fire");
        }
        self.worker.schedule(id, request);
        id
    }

    fn cancel(&self, id: TimerId) {
        self.callbacks.borrow_mut().remove(&id);
        self.worker.cancel(id);
    }
}

impl Default for StdTimerRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdTimerRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdTimerRuntime")
            .field("active_timers", &self.callbacks.borrow().len())
            .field("running", &self.worker.is_running())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
