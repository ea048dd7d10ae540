//! Platform abstraction for scheduled work.
//!
//! The slider never talks to OS timers directly. A host hands it a
//! [`TimerDriver`] and every delayed or repeating action goes through it, which
//! lets the same controller run on a thread-backed runtime, a frame clock, or a
//! virtual clock in tests.

use std::time::Duration;

/// Identifier handed out by a [`TimerDriver`] for a scheduled callback.
pub type TimerId = u64;

/// Callback invoked when a timer fires. Always runs on the owner thread.
pub type TimerCallback = Box<dyn FnMut() + 'static>;

/// When a timer should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    /// Delay before the first firing.
    pub delay: Duration,
    /// Period between subsequent firings. `None` for a one-shot timer.
    pub interval: Option<Duration>,
}

impl TimerRequest {
    pub const fn once(delay: Duration) -> Self {
        Self {
            delay,
            interval: None,
        }
    }

    pub const fn repeating(delay: Duration, interval: Duration) -> Self {
        Self {
            delay,
            interval: Some(interval),
        }
    }

    pub fn is_repeating(&self) -> bool {
        self.interval.is_some()
    }
}

/// Schedules callbacks on behalf of the slider.
///
/// Implementations must deliver callbacks on the thread that owns the driver
/// and must never invoke a callback after [`TimerDriver::cancel`] returned for
/// its id. A one-shot timer is released by the driver after it fires; calling
/// `cancel` on it afterwards is a no-op. Cancelling from inside the callback
/// being fired is allowed.
pub trait TimerDriver {
    /// Arm a timer and return its id.
    fn schedule(&self, request: TimerRequest, callback: TimerCallback) -> TimerId;

    /// Cancel a timer. Unknown or already finished ids are ignored.
    fn cancel(&self, id: TimerId);
}
