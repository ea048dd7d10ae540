//! Auto-cycle scheduling.
//!
//! [`CycleController`] combines the repeating ticker that advances the slider
//! with the pause/recover state machine that reacts to touch input. Both timer
//! kinds are held as a single [`TimerRegistration`](crate::TimerRegistration)
//! each and are cancelled before a replacement is armed.
//!
//! Timers never call back into the controller directly. They emit a
//! [`CycleEvent`] to the sink supplied by the owner, tagged with the epoch the
//! timer was armed under, and the owner routes it back through
//! [`CycleController::accepts_tick`] or [`CycleController::on_recover_elapsed`].

mod recover;
mod scheduler;

use std::rc::Rc;
use std::time::Duration;

pub use scheduler::CycleController;

/// Default delay and interval between two automatic advances.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Smallest interval accepted by [`CycleController::reconfigure_interval`].
pub const MIN_INTERVAL: Duration = Duration::from_millis(500);

/// Grace period after the last touch-up before cycling resumes.
pub const DEFAULT_RECOVER_DELAY: Duration = Duration::from_millis(6000);

/// Timing of an auto-cycle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleConfig {
    /// Delay before the first advance.
    pub delay: Duration,
    /// Period between advances.
    pub interval: Duration,
    /// Resume automatically after the user lets go of the slider.
    pub auto_recover: bool,
}

impl CycleConfig {
    pub const fn new(delay: Duration, interval: Duration, auto_recover: bool) -> Self {
        Self {
            delay,
            interval,
            auto_recover,
        }
    }

    /// Same delay and interval, auto-recover enabled.
    pub const fn uniform(duration: Duration) -> Self {
        Self::new(duration, duration, true)
    }

    pub const fn with_auto_recover(mut self, auto_recover: bool) -> Self {
        self.auto_recover = auto_recover;
        self
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self::uniform(DEFAULT_DURATION)
    }
}

/// Lifecycle of the auto-cycle.
///
/// Auto-cycling counts as enabled in every state except `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Idle,
    /// The ticker is armed.
    Cycling,
    /// Interrupted by a touch; resumes only through an explicit start.
    Paused,
    /// Interrupted by a touch that has ended; the recover timer is armed.
    PendingRecover,
}

impl CycleState {
    pub fn is_enabled(self) -> bool {
        self != CycleState::Idle
    }
}

/// Event emitted by the controller's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// The ticker fired; the owner should advance by one slide.
    Advance { epoch: u64 },
    /// The recover delay elapsed.
    Recover { epoch: u64 },
}

impl CycleEvent {
    pub fn epoch(self) -> u64 {
        match self {
            CycleEvent::Advance { epoch } | CycleEvent::Recover { epoch } => epoch,
        }
    }
}

/// Receiver of [`CycleEvent`]s. Called on the owner thread.
pub type CycleSink = Rc<dyn Fn(CycleEvent)>;

#[cfg(test)]
#[path = "../tests/cycle_harness.rs"]
mod cycle_harness;

#[cfg(test)]
#[path = "../tests/scheduler_tests.rs"]
mod scheduler_tests;

#[cfg(test)]
#[path = "../tests/recover_tests.rs"]
mod recover_tests;
