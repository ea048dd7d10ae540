use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::{CycleConfig, CycleEvent, CycleSink, CycleState, DEFAULT_RECOVER_DELAY, MIN_INTERVAL};
use crate::platform::TimerDriver;
use crate::timer::TimerRegistration;

/// Cycle scheduler and pause/recover state machine.
///
/// Touch handling lives in `recover.rs`; this half owns start, stop and
/// interval changes.
pub struct CycleController {
    pub(super) timers: Rc<dyn TimerDriver>,
    pub(super) sink: CycleSink,
    pub(super) state: CycleState,
    pub(super) config: CycleConfig,
    pub(super) recover_delay: Duration,
    pub(super) ticker: Option<TimerRegistration>,
    pub(super) recover: Option<TimerRegistration>,
    pub(super) epoch: u64,
}

impl CycleController {
    pub fn new(timers: Rc<dyn TimerDriver>, sink: impl Fn(CycleEvent) + 'static) -> Self {
        Self {
            timers,
            sink: Rc::new(sink),
            state: CycleState::Idle,
            config: CycleConfig::default(),
            recover_delay: DEFAULT_RECOVER_DELAY,
            ticker: None,
            recover: None,
            epoch: 0,
        }
    }

    /// Override the grace period used before resuming after a touch.
    pub fn with_recover_delay(mut self, recover_delay: Duration) -> Self {
        self.recover_delay = recover_delay;
        self
    }

    /// Takes effect the next time the recover timer is armed.
    pub fn set_recover_delay(&mut self, recover_delay: Duration) {
        self.recover_delay = recover_delay;
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Configuration of the last start, including later interval changes.
    pub fn config(&self) -> CycleConfig {
        self.config
    }

    pub fn recover_delay(&self) -> Duration {
        self.recover_delay
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_cycling(&self) -> bool {
        self.state == CycleState::Cycling
    }

    pub fn has_pending_recover(&self) -> bool {
        self.recover.is_some()
    }

    /// Arm the ticker with `config`, replacing any scheduled activity.
    pub fn start(&mut self, config: CycleConfig) {
        self.cancel_timers();
        self.config = config;

        let epoch = self.epoch;
        let sink = Rc::clone(&self.sink);
        self.ticker = Some(TimerRegistration::repeating(
            &self.timers,
            config.delay,
            config.interval,
            move || sink(CycleEvent::Advance { epoch }),
        ));
        self.transition(CycleState::Cycling);
    }

    /// Cancel the ticker and any pending recovery. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.cancel_timers();
        self.transition(CycleState::Idle);
    }

    /// Change the interval between advances.
    ///
    /// Intervals below [`MIN_INTERVAL`] are rejected and `false` is returned.
    /// A running cycle restarts with the stored delay and auto-recover flag;
    /// in any other state the new interval is kept for the next start.
    pub fn reconfigure_interval(&mut self, interval: Duration) -> bool {
        if interval < MIN_INTERVAL {
            log::debug!("ignoring cycle interval {interval:?}, below {MIN_INTERVAL:?}");
            return false;
        }
        let config = CycleConfig {
            interval,
            ..self.config
        };
        if self.is_cycling() {
            self.start(config);
        } else {
            self.config = config;
        }
        true
    }

    /// Whether an [`CycleEvent::Advance`] armed under `epoch` should still act.
    pub fn accepts_tick(&self, epoch: u64) -> bool {
        self.is_cycling() && epoch == self.epoch
    }

    /// Drops both timers and invalidates every event already in flight.
    pub(super) fn cancel_timers(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        if let Some(recover) = self.recover.take() {
            recover.cancel();
        }
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub(super) fn transition(&mut self, next: CycleState) {
        if self.state != next {
            log::debug!("auto-cycle {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}

impl fmt::Debug for CycleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleController")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("recover_delay", &self.recover_delay)
            .field("epoch", &self.epoch)
            .finish()
    }
}
