use std::rc::Rc;

use super::{CycleController, CycleEvent, CycleState};
use crate::timer::TimerRegistration;

impl CycleController {
    /// A pointer went down on the slider.
    ///
    /// Pausing is immediate so the ticker never fights the user. A pending
    /// recovery is superseded as well.
    pub fn touch_down(&mut self) {
        match self.state {
            CycleState::Cycling | CycleState::PendingRecover => {
                self.cancel_timers();
                self.transition(CycleState::Paused);
            }
            CycleState::Paused | CycleState::Idle => {}
        }
    }

    /// A pointer went up (or the gesture was cancelled).
    ///
    /// With auto-recover enabled this arms, or re-arms, the recover timer so
    /// repeated interaction keeps pushing the resume further out.
    pub fn touch_up(&mut self) {
        match self.state {
            CycleState::Paused | CycleState::PendingRecover if self.config.auto_recover => {
                self.arm_recover();
            }
            _ => {}
        }
    }

    /// Route a [`CycleEvent::Recover`] back into the controller.
    ///
    /// Returns `true` when cycling resumed. Stale events are ignored.
    pub fn on_recover_elapsed(&mut self, epoch: u64) -> bool {
        if self.state != CycleState::PendingRecover || epoch != self.epoch {
            log::trace!("dropping stale recover event (epoch {epoch}, current {})", self.epoch);
            return false;
        }
        self.recover = None;
        self.start(self.config);
        true
    }

    fn arm_recover(&mut self) {
        self.cancel_timers();
        let epoch = self.epoch;
        let sink = Rc::clone(&self.sink);
        self.recover = Some(TimerRegistration::once(
            &self.timers,
            self.recover_delay,
            move || sink(CycleEvent::Recover { epoch }),
        ));
        self.transition(CycleState::PendingRecover);
    }
}
