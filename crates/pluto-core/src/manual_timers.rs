//! Deterministic timer driver advanced by the host.
//!
//! [`ManualTimerDriver`] keeps its own notion of "now" and only fires timers
//! when the host moves that clock forward, e.g. once per frame with the frame
//! timestamp, or explicitly from a test. Callbacks run synchronously on the
//! calling thread in deadline order (ties broken by scheduling order).

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

use crate::collections::map::HashMap;
use crate::platform::{TimerCallback, TimerDriver, TimerId, TimerRequest};

const MIN_PERIOD: Duration = Duration::from_millis(1);

struct ManualTimer {
    due: Duration,
    interval: Option<Duration>,
    /// `None` while the callback is executing.
    callback: Option<TimerCallback>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: TimerId,
    timers: HashMap<TimerId, ManualTimer>,
}

#[derive(Default)]
pub struct ManualTimerDriver {
    state: RefCell<ManualState>,
}

impl ManualTimerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the driver was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of armed timers (repeating timers count once).
    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Deadline of the next timer to fire, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state
            .borrow()
            .timers
            .values()
            .filter(|timer| timer.callback.is_some())
            .map(|timer| timer.due)
            .min()
    }

    /// Move the clock forward by `delta`, firing every timer that falls due.
    /// Returns the number of callbacks invoked.
    pub fn advance_by(&self, delta: Duration) -> usize {
        let target = self.now() + delta;
        self.advance_to(target)
    }

    /// Move the clock to `target`. Moving backwards is ignored.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let state = self.state.borrow();
                state
                    .timers
                    .iter()
                    .filter(|(_, timer)| timer.callback.is_some() && timer.due <= target)
                    .min_by_key(|(id, timer)| (timer.due, **id))
                    .map(|(id, timer)| (*id, timer.due))
            };
            let Some((id, due)) = next else {
                break;
            };

            let callback = {
                let mut state = self.state.borrow_mut();
                if due > state.now {
                    state.now = due;
                }
                state
                    .timers
                    .get_mut(&id)
                    .and_then(|timer| timer.callback.take())
            };
            let Some(mut callback) = callback else {
                continue;
            };

            callback();
            fired += 1;

            let mut state = self.state.borrow_mut();
            let finished = match state.timers.get_mut(&id) {
                Some(timer) => match timer.interval {
                    Some(interval) => {
                        timer.due = due + interval;
                        timer.callback = Some(callback);
                        false
                    }
                    None => true,
                },
                // Cancelled from inside its own callback.
                None => false,
            };
            if finished {
                state.timers.remove(&id);
            }
        }

        let mut state = self.state.borrow_mut();
        if target > state.now {
            state.now = target;
        }
        fired
    }
}

impl TimerDriver for ManualTimerDriver {
    fn schedule(&self, request: TimerRequest, callback: TimerCallback) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let due = state.now + request.delay;
        let interval = request.interval.map(|period| period.max(MIN_PERIOD));
        state.timers.insert(
            id,
            ManualTimer {
                due,
                interval,
                callback: Some(callback),
            },
        );
        log::trace!("manual timer {id} armed, due at {due:?}");
        id
    }

    fn cancel(&self, id: TimerId) {
        if self.state.borrow_mut().timers.remove(&id).is_some() {
            log::trace!("manual timer {id} cancelled");
        }
    }
}

impl fmt::Debug for ManualTimerDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualTimerDriver")
            .field("now", &state.now)
            .field("active_timers", &state.timers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/manual_timers_tests.rs"]
mod tests;
