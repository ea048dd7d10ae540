use crate::platform::{TimerDriver, TimerId, TimerRequest};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Owning handle to a scheduled callback.
///
/// Dropping the registration cancels the timer, so holding at most one
/// registration per timer kind is enough to guarantee a single active ticker.
pub struct TimerRegistration {
    driver: Rc<dyn TimerDriver>,
    id: Option<TimerId>,
}

impl TimerRegistration {
    /// Schedule `callback` to run once after `delay`.
    pub fn once(
        driver: &Rc<dyn TimerDriver>,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Self {
        let mut callback_opt = Some(callback);
        let id = driver.schedule(
            TimerRequest::once(delay),
            Box::new(move || {
                if let Some(callback) = callback_opt.take() {
                    callback();
                }
            }),
        );
        Self::new(driver, id)
    }

    /// Schedule `callback` every `interval`, starting after `delay`.
    pub fn repeating(
        driver: &Rc<dyn TimerDriver>,
        delay: Duration,
        interval: Duration,
        callback: impl FnMut() + 'static,
    ) -> Self {
        let id = driver.schedule(
            TimerRequest::repeating(delay, interval),
            Box::new(callback),
        );
        Self::new(driver, id)
    }

    fn new(driver: &Rc<dyn TimerDriver>, id: TimerId) -> Self {
        Self {
            driver: Rc::clone(driver),
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.driver.cancel(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for TimerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("id", &self.id)
            .finish()
    }
}
