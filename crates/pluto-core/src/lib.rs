//! Core runtime for Pluto sliders.
//!
//! This crate owns everything about an auto-cycling slider that is independent
//! of a concrete list view or windowing backend:
//!
//! - [`PositionModel`]: the virtual infinite-position model that maps an
//!   unbounded index onto a finite number of real items.
//! - [`CycleController`]: the cycle scheduler and the pause/recover state
//!   machine driven by touch input.
//! - [`TimerDriver`] and [`TimerRegistration`]: the cancellable scheduled task
//!   abstraction the controller is built on. Hosts provide a driver; the
//!   deterministic [`ManualTimerDriver`] ships here, a thread-backed one lives
//!   in `pluto-runtime-std`.

pub mod collections;
pub mod cycle;
pub mod error;
pub mod manual_timers;
pub mod platform;
pub mod position;
pub mod timer;

pub use cycle::{
    CycleConfig, CycleController, CycleEvent, CycleSink, CycleState, DEFAULT_DURATION,
    DEFAULT_RECOVER_DELAY, MIN_INTERVAL,
};
pub use error::SliderError;
pub use manual_timers::ManualTimerDriver;
pub use platform::{TimerDriver, TimerId, TimerRequest};
pub use position::{PositionModel, MULTIPLIER};
pub use timer::TimerRegistration;

pub mod prelude {
    pub use crate::cycle::{CycleConfig, CycleController, CycleEvent, CycleState};
    pub use crate::error::SliderError;
    pub use crate::manual_timers::ManualTimerDriver;
    pub use crate::platform::{TimerDriver, TimerId, TimerRequest};
    pub use crate::position::PositionModel;
    pub use crate::timer::TimerRegistration;
}
