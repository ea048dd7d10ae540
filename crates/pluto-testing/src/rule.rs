use std::rc::Rc;
use std::time::Duration;

use pluto_core::{ManualTimerDriver, TimerDriver};
use pluto_foundation::{PlutoView, SliderAttributes, SliderError};

use crate::fakes::{PresetIndicators, RecordingList, VecItemSource};

/// Headless harness for exercising a slider in tests.
///
/// `SliderTestRule` owns a virtual clock, a recording list and preset
/// indicators, and exposes helpers to move time forward without a real
/// timer thread or windowing backend.
pub struct SliderTestRule {
    driver: Rc<ManualTimerDriver>,
    list: Rc<RecordingList>,
    indicators: Rc<PresetIndicators>,
    view: PlutoView,
}

impl SliderTestRule {
    /// A slider that does not start cycling on its own.
    pub fn new() -> Self {
        Self::with_attributes(SliderAttributes {
            auto_cycle: false,
            ..SliderAttributes::default()
        })
    }

    pub fn with_attributes(attributes: SliderAttributes) -> Self {
        let driver = Rc::new(ManualTimerDriver::new());
        let list = Rc::new(RecordingList::new());
        let indicators = Rc::new(PresetIndicators::new());
        let timers: Rc<dyn TimerDriver> = driver.clone();
        let view = PlutoView::new(list.clone(), timers, attributes)
            .with_indicator_provider(indicators.clone());
        Self {
            driver,
            list,
            indicators,
            view,
        }
    }

    /// Attach `count` numbered items through `create`.
    pub fn create(&self, count: usize) -> Result<Rc<VecItemSource>, SliderError> {
        let source = Rc::new(VecItemSource::numbered(count));
        self.view.create(source.clone(), None)?;
        Ok(source)
    }

    pub fn view(&self) -> &PlutoView {
        &self.view
    }

    pub fn list(&self) -> &RecordingList {
        &self.list
    }

    pub fn indicators(&self) -> &PresetIndicators {
        &self.indicators
    }

    pub fn driver(&self) -> &ManualTimerDriver {
        &self.driver
    }

    /// Move virtual time forward, firing due timers. Returns the number of
    /// callbacks that ran.
    pub fn advance(&self, delta: Duration) -> usize {
        self.driver.advance_by(delta)
    }

    pub fn advance_millis(&self, millis: u64) -> usize {
        self.advance(Duration::from_millis(millis))
    }

    /// Current real position, panicking if the slider has none.
    pub fn position(&self) -> usize {
        self.view
            .current_position()
            .expect("slider has a current position")
    }
}

impl Default for SliderTestRule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/rule_tests.rs"]
mod tests;
