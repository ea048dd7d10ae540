//! Ownership of the slider's page indicator.
//!
//! The slot only tracks which indicator is installed and the requested
//! visibility. Every call into the indicator is returned to the caller as an
//! [`IndicatorSwap`] or a plain handle so it can run after the view's borrow
//! is released.

use std::rc::Rc;

use crate::ports::{SlideIndicator, SliderList};

#[derive(Default)]
pub(crate) struct IndicatorSlot {
    current: Option<Rc<dyn SlideIndicator>>,
    visible: bool,
}

impl IndicatorSlot {
    pub(crate) fn new(visible: bool) -> Self {
        Self {
            current: None,
            visible,
        }
    }

    pub(crate) fn requested_visibility(&self) -> bool {
        self.visible
    }

    pub(crate) fn current(&self) -> Option<Rc<dyn SlideIndicator>> {
        self.current.clone()
    }

    /// Remember `visible` for later indicators and return the one to update.
    pub(crate) fn set_visible(&mut self, visible: bool) -> Option<Rc<dyn SlideIndicator>> {
        self.visible = visible;
        self.current()
    }

    pub(crate) fn replace(&mut self, next: Rc<dyn SlideIndicator>) -> IndicatorSwap {
        let previous = self.current.replace(Rc::clone(&next));
        IndicatorSwap {
            previous,
            next,
            visible: self.visible,
        }
    }

    /// Detach the installed indicator; the caller destroys it.
    pub(crate) fn take(&mut self) -> Option<Rc<dyn SlideIndicator>> {
        self.current.take()
    }
}

#[must_use = "the swap only takes effect once applied"]
pub(crate) struct IndicatorSwap {
    previous: Option<Rc<dyn SlideIndicator>>,
    next: Rc<dyn SlideIndicator>,
    visible: bool,
}

impl IndicatorSwap {
    pub(crate) fn apply(self, list: &Rc<dyn SliderList>) {
        if let Some(previous) = self.previous {
            if !Rc::ptr_eq(&previous, &self.next) {
                previous.destroy();
            }
        }
        self.next.set_visible(self.visible);
        self.next.bind(list);
        self.next.redraw();
    }
}

#[cfg(test)]
#[path = "tests/indicator_tests.rs"]
mod tests;
