//! Collaborators the slider talks to but does not own.
//!
//! A host binds a concrete list view, indicator widgets and an item source by
//! implementing these traits. Every method takes `&self`; implementations that
//! need mutation use interior mutability, since the slider shares them behind
//! `Rc`. All methods are called on the owner thread and never while the slider
//! holds an internal borrow, so an implementation may call back into the
//! [`PlutoView`](crate::PlutoView) synchronously.

use std::rc::Rc;

use pluto_core::MULTIPLIER;

use crate::attributes::IndicatorPosition;

/// Called by the list with the virtual index it settled on after a snap.
pub type SnapObserver = Box<dyn Fn(usize)>;

/// The scrollable list the slider pages through.
pub trait SliderList {
    /// Scroll to `index`, animated when `smooth`.
    fn scroll_to_position(&self, index: usize, smooth: bool);

    /// Install paging behaviour that settles on a single item.
    fn attach_snap_helper(&self);

    /// Register the single settle observer, replacing the previous one.
    /// `None` unregisters it.
    fn set_snap_observer(&self, observer: Option<SnapObserver>);
}

/// Page indicator drawn over the list.
pub trait SlideIndicator {
    fn set_visible(&self, visible: bool);

    fn is_visible(&self) -> bool;

    /// Start following `list`.
    fn bind(&self, list: &Rc<dyn SliderList>);

    fn redraw(&self);

    /// Release every association with the list. May be called more than once.
    fn destroy(&self);
}

/// Supplies the built-in indicator for each preset position.
pub trait IndicatorProvider {
    fn preset(&self, position: IndicatorPosition) -> Option<Rc<dyn SlideIndicator>>;
}

/// Backing data of the slider.
pub trait ItemSource {
    /// Number of distinct items.
    fn real_count(&self) -> usize;

    fn remove_item_at(&self, position: usize);

    fn remove_all_items(&self);

    /// Number of rows the list should report so that virtual indices around
    /// `real_count * MULTIPLIER` stay addressable in both directions.
    fn virtual_count(&self) -> usize {
        self.real_count()
            .saturating_mul(MULTIPLIER)
            .saturating_mul(2)
    }
}

/// Notified when the visible slide changes.
pub trait OnSlideChangeListener {
    fn on_slide_change(&self, source: &Rc<dyn ItemSource>, position: usize);
}
