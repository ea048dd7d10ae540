use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pluto_foundation::{
    IndicatorPosition, IndicatorProvider, ItemSource, OnSlideChangeListener, SlideIndicator,
    SliderList, SnapObserver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub smooth: bool,
}

/// List that records every request and settles only when told to.
#[derive(Default)]
pub struct RecordingList {
    scrolls: RefCell<Vec<ScrollRequest>>,
    snap_helpers: Cell<usize>,
    observer: RefCell<Option<Rc<dyn Fn(usize)>>>,
}

impl RecordingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolls(&self) -> Vec<ScrollRequest> {
        self.scrolls.borrow().clone()
    }

    pub fn last_scroll(&self) -> Option<ScrollRequest> {
        self.scrolls.borrow().last().copied()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.borrow().len()
    }

    pub fn snap_helpers_attached(&self) -> usize {
        self.snap_helpers.get()
    }

    pub fn has_snap_observer(&self) -> bool {
        self.observer.borrow().is_some()
    }

    /// Report that scrolling settled on `index`. Returns `false` when nobody
    /// observes the list.
    pub fn settle(&self, index: usize) -> bool {
        // Cloned out so the observer may replace itself.
        let observer = self.observer.borrow().clone();
        match observer {
            Some(observer) => {
                observer(index);
                true
            }
            None => false,
        }
    }

    /// Settle on the most recent scroll request, as a finished animation would.
    pub fn settle_on_last_scroll(&self) -> bool {
        match self.last_scroll() {
            Some(request) => self.settle(request.index),
            None => false,
        }
    }
}

impl SliderList for RecordingList {
    fn scroll_to_position(&self, index: usize, smooth: bool) {
        self.scrolls.borrow_mut().push(ScrollRequest { index, smooth });
    }

    fn attach_snap_helper(&self) {
        self.snap_helpers.set(self.snap_helpers.get() + 1);
    }

    fn set_snap_observer(&self, observer: Option<SnapObserver>) {
        *self.observer.borrow_mut() = observer.map(Rc::from);
    }
}

#[derive(Default)]
pub struct RecordingIndicator {
    visible: Cell<bool>,
    binds: Cell<usize>,
    redraws: Cell<usize>,
    destroys: Cell<usize>,
}

impl RecordingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binds(&self) -> usize {
        self.binds.get()
    }

    pub fn redraws(&self) -> usize {
        self.redraws.get()
    }

    pub fn destroys(&self) -> usize {
        self.destroys.get()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroys.get() > 0
    }
}

impl SlideIndicator for RecordingIndicator {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn bind(&self, _list: &Rc<dyn SliderList>) {
        self.binds.set(self.binds.get() + 1);
    }

    fn redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }

    fn destroy(&self) {
        self.destroys.set(self.destroys.get() + 1);
    }
}

/// One [`RecordingIndicator`] per preset position.
pub struct PresetIndicators {
    indicators: Vec<(IndicatorPosition, Rc<RecordingIndicator>)>,
}

impl PresetIndicators {
    pub fn new() -> Self {
        Self {
            indicators: IndicatorPosition::ALL
                .into_iter()
                .map(|position| (position, Rc::new(RecordingIndicator::new())))
                .collect(),
        }
    }

    pub fn get(&self, position: IndicatorPosition) -> Rc<RecordingIndicator> {
        self.indicators
            .iter()
            .find(|(candidate, _)| *candidate == position)
            .map(|(_, indicator)| Rc::clone(indicator))
            .expect("every preset position has an indicator")
    }
}

impl Default for PresetIndicators {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorProvider for PresetIndicators {
    fn preset(&self, position: IndicatorPosition) -> Option<Rc<dyn SlideIndicator>> {
        let indicator: Rc<dyn SlideIndicator> = self.get(position);
        Some(indicator)
    }
}

/// Item source over a vector of labels.
#[derive(Default)]
pub struct VecItemSource {
    items: RefCell<Vec<String>>,
}

impl VecItemSource {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: RefCell::new(items.into_iter().map(Into::into).collect()),
        }
    }

    /// `count` items labelled `slide 0`, `slide 1`, ...
    pub fn numbered(count: usize) -> Self {
        Self::new((0..count).map(|index| format!("slide {index}")))
    }

    pub fn items(&self) -> Vec<String> {
        self.items.borrow().clone()
    }
}

impl ItemSource for VecItemSource {
    fn real_count(&self) -> usize {
        self.items.borrow().len()
    }

    fn remove_item_at(&self, position: usize) {
        let mut items = self.items.borrow_mut();
        if position < items.len() {
            items.remove(position);
        }
    }

    fn remove_all_items(&self) {
        self.items.borrow_mut().clear();
    }
}

#[derive(Default)]
pub struct RecordingListener {
    changes: RefCell<Vec<usize>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Real positions reported so far, oldest first.
    pub fn changes(&self) -> Vec<usize> {
        self.changes.borrow().clone()
    }
}

impl OnSlideChangeListener for RecordingListener {
    fn on_slide_change(&self, _source: &Rc<dyn ItemSource>, position: usize) {
        self.changes.borrow_mut().push(position);
    }
}
