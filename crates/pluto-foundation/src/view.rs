//! Host facade of an auto-cycling slider.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use pluto_core::{
    CycleConfig, CycleController, CycleEvent, CycleState, PositionModel, SliderError,
    TimerDriver, DEFAULT_DURATION, MIN_INTERVAL,
};

use crate::attributes::{IndicatorPosition, SliderAttributes};
use crate::indicator::IndicatorSlot;
use crate::input::PointerEventKind;
use crate::ports::{
    IndicatorProvider, ItemSource, OnSlideChangeListener, SlideIndicator, SliderList,
    SnapObserver,
};

/// An auto-cycling, snap-to-page slider bound to an external list view.
///
/// `PlutoView` is a cheap handle; clones refer to the same slider. Timer and
/// snap callbacks only hold a weak reference, so dropping every handle stops
/// the slider and cancels its timers.
///
/// Position arguments are signed so that negative input is reported as
/// [`SliderError::IndexOutOfRange`] rather than wrapping.
#[derive(Clone)]
pub struct PlutoView {
    inner: Rc<RefCell<ViewInner>>,
}

struct ViewInner {
    list: Rc<dyn SliderList>,
    source: Option<Rc<dyn ItemSource>>,
    position: PositionModel,
    cycle: CycleController,
    duration: Duration,
    auto_recover: bool,
    indicator: IndicatorSlot,
    provider: Option<Rc<dyn IndicatorProvider>>,
    listener: Option<Weak<dyn OnSlideChangeListener>>,
    /// Virtual index the listener last heard about.
    last_notified: Option<i64>,
    observing_snaps: bool,
}

struct SlideChange {
    listener: Rc<dyn OnSlideChangeListener>,
    source: Rc<dyn ItemSource>,
    position: usize,
}

impl SlideChange {
    fn deliver(self) {
        self.listener.on_slide_change(&self.source, self.position);
    }
}

impl ViewInner {
    fn pending_slide_change(
        &mut self,
        source: &Rc<dyn ItemSource>,
        real_count: usize,
    ) -> Option<SlideChange> {
        let virtual_index = self.position.virtual_index();
        if self.last_notified == Some(virtual_index) {
            return None;
        }
        let listener = self.listener.as_ref()?.upgrade()?;
        let position = self.position.real_position(real_count).ok()?;
        self.last_notified = Some(virtual_index);
        Some(SlideChange {
            listener,
            source: Rc::clone(source),
            position,
        })
    }
}

impl Drop for ViewInner {
    fn drop(&mut self) {
        if self.observing_snaps {
            self.list.set_snap_observer(None);
        }
    }
}

impl PlutoView {
    /// Create a slider over `list`.
    ///
    /// Applies the indicator visibility from `attributes` and starts cycling
    /// right away when `attributes.auto_cycle` is set. An item source must be
    /// attached before the first tick or the cycle is torn down.
    pub fn new(
        list: Rc<dyn SliderList>,
        timers: Rc<dyn TimerDriver>,
        attributes: SliderAttributes,
    ) -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<ViewInner>>| {
            let weak = weak.clone();
            let cycle = CycleController::new(timers, move |event| {
                if let Some(inner) = weak.upgrade() {
                    PlutoView { inner }.on_cycle_event(event);
                }
            });
            RefCell::new(ViewInner {
                list,
                source: None,
                position: PositionModel::new(),
                cycle,
                duration: DEFAULT_DURATION,
                auto_recover: true,
                indicator: IndicatorSlot::new(attributes.indicator_visible),
                provider: None,
                listener: None,
                last_notified: None,
                observing_snaps: false,
            })
        });
        let view = Self { inner };
        if attributes.auto_cycle {
            view.start_auto_cycle();
        }
        view
    }

    /// Supply the built-in indicators used by [`Self::set_indicator_position`].
    pub fn with_indicator_provider(self, provider: Rc<dyn IndicatorProvider>) -> Self {
        self.inner.borrow_mut().provider = Some(provider);
        self
    }

    /// Attach `source` and install the default indicator.
    ///
    /// A `duration` replaces the stored cycle duration as is; it takes effect
    /// on the next start.
    pub fn create(
        &self,
        source: Rc<dyn ItemSource>,
        duration: Option<Duration>,
    ) -> Result<(), SliderError> {
        self.attach_item_source(Some(source))?;
        if let Some(duration) = duration {
            self.inner.borrow_mut().duration = duration;
        }
        if self.inner.borrow().provider.is_some() {
            self.set_indicator_position(IndicatorPosition::CenterBottom)?;
        }
        Ok(())
    }

    /// Bind the item source, install snapping and jump to the first item.
    pub fn attach_item_source(
        &self,
        source: Option<Rc<dyn ItemSource>>,
    ) -> Result<(), SliderError> {
        let source = source.ok_or(SliderError::InvalidArgument {
            reason: "item source cannot be absent",
        })?;
        let list = {
            let mut inner = self.inner.borrow_mut();
            inner.source = Some(Rc::clone(&source));
            inner.last_notified = None;
            inner.observing_snaps = true;
            Rc::clone(&inner.list)
        };
        list.attach_snap_helper();
        list.set_snap_observer(Some(self.snap_observer()));

        if source.real_count() == 0 {
            log::debug!("attached an empty item source, keeping the current position");
            return Ok(());
        }
        self.set_current_position(0, false)
    }

    pub fn has_item_source(&self) -> bool {
        self.inner.borrow().source.is_some()
    }

    /// Jump to real item `position`.
    pub fn set_current_position(&self, position: i64, smooth: bool) -> Result<(), SliderError> {
        let (_, real_count) = self.attached_source()?;
        let (list, target) = {
            let mut inner = self.inner.borrow_mut();
            inner.position.set_absolute(position, real_count)?;
            let target = inner.position.scroll_target(real_count);
            (Rc::clone(&inner.list), target)
        };
        list.scroll_to_position(target, smooth);
        Ok(())
    }

    pub fn set_current_position_smooth(&self, position: i64) -> Result<(), SliderError> {
        self.set_current_position(position, true)
    }

    pub fn move_next_position(&self, smooth: bool) -> Result<(), SliderError> {
        self.step(PositionModel::advance, smooth)
    }

    pub fn move_next(&self) -> Result<(), SliderError> {
        self.move_next_position(true)
    }

    pub fn move_prev_position(&self, smooth: bool) -> Result<(), SliderError> {
        self.step(PositionModel::retreat, smooth)
    }

    pub fn move_prev(&self) -> Result<(), SliderError> {
        self.move_prev_position(true)
    }

    /// Real position of the current slide.
    pub fn current_position(&self) -> Result<usize, SliderError> {
        let (_, real_count) = self.attached_source()?;
        self.inner.borrow().position.real_position(real_count)
    }

    /// List index the slider currently wants to show.
    pub fn scroll_target(&self) -> Result<usize, SliderError> {
        let (_, real_count) = self.populated_source()?;
        Ok(self.inner.borrow_mut().position.scroll_target(real_count))
    }

    pub fn remove_slider_at(&self, position: i64) -> Result<(), SliderError> {
        let (source, real_count) = self.attached_source()?;
        if position < 0 || position >= real_count as i64 {
            return Err(SliderError::IndexOutOfRange {
                index: position,
                len: real_count,
            });
        }
        source.remove_item_at(position as usize);
        Ok(())
    }

    pub fn remove_all_sliders(&self) -> Result<(), SliderError> {
        let (source, _) = self.attached_source()?;
        source.remove_all_items();
        Ok(())
    }

    /// Start cycling with the stored duration and auto-recover flag.
    pub fn start_auto_cycle(&self) {
        let (duration, auto_recover) = {
            let inner = self.inner.borrow();
            (inner.duration, inner.auto_recover)
        };
        self.start_auto_cycle_with(duration, duration, auto_recover);
    }

    pub fn start_auto_cycle_after(&self, delay: Duration, duration: Duration) {
        let auto_recover = self.inner.borrow().auto_recover;
        self.start_auto_cycle_with(delay, duration, auto_recover);
    }

    /// Start cycling: first advance after `delay`, then every `duration`.
    ///
    /// Replaces any running cycle or pending recovery. `duration` becomes the
    /// stored duration.
    pub fn start_auto_cycle_with(&self, delay: Duration, duration: Duration, auto_recover: bool) {
        let mut inner = self.inner.borrow_mut();
        inner.duration = duration;
        inner.auto_recover = auto_recover;
        inner
            .cycle
            .start(CycleConfig::new(delay, duration, auto_recover));
    }

    /// Stop cycling and release every association with the list.
    pub fn stop_auto_cycle(&self) {
        self.teardown();
    }

    pub fn is_auto_cycling(&self) -> bool {
        self.inner.borrow().cycle.is_cycling()
    }

    pub fn cycle_state(&self) -> CycleState {
        self.inner.borrow().cycle.state()
    }

    pub fn duration(&self) -> Duration {
        self.inner.borrow().duration
    }

    /// Change the time between two slides.
    ///
    /// Values below [`MIN_INTERVAL`] are ignored and `false` is returned. A
    /// running cycle restarts with the new interval.
    pub fn set_duration(&self, duration: Duration) -> bool {
        if duration < MIN_INTERVAL {
            log::debug!("ignoring slider duration {duration:?}");
            return false;
        }
        let mut inner = self.inner.borrow_mut();
        inner.duration = duration;
        inner.cycle.reconfigure_interval(duration)
    }

    /// Forward a pointer event intercepted on the list.
    pub fn on_touch(&self, kind: PointerEventKind) {
        kind.apply(&mut self.inner.borrow_mut().cycle);
    }

    /// The slider left the display.
    pub fn on_detached(&self) {
        self.teardown();
    }

    pub fn set_indicator_visibility(&self, visible: bool) {
        let indicator = self.inner.borrow_mut().indicator.set_visible(visible);
        if let Some(indicator) = indicator {
            indicator.set_visible(visible);
        }
    }

    /// Whether an indicator is installed and showing.
    pub fn indicator_visibility(&self) -> bool {
        let indicator = self.inner.borrow().indicator.current();
        indicator.is_some_and(|indicator| indicator.is_visible())
    }

    pub fn set_indicator_position(&self, position: IndicatorPosition) -> Result<(), SliderError> {
        let provider = self.inner.borrow().provider.clone();
        let indicator = provider
            .and_then(|provider| provider.preset(position))
            .ok_or(SliderError::IllegalState {
                reason: "no indicator available for this position",
            })?;
        self.set_custom_indicator(indicator);
        Ok(())
    }

    /// Replace the indicator. The previous one is destroyed.
    pub fn set_custom_indicator(&self, indicator: Rc<dyn SlideIndicator>) {
        let (swap, list) = {
            let mut inner = self.inner.borrow_mut();
            let swap = inner.indicator.replace(indicator);
            (swap, Rc::clone(&inner.list))
        };
        swap.apply(&list);
    }

    /// Register the slide-change listener. The slider keeps only a weak
    /// reference; `None` clears it.
    pub fn set_on_slide_change_listener<L>(&self, listener: Option<&Rc<L>>)
    where
        L: OnSlideChangeListener + 'static,
    {
        let shared = listener.map(|listener| {
            let listener: Rc<L> = Rc::clone(listener);
            listener as Rc<dyn OnSlideChangeListener>
        });
        self.set_shared_slide_change_listener(shared.as_ref());
    }

    /// Same as [`Self::set_on_slide_change_listener`] for a listener that is
    /// already held as a trait object.
    pub fn set_shared_slide_change_listener(
        &self,
        listener: Option<&Rc<dyn OnSlideChangeListener>>,
    ) {
        self.inner.borrow_mut().listener = listener.map(Rc::downgrade);
    }

    fn attached_source(&self) -> Result<(Rc<dyn ItemSource>, usize), SliderError> {
        let source = self
            .inner
            .borrow()
            .source
            .clone()
            .ok_or(SliderError::IllegalState {
                reason: "no item source attached",
            })?;
        let real_count = source.real_count();
        Ok((source, real_count))
    }

    fn populated_source(&self) -> Result<(Rc<dyn ItemSource>, usize), SliderError> {
        let (source, real_count) = self.attached_source()?;
        if real_count == 0 {
            return Err(SliderError::IllegalState {
                reason: "slider has no items",
            });
        }
        Ok((source, real_count))
    }

    fn step(&self, movement: fn(&mut PositionModel), smooth: bool) -> Result<(), SliderError> {
        let (source, real_count) = self.populated_source()?;
        let (list, target, change) = {
            let mut inner = self.inner.borrow_mut();
            movement(&mut inner.position);
            let target = inner.position.scroll_target(real_count);
            let change = inner.pending_slide_change(&source, real_count);
            (Rc::clone(&inner.list), target, change)
        };
        list.scroll_to_position(target, smooth);
        if let Some(change) = change {
            change.deliver();
        }
        Ok(())
    }

    fn snap_observer(&self) -> SnapObserver {
        let weak = Rc::downgrade(&self.inner);
        Box::new(move |index| {
            if let Some(inner) = weak.upgrade() {
                PlutoView { inner }.on_snap_settled(index);
            }
        })
    }

    fn on_snap_settled(&self, index: usize) {
        let Ok((source, real_count)) = self.populated_source() else {
            return;
        };
        let change = {
            let mut inner = self.inner.borrow_mut();
            if !inner.observing_snaps {
                return;
            }
            inner.position.set_virtual(index as i64);
            inner.pending_slide_change(&source, real_count)
        };
        if let Some(change) = change {
            change.deliver();
        }
    }

    fn on_cycle_event(&self, event: CycleEvent) {
        match event {
            CycleEvent::Advance { epoch } => {
                if !self.inner.borrow().cycle.accepts_tick(epoch) {
                    log::trace!("dropping stale auto-cycle tick (epoch {epoch})");
                    return;
                }
                log::trace!("auto-cycle tick");
                if let Err(err) = self.move_next_position(true) {
                    log::warn!("auto-cycle stopped: {err}");
                    self.teardown();
                }
            }
            CycleEvent::Recover { epoch } => {
                self.inner.borrow_mut().cycle.on_recover_elapsed(epoch);
            }
        }
    }

    /// Cancel both timers and release the listener, indicator and snap
    /// observer. Idempotent.
    fn teardown(&self) {
        let (list, indicator, was_observing) = {
            let mut inner = self.inner.borrow_mut();
            inner.cycle.stop();
            inner.listener = None;
            inner.last_notified = None;
            let was_observing = std::mem::take(&mut inner.observing_snaps);
            (Rc::clone(&inner.list), inner.indicator.take(), was_observing)
        };
        if let Some(indicator) = indicator {
            indicator.destroy();
        }
        if was_observing {
            list.set_snap_observer(None);
        }
        log::debug!("slider torn down");
    }
}

impl fmt::Debug for PlutoView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PlutoView")
            .field("state", &inner.cycle.state())
            .field("virtual_index", &inner.position.virtual_index())
            .field("duration", &inner.duration)
            .field("has_source", &inner.source.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
