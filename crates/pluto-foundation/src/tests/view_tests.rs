use super::*;
use pluto_core::ManualTimerDriver;
use std::cell::Cell;

/// List that settles synchronously on every scroll, like a list without
/// animations would.
#[derive(Default)]
struct InstantList {
    observer: RefCell<Option<SnapObserver>>,
    scrolls: Cell<usize>,
}

impl SliderList for InstantList {
    fn scroll_to_position(&self, index: usize, _smooth: bool) {
        self.scrolls.set(self.scrolls.get() + 1);
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(index);
        }
    }

    fn attach_snap_helper(&self) {}

    fn set_snap_observer(&self, observer: Option<SnapObserver>) {
        *self.observer.borrow_mut() = observer;
    }
}

struct FixedSource(usize);

impl ItemSource for FixedSource {
    fn real_count(&self) -> usize {
        self.0
    }

    fn remove_item_at(&self, _position: usize) {}

    fn remove_all_items(&self) {}
}

#[derive(Default)]
struct CountingListener {
    positions: RefCell<Vec<usize>>,
}

impl OnSlideChangeListener for CountingListener {
    fn on_slide_change(&self, _source: &Rc<dyn ItemSource>, position: usize) {
        self.positions.borrow_mut().push(position);
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn setup(auto_cycle: bool) -> (PlutoView, Rc<InstantList>, Rc<ManualTimerDriver>) {
    let list = Rc::new(InstantList::default());
    let driver = Rc::new(ManualTimerDriver::new());
    let view = PlutoView::new(
        list.clone(),
        driver.clone(),
        SliderAttributes {
            auto_cycle,
            indicator_visible: false,
        },
    );
    (view, list, driver)
}

#[test]
fn synchronous_snap_callbacks_do_not_conflict_with_the_view() {
    let (view, list, _driver) = setup(false);
    let listener = Rc::new(CountingListener::default());
    view.attach_item_source(Some(Rc::new(FixedSource(3))))
        .expect("source attaches");
    view.set_on_slide_change_listener(Some(&listener));

    view.move_next().expect("items present");

    assert_eq!(list.scrolls.get(), 2);
    assert_eq!(view.current_position(), Ok(1));
    // The synchronous settle reports the index the step already announced.
    assert_eq!(*listener.positions.borrow(), [1]);
}

#[test]
fn dropping_the_last_handle_cancels_timers_and_unregisters() {
    let (view, list, driver) = setup(true);
    view.attach_item_source(Some(Rc::new(FixedSource(2))))
        .expect("source attaches");
    assert_eq!(driver.active_timers(), 1);
    assert!(list.observer.borrow().is_some());

    drop(view);

    assert_eq!(driver.active_timers(), 0);
    assert!(list.observer.borrow().is_none());
    driver.advance_by(ms(60_000));
}

#[test]
fn listener_is_held_weakly() {
    let (view, _list, _driver) = setup(false);
    view.attach_item_source(Some(Rc::new(FixedSource(4))))
        .expect("source attaches");
    let listener = Rc::new(CountingListener::default());
    view.set_on_slide_change_listener(Some(&listener));
    assert_eq!(Rc::strong_count(&listener), 1);

    drop(listener);

    view.move_next().expect("a gone listener is not an error");
}

#[test]
fn teardown_runs_once_per_trigger_and_is_repeatable() {
    let (view, list, driver) = setup(true);
    view.attach_item_source(Some(Rc::new(FixedSource(2))))
        .expect("source attaches");

    view.on_detached();
    view.stop_auto_cycle();
    view.on_detached();

    assert_eq!(view.cycle_state(), CycleState::Idle);
    assert_eq!(driver.active_timers(), 0);
    assert!(list.observer.borrow().is_none());
}

#[test]
fn settle_after_teardown_is_ignored() {
    let (view, list, _driver) = setup(false);
    view.attach_item_source(Some(Rc::new(FixedSource(3))))
        .expect("source attaches");
    let observer = list.observer.borrow_mut().take().expect("observer installed");
    let before = view.current_position();

    view.stop_auto_cycle();
    observer(7);

    assert_eq!(view.current_position(), before);
}
