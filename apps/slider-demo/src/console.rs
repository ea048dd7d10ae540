//! Terminal stand-ins for the list, indicator and data of a slider.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pluto_foundation::{
    IndicatorPosition, IndicatorProvider, ItemSource, OnSlideChangeListener, SlideIndicator,
    SliderList, SnapObserver,
};

/// Prints scroll requests and settles on them immediately.
#[derive(Default)]
pub struct ConsoleList {
    observer: RefCell<Option<Rc<dyn Fn(usize)>>>,
}

impl SliderList for ConsoleList {
    fn scroll_to_position(&self, index: usize, smooth: bool) {
        let style = if smooth { "smooth" } else { "jump" };
        println!("  list: {style} scroll to row {index}");
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(index);
        }
    }

    fn attach_snap_helper(&self) {
        log::debug!("paging snap helper attached");
    }

    fn set_snap_observer(&self, observer: Option<SnapObserver>) {
        *self.observer.borrow_mut() = observer.map(Rc::from);
    }
}

/// Dot indicator rendered as a line of text.
pub struct ConsoleIndicator {
    position: IndicatorPosition,
    visible: Cell<bool>,
}

impl ConsoleIndicator {
    pub fn new(position: IndicatorPosition) -> Self {
        Self {
            position,
            visible: Cell::new(false),
        }
    }
}

impl SlideIndicator for ConsoleIndicator {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn bind(&self, _list: &Rc<dyn SliderList>) {
        log::info!("{} indicator bound", self.position);
    }

    fn redraw(&self) {
        if self.visible.get() {
            println!("  indicator @ {}", self.position);
        }
    }

    fn destroy(&self) {
        log::info!("{} indicator destroyed", self.position);
    }
}

pub struct ConsoleIndicators;

impl IndicatorProvider for ConsoleIndicators {
    fn preset(&self, position: IndicatorPosition) -> Option<Rc<dyn SlideIndicator>> {
        Some(Rc::new(ConsoleIndicator::new(position)))
    }
}

pub struct Slides {
    titles: RefCell<Vec<&'static str>>,
}

impl Slides {
    pub fn new(titles: &[&'static str]) -> Self {
        Self {
            titles: RefCell::new(titles.to_vec()),
        }
    }

    pub fn title(&self, position: usize) -> Option<&'static str> {
        self.titles.borrow().get(position).copied()
    }
}

impl ItemSource for Slides {
    fn real_count(&self) -> usize {
        self.titles.borrow().len()
    }

    fn remove_item_at(&self, position: usize) {
        let mut titles = self.titles.borrow_mut();
        if position < titles.len() {
            titles.remove(position);
        }
    }

    fn remove_all_items(&self) {
        self.titles.borrow_mut().clear();
    }
}

/// Prints every slide change with the slide's title.
pub struct PrintingListener {
    pub slides: Rc<Slides>,
}

impl OnSlideChangeListener for PrintingListener {
    fn on_slide_change(&self, _source: &Rc<dyn ItemSource>, position: usize) {
        let title = self.slides.title(position).unwrap_or("?");
        println!("  now showing #{position}: {title}");
    }
}
