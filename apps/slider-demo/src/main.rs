mod console;

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context};
use pluto_core::{TimerDriver, DEFAULT_RECOVER_DELAY};
use pluto_foundation::{IndicatorPosition, PlutoView, PointerEventKind, SliderAttributes};
use pluto_runtime_std::StdTimerRuntime;

use console::{ConsoleIndicators, ConsoleList, PrintingListener, Slides};

/// Run timer callbacks on this thread for `span`.
fn run_for(runtime: &StdTimerRuntime, span: Duration) {
    let deadline = Instant::now() + span;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        runtime.wait_and_drain(remaining);
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Pluto Slider Console Demo ===");
    println!("Walks a four-slide carousel through:");
    println!("  - automatic cycling with wrap-around");
    println!("  - pausing on touch and recovering after the grace period");
    println!("  - changing the duration and the indicator position");
    println!();

    let runtime = Rc::new(StdTimerRuntime::new());
    ensure!(runtime.is_running(), "timer thread failed to start");
    let timers: Rc<dyn TimerDriver> = runtime.clone();

    let attributes =
        SliderAttributes::parse([("auto_cycle", "false"), ("indicator_visibility", "true")])
            .context("parse slider attributes")?;
    let view = PlutoView::new(Rc::new(ConsoleList::default()), timers, attributes)
        .with_indicator_provider(Rc::new(ConsoleIndicators));

    let slides = Rc::new(Slides::new(&["Mercury", "Venus", "Earth", "Mars"]));
    let listener = Rc::new(PrintingListener {
        slides: Rc::clone(&slides),
    });
    view.create(slides.clone(), Some(Duration::from_millis(800)))
        .context("attach slides")?;
    view.set_on_slide_change_listener(Some(&listener));

    println!("-- cycling every {:?}", view.duration());
    view.start_auto_cycle();
    run_for(&runtime, Duration::from_millis(3300));

    println!("-- finger down: paused");
    view.on_touch(PointerEventKind::Down);
    ensure!(!view.is_auto_cycling(), "touch-down must pause cycling");
    run_for(&runtime, Duration::from_millis(1500));

    println!("-- finger up: resuming in {DEFAULT_RECOVER_DELAY:?}");
    view.on_touch(PointerEventKind::Up);
    run_for(&runtime, DEFAULT_RECOVER_DELAY + Duration::from_millis(1000));
    ensure!(view.is_auto_cycling(), "slider should have recovered");

    println!("-- faster slides, indicator moved to {}", IndicatorPosition::RightTop);
    ensure!(
        view.set_duration(Duration::from_millis(500)),
        "500ms is a valid duration"
    );
    view.set_indicator_position(IndicatorPosition::RightTop)
        .context("move indicator")?;
    run_for(&runtime, Duration::from_millis(2600));

    view.stop_auto_cycle();
    println!();
    println!(
        "stopped on slide #{} after {:?}",
        view.current_position().context("read position")?,
        view.duration()
    );
    Ok(())
}
