use std::rc::Rc;
use std::time::Duration;

use pluto_core::MULTIPLIER;
use pluto_foundation::{
    IndicatorPosition, ItemSource, OnSlideChangeListener, SlideIndicator, SliderAttributes,
    SliderError,
};
use pluto_testing::{RecordingIndicator, RecordingListener, ScrollRequest, SliderTestRule};

fn anchor(real_count: usize) -> usize {
    real_count * MULTIPLIER
}

#[test]
fn wrap_around_walk_over_three_slides() {
    let rule = SliderTestRule::new();
    rule.create(3).expect("create succeeds");

    rule.view()
        .set_current_position(2, false)
        .expect("position in range");
    assert_eq!(
        rule.list().last_scroll(),
        Some(ScrollRequest {
            index: anchor(3) + 2,
            smooth: false,
        })
    );

    rule.view().move_next().expect("items present");
    assert_eq!(rule.position(), 0);

    rule.view().move_prev().expect("items present");
    rule.view().move_prev().expect("items present");
    assert_eq!(rule.position(), 1);
    assert_eq!(rule.view().scroll_target(), Ok(anchor(3) + 1));
}

#[test]
fn attach_requires_a_source() {
    let rule = SliderTestRule::new();
    assert!(matches!(
        rule.view().attach_item_source(None),
        Err(SliderError::InvalidArgument { .. })
    ));
    assert!(!rule.view().has_item_source());
}

#[test]
fn attach_installs_snapping_and_jumps_to_the_first_item() {
    let rule = SliderTestRule::new();
    rule.create(4).expect("create succeeds");

    assert_eq!(rule.list().snap_helpers_attached(), 1);
    assert!(rule.list().has_snap_observer());
    assert_eq!(
        rule.list().scrolls(),
        vec![ScrollRequest {
            index: anchor(4),
            smooth: false,
        }]
    );
}

#[test]
fn position_queries_need_a_source() {
    let rule = SliderTestRule::new();
    let view = rule.view();

    assert!(matches!(
        view.current_position(),
        Err(SliderError::IllegalState { .. })
    ));
    assert!(matches!(
        view.set_current_position(0, true),
        Err(SliderError::IllegalState { .. })
    ));
    assert!(matches!(
        view.move_next(),
        Err(SliderError::IllegalState { .. })
    ));
    assert!(matches!(
        view.remove_all_sliders(),
        Err(SliderError::IllegalState { .. })
    ));
    assert_eq!(rule.list().scroll_count(), 0);
}

#[test]
fn set_current_position_rejects_out_of_range() {
    let rule = SliderTestRule::new();
    rule.create(3).expect("create succeeds");

    assert_eq!(
        rule.view().set_current_position(3, true),
        Err(SliderError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        rule.view().set_current_position_smooth(-1),
        Err(SliderError::IndexOutOfRange { index: -1, len: 3 })
    );
    assert_eq!(rule.list().scroll_count(), 1);
    assert_eq!(rule.position(), 0);
}

#[test]
fn removing_slides_delegates_to_the_source() {
    let rule = SliderTestRule::new();
    let source = rule.create(3).expect("create succeeds");

    assert_eq!(
        rule.view().remove_slider_at(3),
        Err(SliderError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        rule.view().remove_slider_at(-1),
        Err(SliderError::IndexOutOfRange { index: -1, len: 3 })
    );

    rule.view().remove_slider_at(1).expect("position in range");
    assert_eq!(source.items(), vec!["slide 0", "slide 2"]);

    rule.view().remove_all_sliders().expect("source attached");
    assert_eq!(source.real_count(), 0);
    assert!(matches!(
        rule.view().current_position(),
        Err(SliderError::IllegalState { .. })
    ));
}

#[test]
fn empty_source_attaches_without_positioning() {
    let rule = SliderTestRule::new();
    rule.create(0).expect("empty source is accepted");

    assert_eq!(rule.list().scroll_count(), 0);
    assert!(matches!(
        rule.view().move_next(),
        Err(SliderError::IllegalState { .. })
    ));
}

#[test]
fn virtual_count_leaves_room_on_both_sides() {
    let rule = SliderTestRule::new();
    let source = rule.create(3).expect("create succeeds");
    assert_eq!(source.virtual_count(), 3 * MULTIPLIER * 2);
}

#[test]
fn listener_hears_steps_and_settles_once_each() {
    let rule = SliderTestRule::new();
    rule.create(3).expect("create succeeds");
    let listener = Rc::new(RecordingListener::new());
    rule.view().set_on_slide_change_listener(Some(&listener));

    rule.view().move_next().expect("items present");
    assert_eq!(listener.changes(), vec![1]);

    // The animation finishing on the announced row is not a new change.
    assert!(rule.list().settle_on_last_scroll());
    assert_eq!(listener.changes(), vec![1]);

    // A user swipe settles somewhere else.
    rule.list().settle(anchor(3) + 2);
    assert_eq!(listener.changes(), vec![1, 2]);
    assert_eq!(rule.position(), 2);
}

#[test]
fn clearing_the_listener_stops_notifications() {
    let rule = SliderTestRule::new();
    rule.create(3).expect("create succeeds");
    let listener = Rc::new(RecordingListener::new());
    rule.view().set_on_slide_change_listener(Some(&listener));
    rule.view()
        .set_on_slide_change_listener::<RecordingListener>(None);

    rule.view().move_next().expect("items present");

    assert!(listener.changes().is_empty());
}

#[test]
fn create_installs_the_center_bottom_indicator() {
    let rule = SliderTestRule::new();
    rule.create(2).expect("create succeeds");

    let indicator = rule.indicators().get(IndicatorPosition::CenterBottom);
    assert_eq!(indicator.binds(), 1);
    assert_eq!(indicator.redraws(), 1);
    assert!(!rule.view().indicator_visibility());

    rule.view().set_indicator_visibility(true);
    assert!(rule.view().indicator_visibility());
}

#[test]
fn indicator_visibility_from_attributes_applies_to_later_indicators() {
    let rule = SliderTestRule::with_attributes(SliderAttributes {
        auto_cycle: false,
        indicator_visible: true,
    });
    assert!(!rule.view().indicator_visibility());

    rule.create(2).expect("create succeeds");

    assert!(rule.view().indicator_visibility());
}

#[test]
fn moving_the_indicator_destroys_the_previous_one() {
    let rule = SliderTestRule::new();
    rule.create(2).expect("create succeeds");
    rule.view().set_indicator_visibility(true);

    rule.view()
        .set_indicator_position(IndicatorPosition::LeftTop)
        .expect("preset available");

    let previous = rule.indicators().get(IndicatorPosition::CenterBottom);
    let current = rule.indicators().get(IndicatorPosition::LeftTop);
    assert!(previous.is_destroyed());
    assert_eq!(current.binds(), 1);
    assert!(current.is_visible());
}

#[test]
fn custom_indicator_replaces_the_preset() {
    let rule = SliderTestRule::new();
    rule.create(2).expect("create succeeds");
    let custom = Rc::new(RecordingIndicator::new());

    rule.view().set_custom_indicator(custom.clone());

    assert!(rule
        .indicators()
        .get(IndicatorPosition::CenterBottom)
        .is_destroyed());
    assert_eq!(custom.binds(), 1);
    assert_eq!(custom.redraws(), 1);
    assert!(!custom.is_destroyed());
}

#[test]
fn create_with_a_duration_stores_it_as_given() {
    let rule = SliderTestRule::new();
    let source = Rc::new(pluto_testing::VecItemSource::numbered(2));

    rule.view()
        .create(source, Some(Duration::from_millis(300)))
        .expect("create succeeds");

    assert_eq!(rule.view().duration(), Duration::from_millis(300));
}

#[test]
fn removing_slides_keeps_scroll_targets_inside_the_list() {
    let rule = SliderTestRule::new();
    let source = rule.create(3).expect("create succeeds");
    rule.view()
        .set_current_position(2, false)
        .expect("position in range");

    rule.view().remove_slider_at(0).expect("position in range");
    rule.view().remove_slider_at(0).expect("position in range");
    rule.view().move_next().expect("items present");

    let request = rule.list().last_scroll().expect("step scrolled");
    assert!(request.index < source.virtual_count());
    assert_eq!(request.index, anchor(1));
}

#[test]
fn listener_held_as_a_trait_object_can_register() {
    let rule = SliderTestRule::new();
    rule.create(3).expect("create succeeds");
    let recorder = Rc::new(RecordingListener::new());
    let shared: Rc<dyn OnSlideChangeListener> = recorder.clone();

    rule.view().set_shared_slide_change_listener(Some(&shared));
    rule.view().move_next().expect("items present");
    assert_eq!(recorder.changes(), vec![1]);

    rule.view().move_next().expect("items present");
    assert_eq!(recorder.changes(), vec![1, 2]);
}
