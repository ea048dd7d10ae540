use super::*;

#[test]
fn set_absolute_round_trips_every_real_position() {
    for real_count in 1..=12usize {
        for position in 0..real_count {
            let mut model = PositionModel::new();
            model
                .set_absolute(position as i64, real_count)
                .expect("position in range");
            assert_eq!(model.real_position(real_count), Ok(position));
        }
    }
}

#[test]
fn set_absolute_anchors_far_from_the_list_start() {
    let mut model = PositionModel::new();
    model.set_absolute(2, 3).expect("position in range");
    assert_eq!(model.virtual_index(), (3 * MULTIPLIER + 2) as i64);
}

#[test]
fn set_absolute_rejects_out_of_range_positions() {
    let mut model = PositionModel::new();
    assert_eq!(
        model.set_absolute(3, 3),
        Err(SliderError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        model.set_absolute(-1, 3),
        Err(SliderError::IndexOutOfRange { index: -1, len: 3 })
    );
    assert_eq!(
        model.set_absolute(0, 0),
        Err(SliderError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(model.virtual_index(), 0);
}

#[test]
fn wraps_forward_and_backward() {
    let mut model = PositionModel::new();
    model.set_absolute(2, 3).expect("position in range");

    model.advance();
    assert_eq!(model.real_position(3), Ok(0));

    model.retreat();
    model.retreat();
    assert_eq!(model.real_position(3), Ok(1));
}

#[test]
fn arbitrary_walks_stay_in_range() {
    let mut model = PositionModel::new();
    model.set_absolute(0, 7).expect("position in range");
    // Deterministic pseudo-random walk that crosses zero repeatedly.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..20_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        if seed % 3 == 0 {
            model.advance();
        } else {
            model.retreat();
        }
        let real = model.real_position(7).expect("items present");
        assert!(real < 7);
    }
}

#[test]
fn real_position_requires_items() {
    let model = PositionModel::new();
    assert!(matches!(
        model.real_position(0),
        Err(SliderError::IllegalState { .. })
    ));
}

#[test]
fn scroll_target_reanchors_negative_indices() {
    let mut model = PositionModel::new();
    model.set_virtual(-4);
    assert_eq!(model.real_position(3), Ok(2));

    let target = model.scroll_target(3);

    assert_eq!(target, 3 * MULTIPLIER + 2);
    assert_eq!(model.real_position(3), Ok(2));
}

#[test]
fn scroll_target_is_the_virtual_index_when_non_negative() {
    let mut model = PositionModel::new();
    model.set_absolute(1, 4).expect("position in range");
    model.advance();
    assert_eq!(model.scroll_target(4), 4 * MULTIPLIER + 2);
}

#[test]
fn scroll_target_reanchors_past_the_last_row() {
    let mut model = PositionModel::new();
    let rows = 2 * 3 * MULTIPLIER;
    model.set_virtual(rows as i64 - 1);
    assert_eq!(model.scroll_target(3), rows - 1);

    model.advance();
    let target = model.scroll_target(3);

    assert!(target < rows);
    assert_eq!(target, 3 * MULTIPLIER);
    assert_eq!(model.real_position(3), Ok(0));
}

#[test]
fn scroll_target_follows_a_shrinking_list() {
    let mut model = PositionModel::new();
    model.set_absolute(3, 4).expect("position in range");

    let target = model.scroll_target(1);

    assert_eq!(target, MULTIPLIER);
    assert!(target < 2 * MULTIPLIER);
}
