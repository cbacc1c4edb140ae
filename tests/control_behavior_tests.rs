use approx::assert_relative_eq;
use rust_decimal::Decimal;
use slider_rs::api::{SliderEngine, SliderEngineConfig};
use slider_rs::core::{DotOption, DotOptions, ProcessRange, SliderValue};

#[test]
fn min_range_clamps_dragged_dot() {
    let config = SliderEngineConfig::new(0, 100).with_min_range(80);
    let mut engine = SliderEngine::new(config, vec![0, 100]);

    engine.set_dot_pos(50.0, 1);
    assert_eq!(engine.dots_value()[1], SliderValue::from(80));
    assert_eq!(engine.dots_value()[0], SliderValue::from(0));
}

#[test]
fn min_range_pushes_neighbor_ahead() {
    let config = SliderEngineConfig::new(0, 100).with_min_range(80);
    let mut engine = SliderEngine::new(config, vec![0, 85]);

    engine.set_dot_pos(15.0, 0);
    assert_eq!(engine.dots_pos(), &[15.0, 100.0]);
}

#[test]
fn max_range_drags_neighbor_behind() {
    let config = SliderEngineConfig::new(0, 100).with_max_range(50);
    let mut engine = SliderEngine::new(config, vec![0, 20]);

    engine.set_dot_pos(100.0, 1);
    assert_eq!(
        engine.dots_value(),
        &[SliderValue::from(80), SliderValue::from(100)]
    );
}

#[test]
fn fixed_moves_all_dots_together() {
    let config = SliderEngineConfig::new(0, 100).with_fixed(true);
    let mut engine = SliderEngine::new(config, vec![0, 40]);

    engine.set_dot_pos(30.0, 0);
    assert_eq!(
        engine.dots_value(),
        &[SliderValue::from(30), SliderValue::from(70)]
    );
}

#[test]
fn fixed_move_shrinks_when_other_dot_hits_edge() {
    let config = SliderEngineConfig::new(0, 100).with_fixed(true);
    let mut engine = SliderEngine::new(config, vec![0, 80]);

    engine.set_dot_pos(40.0, 0);
    assert_eq!(engine.dots_pos(), &[20.0, 100.0]);
}

fn fixed_three_dots(values: Vec<i32>, middle: DotOption) -> SliderEngine {
    let options = DotOptions::PerDot(vec![DotOption::default(), middle, DotOption::default()]);
    let config = SliderEngineConfig::new(0, 100)
        .with_fixed(true)
        .with_dot_options(options);
    SliderEngine::new(config, values)
}

#[test]
fn fixed_move_right_takes_smallest_cap_of_two_dots() {
    // dot 1 can move 10 before its max, dot 2 only 5 before the track end
    let mut engine = fixed_three_dots(vec![0, 40, 95], DotOption::default().with_max(50));

    engine.set_dot_pos(30.0, 0);
    assert_eq!(engine.dots_pos(), &[5.0, 45.0, 100.0]);
}

#[test]
fn fixed_move_right_keeps_earlier_smaller_cap() {
    let mut engine = fixed_three_dots(vec![0, 40, 95], DotOption::default().with_max(42));

    engine.set_dot_pos(30.0, 0);
    assert_eq!(engine.dots_pos(), &[2.0, 42.0, 97.0]);
}

#[test]
fn fixed_move_left_takes_smallest_cap_of_two_dots() {
    // dot 0 can move 10 before the track start, dot 1 only 5 before its min
    let mut engine = fixed_three_dots(vec![10, 40, 80], DotOption::default().with_min(35));

    engine.set_dot_pos(50.0, 2);
    assert_eq!(engine.dots_pos(), &[5.0, 35.0, 75.0]);
    assert_eq!(
        engine.dots_value(),
        &[
            SliderValue::from(5),
            SliderValue::from(35),
            SliderValue::from(75)
        ]
    );
}

#[test]
fn positions_are_clamped_to_track() {
    let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 100), vec![0, 40]);

    engine.set_dots_pos(&[-30.0, 150.0]);
    assert_eq!(engine.dots_pos(), &[0.0, 100.0]);
    assert_eq!(
        engine.dots_value(),
        &[SliderValue::from(0), SliderValue::from(100)]
    );
    assert_eq!(engine.process_ranges(), &[ProcessRange::new(0.0, 100.0)]);
    assert!(!engine.is_active_by_pos(150.0));
}

#[test]
fn far_off_track_position_maps_to_max() {
    let engine = SliderEngine::new(SliderEngineConfig::new(0, 100), 0);
    assert_eq!(engine.parse_pos(1e30), SliderValue::from(100));
    assert_eq!(engine.parse_pos(-1e30), SliderValue::from(0));
}

#[test]
fn unordered_slider_keeps_dot_identity() {
    let config = SliderEngineConfig::new(0, 100).with_order(false);
    let mut engine = SliderEngine::new(config, vec![0, 40]);

    engine.set_dot_pos(80.0, 0);
    assert_eq!(
        engine.dots_value(),
        &[SliderValue::from(80), SliderValue::from(40)]
    );
}

#[test]
fn ordered_slider_sorts_crossing_dots() {
    let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 100), vec![0, 40]);

    engine.set_dot_pos(80.0, 0);
    assert_eq!(engine.dots_pos(), &[40.0, 80.0]);
}

#[test]
fn disabled_crossing_stops_at_neighbor() {
    let config = SliderEngineConfig::new(0, 100).with_enable_cross(false);
    let mut engine = SliderEngine::new(config, vec![20, 60]);

    engine.set_dot_pos(90.0, 0);
    assert_eq!(engine.dots_pos(), &[60.0, 60.0]);

    engine.set_dot_pos(10.0, 1);
    assert_eq!(engine.dots_pos(), &[60.0, 60.0]);
}

#[test]
fn interval_change_updates_index_mapping() {
    let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 100), 20);
    engine.set_interval(10);

    assert_eq!(engine.total(), 10);
    assert_eq!(
        engine.get_index_by_value(&SliderValue::from(20)),
        Some(Decimal::from(2))
    );
    assert_eq!(engine.get_value_by_index(2), SliderValue::from(20));
    assert_eq!(engine.dots_index(), &[Some(Decimal::from(2))]);
}

#[test]
fn value_by_index_clamps_to_track() {
    let engine = SliderEngine::new(SliderEngineConfig::new(0, 10), 0);
    assert_eq!(engine.get_value_by_index(-3), SliderValue::from(0));
    assert_eq!(engine.get_value_by_index(99), SliderValue::from(10));
}

#[test]
fn decimal_interval_maps_without_drift() {
    let config = SliderEngineConfig::new(0, 1).with_interval(Decimal::new(1, 1));
    let engine = SliderEngine::new(config, SliderValue::number(Decimal::new(3, 1)));

    assert_eq!(engine.total(), 10);
    assert_relative_eq!(engine.dots_pos()[0], 30.0);
    assert_eq!(
        engine.parse_pos(70.0),
        SliderValue::number(Decimal::new(7, 1))
    );
    assert_eq!(
        engine.parse_pos(74.9),
        SliderValue::number(Decimal::new(7, 1))
    );
    assert_eq!(
        engine.parse_pos(75.0),
        SliderValue::number(Decimal::new(8, 1))
    );
}

#[test]
fn negative_range_positions_offset_from_min() {
    let config = SliderEngineConfig::new(-50, 50).with_interval(5);
    let engine = SliderEngine::new(config, vec![-50, 0, 25]);

    assert_eq!(engine.total(), 20);
    assert_eq!(engine.dots_pos(), &[0.0, 50.0, 75.0]);
    assert_eq!(engine.parse_pos(100.0), SliderValue::from(50));
}

#[test]
fn numeric_text_values_are_accepted() {
    let engine = SliderEngine::new(SliderEngineConfig::new(0, 100), vec!["25", "75"]);
    assert_eq!(engine.dots_pos(), &[25.0, 75.0]);
}

#[test]
fn recent_dot_prefers_lowest_index_on_tie() {
    let engine = SliderEngine::new(SliderEngineConfig::new(0, 100), vec![10, 40]);
    assert_eq!(engine.get_recent_dot(26.0), Some(1));
    assert_eq!(engine.get_recent_dot(25.0), Some(0));
    assert_eq!(engine.get_recent_dot(-20.0), Some(0));

    let empty = SliderEngine::new(SliderEngineConfig::new(0, 100), Vec::<i32>::new());
    assert_eq!(empty.get_recent_dot(50.0), None);
}

#[test]
fn moving_to_same_position_is_noop() {
    let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 100), vec![10, 40]);
    let before = engine.snapshot();
    engine.set_dot_pos(10.0, 0);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn adsorb_snaps_position_to_value() {
    let config = SliderEngineConfig::new(0, 10).with_adsorb(true);
    let mut engine = SliderEngine::new(config, 0);

    engine.set_dot_pos(33.0, 0);
    assert_eq!(engine.dots_value(), &[SliderValue::from(3)]);
    assert_eq!(engine.dots_pos(), &[30.0]);
}

#[test]
fn without_adsorb_position_keeps_pointer_offset() {
    let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 10), 0);

    engine.set_dot_pos(33.0, 0);
    assert_eq!(engine.dots_value(), &[SliderValue::from(3)]);
    assert_eq!(engine.dots_pos(), &[33.0]);
}

#[test]
fn scalar_value_maps_to_single_position() {
    let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 100), vec![0, 50]);
    assert_eq!(engine.dots_pos(), &[0.0, 50.0]);

    engine.set_value(37);
    assert_eq!(
        engine.dots_pos(),
        &[engine.parse_value(&SliderValue::from(37))]
    );
}

#[test]
fn recent_dot_and_activity_on_two_dots() {
    let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 100), vec![0, 100]);
    assert_eq!(engine.get_recent_dot(20.0), Some(0));
    assert_eq!(engine.get_recent_dot(90.0), Some(1));

    engine.set_value(vec![0, 60]);
    assert!(engine.is_active_by_pos(40.0));
    assert!(!engine.is_active_by_pos(80.0));
}

#[test]
fn min_range_rejects_move_towards_neighbor() {
    let config = SliderEngineConfig::new(0, 100).with_min_range(80);
    let mut engine = SliderEngine::new(config, vec![0, 100]);

    engine.set_dot_pos(70.0, 1);
    assert_eq!(engine.dots_value()[1], SliderValue::from(80));
}
