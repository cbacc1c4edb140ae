use slider_rs::api::{SliderEngine, SliderEngineConfig};
use slider_rs::core::{DotOption, DotOptions, DotPosRange, SliderValue};

#[test]
fn min_range_floors_each_dot_by_index() {
    let config = SliderEngineConfig::new(0, 100).with_min_range(20);
    let engine = SliderEngine::new(config, vec![0, 50, 100]);

    assert_eq!(
        engine.dot_pos_ranges(),
        &[
            DotPosRange::new(0.0, 60.0),
            DotPosRange::new(20.0, 80.0),
            DotPosRange::new(40.0, 100.0),
        ]
    );
}

#[test]
fn min_range_cascades_through_several_dots() {
    let config = SliderEngineConfig::new(0, 100).with_min_range(20);
    let mut engine = SliderEngine::new(config, vec![0, 25, 50]);

    engine.set_dot_pos(20.0, 0);
    assert_eq!(engine.dots_pos(), &[20.0, 45.0, 70.0]);
}

#[test]
fn max_range_pulls_left_neighbors_when_moving_right() {
    let config = SliderEngineConfig::new(0, 100).with_max_range(30);
    let mut engine = SliderEngine::new(config, vec![0, 20, 40]);

    engine.set_dot_pos(80.0, 2);
    assert_eq!(engine.dots_pos(), &[40.0, 60.0, 80.0]);
}

#[test]
fn range_in_value_units_scales_with_span() {
    let config = SliderEngineConfig::new(0, 200).with_min_range(50);
    let engine = SliderEngine::new(config, vec![0, 200]);

    assert_eq!(engine.dot_pos_ranges()[0], DotPosRange::new(0.0, 75.0));
    assert_eq!(engine.dot_pos_ranges()[1], DotPosRange::new(25.0, 100.0));
}

#[test]
fn crossing_disabled_bounds_follow_neighbors() {
    let config = SliderEngineConfig::new(0, 100).with_enable_cross(false);
    let engine = SliderEngine::new(config, vec![10, 50, 90]);

    assert_eq!(
        engine.dot_pos_ranges(),
        &[
            DotPosRange::new(0.0, 50.0),
            DotPosRange::new(10.0, 90.0),
            DotPosRange::new(50.0, 100.0),
        ]
    );
}

#[test]
fn crossing_disabled_uses_neighbor_at_track_start() {
    let config = SliderEngineConfig::new(0, 100).with_enable_cross(false);
    let mut engine = SliderEngine::new(config, vec![0, 0]);

    engine.set_dot_pos(40.0, 0);
    assert_eq!(engine.dots_pos(), &[0.0, 0.0]);
}

#[test]
fn shared_dot_option_bounds_every_dot() {
    let options = DotOptions::Shared(DotOption::default().with_min(20).with_max(80));
    let config = SliderEngineConfig::new(0, 100).with_dot_options(options);
    let mut engine = SliderEngine::new(config, 50);

    assert_eq!(engine.dot_pos_ranges(), &[DotPosRange::new(20.0, 80.0)]);

    engine.set_dot_pos(10.0, 0);
    assert_eq!(engine.dots_value(), &[SliderValue::from(20)]);

    engine.set_dot_pos(95.0, 0);
    assert_eq!(engine.dots_value(), &[SliderValue::from(80)]);
}

#[test]
fn per_dot_options_only_touch_their_dot() {
    let options = DotOptions::PerDot(vec![
        DotOption::default(),
        DotOption::default().with_min(60),
    ]);
    let config = SliderEngineConfig::new(0, 100).with_dot_options(options);
    let mut engine = SliderEngine::new(config, vec![10, 70]);

    engine.set_dot_pos(30.0, 1);
    assert_eq!(engine.dots_pos(), &[10.0, 60.0]);

    engine.set_dot_pos(0.0, 0);
    assert_eq!(engine.dots_pos(), &[0.0, 60.0]);
}

#[test]
fn dot_options_can_be_replaced_at_runtime() {
    let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 100), 50);
    engine.set_dot_options(Some(DotOptions::Shared(
        DotOption::default().with_max(60),
    )));
    assert_eq!(engine.dot_pos_ranges(), &[DotPosRange::new(0.0, 60.0)]);

    engine.set_dot_options(None);
    assert_eq!(engine.dot_pos_ranges(), &[DotPosRange::new(0.0, 100.0)]);
}

#[test]
fn clearing_range_removes_constraint() {
    let config = SliderEngineConfig::new(0, 100).with_min_range(30);
    let mut engine = SliderEngine::new(config, vec![0, 50]);
    engine.set_min_range(None);

    engine.set_dot_pos(10.0, 1);
    assert_eq!(engine.dots_pos(), &[0.0, 10.0]);
}
