use zone_explorer::simulation::params::{CANVAS_WIDTH, PANEL_WIDTH, WORLD_WIDTH};
use zone_explorer::simulation::zones::ZoneLayout;
use zone_explorer::simulation::{Lockout, Zone};

const EPSILON: f64 = 1e-9;

fn assert_float_eq(a: f64, b: f64, msg: &str) {
    assert!((a - b).abs() < EPSILON, "{msg}: expected {b}, got {a}");
}

#[test]
fn test_layout_edges() {
    let layout = ZoneLayout::default();
    let zone_width = WORLD_WIDTH / 3.0;

    assert_float_eq(layout.comfort_min, PANEL_WIDTH, "comfort min");
    assert_float_eq(layout.comfort_max, PANEL_WIDTH + zone_width, "comfort max");
    assert_float_eq(layout.stretch_min, layout.comfort_max, "stretch min");
    assert_float_eq(layout.stretch_max, PANEL_WIDTH + 2.0 * zone_width, "stretch max");
    assert_float_eq(layout.growth_max, 580.0, "growth max");
    assert_float_eq(layout.right(), CANVAS_WIDTH, "world right edge");
}

#[test]
fn test_zone_at() {
    let layout = ZoneLayout::default();
    assert_eq!(layout.zone_at(250.0), Zone::Comfort);
    assert_eq!(layout.zone_at(400.0), Zone::Stretch);
    assert_eq!(layout.zone_at(466.0), Zone::Stretch);
    assert_eq!(layout.zone_at(470.0), Zone::Growth);
    assert_eq!(layout.zone_at(0.0), Zone::Comfort);
    assert_eq!(layout.zone_at(1000.0), Zone::Growth);
    assert_float_eq(layout.center_of(Zone::Stretch), 400.0, "stretch centre");
}

#[test]
fn test_bounds_at_zero_confidence() {
    let layout = ZoneLayout::default();
    let bounds = layout.allowed_bounds(0.0);
    assert_float_eq(bounds.min_x, layout.comfort_min, "min");
    assert_float_eq(bounds.max_x, layout.comfort_max, "max");
    assert_eq!(bounds.lockout, Lockout::Open);
}

#[test]
fn test_bounds_interpolate_below_lockout() {
    let layout = ZoneLayout::default();
    let bounds = layout.allowed_bounds(0.5);

    // Minimum edge interpolates at 1.2x the confidence
    assert_float_eq(bounds.min_x, 200.0 + (400.0 / 3.0) * 0.6, "min");
    assert_float_eq(
        bounds.max_x,
        layout.comfort_max + (layout.growth_max - layout.comfort_max) * 0.5,
        "max",
    );
    assert_eq!(bounds.lockout, Lockout::Open);
}

#[test]
fn test_comfort_lockout_above_half() {
    let layout = ZoneLayout::default();
    for confidence in [0.51, 0.6, 0.7] {
        let bounds = layout.allowed_bounds(confidence);
        assert_float_eq(bounds.min_x, layout.stretch_min, "min");
        assert_eq!(bounds.lockout, Lockout::ComfortLocked);
        assert!(bounds.max_x < layout.growth_max);
    }
}

#[test]
fn test_growth_unlock_above_seventy_percent() {
    let layout = ZoneLayout::default();
    for confidence in [0.71, 0.85, 1.0] {
        let bounds = layout.allowed_bounds(confidence);
        assert_float_eq(bounds.min_x, layout.stretch_min, "min");
        assert_float_eq(bounds.max_x, layout.growth_max, "max");
        assert_eq!(bounds.lockout, Lockout::GrowthUnlocked);
    }
}

#[test]
fn test_bounds_slide_right_with_confidence() {
    let layout = ZoneLayout::default();
    let mut previous = layout.allowed_bounds(0.0);
    for step in 1..=100 {
        let bounds = layout.allowed_bounds(f64::from(step) / 100.0);
        assert!(bounds.min_x <= bounds.max_x);
        assert!(bounds.min_x >= layout.comfort_min);
        assert!(bounds.max_x <= layout.growth_max);
        assert!(bounds.min_x >= previous.min_x);
        assert!(bounds.max_x >= previous.max_x);
        previous = bounds;
    }
}

#[test]
fn test_lockout_follows_instantaneous_confidence() {
    let layout = ZoneLayout::default();
    assert_eq!(layout.allowed_bounds(0.9).lockout, Lockout::GrowthUnlocked);
    // Dropping confidence reopens the earlier zones
    let bounds = layout.allowed_bounds(0.2);
    assert_eq!(bounds.lockout, Lockout::Open);
    assert!(bounds.min_x < layout.stretch_min);
}

#[test]
fn test_bounds_clamp() {
    let bounds = ZoneLayout::default().allowed_bounds(0.8);
    assert_float_eq(bounds.clamp(100.0), bounds.min_x, "clamp low");
    assert_float_eq(bounds.clamp(900.0), bounds.max_x, "clamp high");
    assert!(bounds.contains(450.0));
    assert!(!bounds.contains(250.0));
}
