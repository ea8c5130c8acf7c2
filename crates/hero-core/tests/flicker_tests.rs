// Host-side tests for the image-variant flicker system.

use glam::Vec2;
use hero_core::{FeatureSet, FlickerConfig, FlickerField, FlickerKind, NodePoint};

fn some_features() -> FeatureSet {
    FeatureSet {
        nodes: (0..10)
            .map(|i| NodePoint {
                pos: Vec2::new(i as f32 * 10.0, 50.0),
                freq: 3.0,
                phase: 0.0,
            })
            .collect(),
        paths: (0..10).map(|i| Vec2::new(50.0, i as f32 * 10.0)).collect(),
    }
}

fn always_spawn(cap: usize) -> FlickerConfig {
    FlickerConfig {
        cap,
        spawn_probability: 1.0,
        ..FlickerConfig::default()
    }
}

#[test]
fn empty_features_never_spawn() {
    let mut field = FlickerField::new(always_spawn(30), 1);
    let empty = FeatureSet::default();
    for _ in 0..60 {
        field.step(&empty);
    }
    assert!(field.flickers.is_empty(), "fail-soft: nothing to light up");
}

#[test]
fn spawns_respect_the_cap() {
    let mut field = FlickerField::new(always_spawn(5), 2);
    let features = some_features();
    for _ in 0..100 {
        field.step(&features);
        assert!(field.flickers.len() <= 5, "cap breached");
    }
    assert!(!field.flickers.is_empty());
}

#[test]
fn both_kinds_spawn_and_sample_their_own_sets() {
    let mut field = FlickerField::new(always_spawn(30), 3);
    let features = some_features();
    for _ in 0..30 {
        field.step(&features);
    }
    let nodes = field
        .flickers
        .iter()
        .filter(|f| f.kind == FlickerKind::Node)
        .count();
    let paths = field.flickers.len() - nodes;
    assert!(nodes > 0 && paths > 0);
    for flicker in &field.flickers {
        match flicker.kind {
            FlickerKind::Node => assert_eq!(flicker.pos.y, 50.0),
            FlickerKind::Path => assert_eq!(flicker.pos.x, 50.0),
        }
        assert!(flicker.life > 0.0 && flicker.life <= 1.0);
        assert!(flicker.radius > 0.0);
    }
}

#[test]
fn lives_decay_and_dead_flickers_drop_out() {
    let mut field = FlickerField::new(always_spawn(10), 4);
    let features = some_features();
    field.step(&features);
    assert!(!field.flickers.is_empty());

    // Starve the spawner and let everything burn down. The slowest decay is
    // a node flash at 0.05 per frame: 20 frames to zero.
    field.clear();
    field.step(&features);
    let empty = FeatureSet::default();
    for _ in 0..25 {
        field.step(&empty);
    }
    assert!(field.flickers.is_empty(), "all flickers must burn out");
}

#[test]
fn path_blinks_fade_faster_than_node_flashes() {
    // Decay ranges must not overlap the wrong way round: the fastest node
    // flash still outlives the slowest path blink budget.
    let config = FlickerConfig::default();
    let slowest_path = config.path_decay.0;
    let fastest_node = config.node_decay.0 + config.node_decay.1;
    assert!(slowest_path > fastest_node);
}
