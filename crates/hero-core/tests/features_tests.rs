// Host-side tests for image feature sampling and layout fitting.

use glam::Vec2;
use hero_core::{cover_fit, scan_features, FeatureError, Rect, SamplerConfig, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// All-keep sampler so scans are position-deterministic.
fn keep_all() -> SamplerConfig {
    SamplerConfig {
        node_keep: 1.0,
        path_keep: 1.0,
        ..SamplerConfig::default()
    }
}

fn rgba_image(width: u32, height: u32, paint: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&paint(x, y));
        }
    }
    data
}

#[test]
fn bright_pixels_become_nodes_and_mid_pixels_paths() {
    // 8x8: one white pixel on the scan grid, one gray one, black elsewhere.
    let data = rgba_image(8, 8, |x, y| match (x, y) {
        (0, 0) => [255, 255, 255, 255],
        (4, 4) => [100, 100, 100, 255],
        _ => [0, 0, 0, 255],
    });
    let mut rng = StdRng::seed_from_u64(1);
    let set = scan_features(&data, 8, 8, &keep_all(), &mut rng).unwrap();

    assert_eq!(set.nodes.len(), 1);
    assert_eq!(set.nodes[0].pos, Vec2::ZERO);
    assert_eq!(set.paths.len(), 1);
    assert_eq!(set.paths[0], Vec2::new(4.0, 4.0));
}

#[test]
fn off_grid_pixels_are_skipped() {
    // Bright pixel at (1, 1) sits between scan rows with step 4.
    let data = rgba_image(8, 8, |x, y| {
        if (x, y) == (1, 1) {
            [255, 255, 255, 255]
        } else {
            [0, 0, 0, 255]
        }
    });
    let mut rng = StdRng::seed_from_u64(1);
    let set = scan_features(&data, 8, 8, &keep_all(), &mut rng).unwrap();
    assert!(set.is_empty());
}

#[test]
fn dark_image_yields_no_features() {
    let data = rgba_image(32, 32, |_, _| [10, 10, 10, 255]);
    let mut rng = StdRng::seed_from_u64(2);
    let set = scan_features(&data, 32, 32, &keep_all(), &mut rng).unwrap();
    assert!(set.is_empty());
}

#[test]
fn node_rhythms_land_in_the_configured_band() {
    let data = rgba_image(64, 64, |_, _| [255, 255, 255, 255]);
    let mut rng = StdRng::seed_from_u64(3);
    let set = scan_features(&data, 64, 64, &keep_all(), &mut rng).unwrap();
    assert!(!set.nodes.is_empty());
    for node in &set.nodes {
        assert!(
            node.freq >= 2.0 && node.freq <= 7.0,
            "breathing freq {} out of band",
            node.freq
        );
        assert!(node.phase >= 0.0 && node.phase <= std::f32::consts::TAU);
    }
}

#[test]
fn subsampling_bounds_the_counts() {
    let data = rgba_image(64, 64, |_, _| [255, 255, 255, 255]);
    let config = SamplerConfig {
        node_keep: 0.15,
        ..SamplerConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(4);
    let set = scan_features(&data, 64, 64, &config, &mut rng).unwrap();
    // 16x16 scan grid, 15% keep: well under the full candidate count.
    assert!(!set.nodes.is_empty());
    assert!(set.nodes.len() < 128, "kept {} of 256", set.nodes.len());
}

#[test]
fn wrong_buffer_size_is_rejected() {
    let data = vec![0u8; 100];
    let mut rng = StdRng::seed_from_u64(5);
    let err = scan_features(&data, 8, 8, &keep_all(), &mut rng).unwrap_err();
    match err {
        FeatureError::BufferSize { expected, got, .. } => {
            assert_eq!(expected, 8 * 8 * 4);
            assert_eq!(got, 100);
        }
    }
}

#[test]
fn cover_fit_fills_and_centers() {
    // Wide image into a square view: height rules, width overflows evenly.
    let rect = cover_fit(Vec2::new(100.0, 50.0), Vec2::new(200.0, 200.0));
    assert_eq!(rect.size, Vec2::new(400.0, 200.0));
    assert_eq!(rect.origin, Vec2::new(-100.0, 0.0));

    // Matching aspect is a plain fill.
    let exact = cover_fit(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
    assert_eq!(exact.size, Vec2::new(800.0, 600.0));
    assert_eq!(exact.origin, Vec2::ZERO);
}

#[test]
fn cover_fit_rejects_degenerate_images() {
    assert_eq!(cover_fit(Vec2::ZERO, Vec2::new(800.0, 600.0)), Rect::ZERO);
}

#[test]
fn viewport_backing_size_respects_dpr_and_floors_at_one() {
    let viewport = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(viewport.backing_size(), (1600, 1200));
    assert!(!viewport.is_degenerate());

    let collapsed = Viewport::new(0.0, 600.0, 2.0);
    assert_eq!(collapsed.backing_size(), (1, 1200));
    assert!(collapsed.is_degenerate());

    let bad_dpr = Viewport::new(100.0, 100.0, 0.0);
    assert_eq!(bad_dpr.dpr, 1.0);
}
