// Host-side tests for the progress -> style phase table.

use hero_core::{compute_styles, FadeRange, PhaseThresholds};

fn sweep(count: usize) -> impl Iterator<Item = f32> {
    (0..=count).map(move |i| i as f32 / count as f32)
}

#[test]
fn fade_range_ramps_and_clamps() {
    let range = FadeRange::new(0.25, 0.10);
    assert_eq!(range.rise(0.0), 0.0);
    assert_eq!(range.rise(0.25), 0.0);
    assert!((range.rise(0.30) - 0.5).abs() < 1e-6);
    assert_eq!(range.rise(0.35), 1.0);
    assert_eq!(range.rise(1.0), 1.0);
    assert!((range.fall(0.30) - 0.5).abs() < 1e-6);
}

#[test]
fn endpoints_match_the_scene_invariant() {
    let thresholds = PhaseThresholds::default();

    // Top of the page: logo and scroll hint only.
    let top = compute_styles(0.0, &thresholds);
    assert_eq!(top.logo.opacity, 1.0);
    assert_eq!(top.scroll_hint.opacity, 1.0);
    assert_eq!(top.title.opacity, 0.0);
    assert_eq!(top.subtitle.opacity, 0.0);
    assert_eq!(top.cta.opacity, 0.0);
    assert_eq!(top.nav.opacity, 0.0);
    assert_eq!(top.network_alpha, 0.0);

    // Fully scrolled: the reveal set, logo and hint gone.
    let bottom = compute_styles(1.0, &thresholds);
    assert_eq!(bottom.logo.opacity, 0.0);
    assert_eq!(bottom.scroll_hint.opacity, 0.0);
    assert_eq!(bottom.title.opacity, 1.0);
    assert_eq!(bottom.subtitle.opacity, 1.0);
    assert_eq!(bottom.cta.opacity, 1.0);
    assert_eq!(bottom.nav.opacity, 1.0);
    assert_eq!(bottom.network_alpha, 1.0);
}

#[test]
fn every_opacity_stays_in_unit_range_and_is_monotonic() {
    let thresholds = PhaseThresholds::default();
    let mut prev: Option<Vec<f32>> = None;
    for p in sweep(2000) {
        let s = compute_styles(p, &thresholds);
        // Rising targets first, then the two falling ones negated, so a
        // single non-decreasing check covers all of them.
        let values = vec![
            s.title.opacity,
            s.subtitle.opacity,
            s.cta.opacity,
            s.nav.opacity,
            s.small_logo.opacity,
            s.network_alpha,
            -s.logo.opacity,
            -s.scroll_hint.opacity,
        ];
        for v in &values {
            assert!(v.abs() <= 1.0, "opacity {v} out of range at progress {p}");
        }
        if let Some(prev) = &prev {
            for (a, b) in prev.iter().zip(&values) {
                assert!(b >= a, "non-monotonic step at progress {p}: {a} -> {b}");
            }
        }
        prev = Some(values);
    }
}

#[test]
fn opacities_are_continuous() {
    let thresholds = PhaseThresholds::default();
    // Steepest ramp is the 0.05-wide logo/hint fade: slope 20.
    let dp = 0.0005;
    let max_step = 20.0 * dp + 1e-4;
    let mut p = 0.0;
    while p < 1.0 {
        let a = compute_styles(p, &thresholds);
        let b = compute_styles(p + dp, &thresholds);
        for (x, y, name) in [
            (a.logo.opacity, b.logo.opacity, "logo"),
            (a.scroll_hint.opacity, b.scroll_hint.opacity, "hint"),
            (a.title.opacity, b.title.opacity, "title"),
            (a.subtitle.opacity, b.subtitle.opacity, "subtitle"),
            (a.cta.opacity, b.cta.opacity, "cta"),
            (a.nav.opacity, b.nav.opacity, "nav"),
            (a.network_alpha, b.network_alpha, "network"),
        ] {
            assert!(
                (y - x).abs() <= max_step,
                "{name} jumps by {} at progress {p}",
                (y - x).abs()
            );
        }
        p += dp;
    }
}

#[test]
fn pointer_events_gate_on_visibility() {
    let thresholds = PhaseThresholds::default();

    let top = compute_styles(0.0, &thresholds);
    assert!(top.logo.interactive);
    assert!(!top.nav.interactive);
    assert!(!top.cta.interactive);

    // Logo half-faded: below its 0.5 cutoff it must stop catching clicks.
    let mid = compute_styles(0.14, &thresholds);
    assert!(mid.logo.opacity < 0.5);
    assert!(!mid.logo.interactive);

    let bottom = compute_styles(1.0, &thresholds);
    assert!(!bottom.logo.interactive);
    assert!(bottom.nav.interactive);
    assert!(bottom.cta.interactive);
}

#[test]
fn slide_offsets_settle_at_zero_reveal() {
    let thresholds = PhaseThresholds::default();
    let bottom = compute_styles(1.0, &thresholds);
    assert_eq!(bottom.title.translate_y, 0.0);
    assert_eq!(bottom.cta.translate_y, 0.0);
    // Subtitle and small logo carry fixed offsets by design.
    assert_eq!(bottom.subtitle.translate_y, 50.0);
    assert_eq!(bottom.small_logo.translate_y, -60.0);

    // Before their reveal they sit displaced.
    let top = compute_styles(0.0, &thresholds);
    assert_eq!(top.title.translate_y, 30.0);
}

#[test]
fn emblem_zoom_follows_progress() {
    let thresholds = PhaseThresholds::default();
    assert_eq!(compute_styles(0.0, &thresholds).logo.scale, 1.0);
    assert_eq!(compute_styles(1.0, &thresholds).logo.scale, 1.5);
    let mid = compute_styles(0.5, &thresholds).logo.scale;
    assert!((mid - 1.25).abs() < 1e-6);
}
