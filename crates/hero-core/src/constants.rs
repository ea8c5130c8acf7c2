// Tuning constants for the hero animation. The shipped site went through
// several revisions of this engine with different numbers; everything here is
// a default, overridable through the config structs.

// Scroll latch: commit a little after the motto reveal at 0.45
pub const LOCK_COMMIT_THRESHOLD: f32 = 0.6;

// Phase table: (start, span) sub-ranges of scroll progress per target
pub const HINT_FADE: (f32, f32) = (0.0, 0.05);
pub const NETWORK_REVEAL: (f32, f32) = (0.05, 0.10);
pub const LOGO_FADE: (f32, f32) = (0.10, 0.05);
pub const NAV_REVEAL: (f32, f32) = (0.15, 0.10);
pub const TITLE_REVEAL: (f32, f32) = (0.25, 0.10);
pub const SMALL_LOGO_REVEAL: (f32, f32) = (0.35, 0.10);
pub const SUBTITLE_REVEAL: (f32, f32) = (0.45, 0.10);
pub const CTA_REVEAL: (f32, f32) = (0.85, 0.15);

// Emblem zoom across the whole scroll range
pub const LOGO_ZOOM_SPAN: f32 = 0.5;

// Slide-in offsets (CSS px)
pub const TITLE_SLIDE_PX: f32 = 30.0;
pub const SMALL_LOGO_SLIDE_PX: f32 = 20.0;
pub const SMALL_LOGO_RAISE_PX: f32 = 60.0;
pub const SUBTITLE_SLIDE_PX: f32 = 20.0;
pub const SUBTITLE_DROP_PX: f32 = 50.0;
pub const CTA_SLIDE_PX: f32 = 20.0;

// Pointer-event gates: elements below these opacities must not catch clicks
pub const LOGO_POINTER_CUTOFF: f32 = 0.5;
pub const POINTER_CUTOFF: f32 = 0.1;

// Procedural network
pub const PARTICLE_COUNT: usize = 90;
pub const PARTICLE_RADIUS_MIN: f32 = 1.5;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const DRIFT_SPEED: f32 = 12.0; // px/sec before per-particle scaling
pub const CONNECTION_DISTANCE: f32 = 140.0;
pub const CONNECTION_REBUILD_INTERVAL: u64 = 30; // frames
pub const GLOW_DECAY: f32 = 0.92; // per frame, geometric
pub const GLOW_FLOOR: f32 = 0.01;
pub const FIRE_PROBABILITY: f32 = 0.03; // per frame
pub const MAX_PULSES_PER_FIRE: usize = 3;
pub const PULSE_DECAY: f32 = 0.04; // per frame, jittered per pulse
pub const PULSE_CAP: usize = 30;
pub const CASCADE_PROBABILITY: f32 = 0.35;
pub const CASCADE_DELAY_FRAMES: u64 = 6;

// Scatter: sub-range of progress driving cluster -> spread migration
pub const SCATTER_RANGE: (f32, f32) = (0.05, 0.25);
pub const CLUSTER_JITTER: f32 = 24.0; // px around the cluster center

// Image feature sampling (matches the shipped scan)
pub const SAMPLE_STEP: u32 = 4;
pub const NODE_LUMA: f32 = 180.0;
pub const PATH_LUMA: f32 = 40.0;
pub const NODE_KEEP: f32 = 0.15;
pub const PATH_KEEP: f32 = 0.05;
pub const NODE_FREQ_MIN: f32 = 2.0; // Hz
pub const NODE_FREQ_SPAN: f32 = 5.0;

// Image-variant flickers
pub const FLICKER_CAP: usize = 30;
pub const FLICKER_SPAWN_PROBABILITY: f32 = 0.4; // per kind, per frame
pub const NODE_FLICKER_RADIUS: (f32, f32) = (20.0, 40.0);
pub const NODE_FLICKER_DECAY: (f32, f32) = (0.05, 0.05);
pub const PATH_FLICKER_RADIUS: (f32, f32) = (40.0, 60.0);
pub const PATH_FLICKER_DECAY: (f32, f32) = (0.15, 0.20);

// Network is treated as invisible below this alpha
pub const NETWORK_VISIBLE_EPS: f32 = 0.01;
