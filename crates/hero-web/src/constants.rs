// Web-side tuning: asset paths, timers, and compositor colors.

/// The network's visual shape source; the engine runs fine without it.
pub const NETWORK_IMAGE_URL: &str = "assets/argoneural.png";

/// Resize relayout waits for this quiet period, since feature sampling does a
/// full pixel scan.
pub const RESIZE_DEBOUNCE_MS: i32 = 120;

// Base image layer opacity at full network visibility
pub const IMAGE_BASE_ALPHA: f64 = 0.2;

// Procedural palette (drawn under `lighter`, so these stay dim)
pub const CONNECTION_RGB: &str = "120, 180, 255";
pub const PARTICLE_RGB: &str = "170, 215, 255";
pub const PULSE_RGB: &str = "235, 245, 255";
pub const CONNECTION_ALPHA: f32 = 0.35;
pub const PARTICLE_BASE_ALPHA: f32 = 0.25;
pub const PARTICLE_SHIMMER_ALPHA: f32 = 0.55;
pub const GLOW_HALO_SCALE: f32 = 5.0;
pub const NODE_SHIMMER_RADIUS: f64 = 1.6;
