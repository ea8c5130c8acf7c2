//! The engine facade: one object owning every piece of mutable animation
//! state for a page view, constructed once and stepped from the frame loop.

use rand::prelude::*;

use crate::constants::{NETWORK_VISIBLE_EPS, SCATTER_RANGE};
use crate::features::{scan_features, FeatureError, FeatureSet, SamplerConfig};
use crate::flicker::{FlickerConfig, FlickerField};
use crate::layout::Viewport;
use crate::network::{NetworkConfig, NetworkSim};
use crate::particle::ease_out_cubic;
use crate::phase::{compute_styles, FadeRange, FrameStyles, PhaseThresholds};
use crate::progress::{scroll_progress, LatchConfig, ScrollTracker};

#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    /// Base seed for every random subsystem. Defaults to entropy; tests pin
    /// it for reproducible layouts and cascades.
    pub seed: Option<u64>,
    pub latch: LatchConfig,
    pub thresholds: PhaseThresholds,
    pub network: NetworkConfig,
    pub flicker: FlickerConfig,
    pub sampler: SamplerConfig,
    pub scatter: Option<FadeRange>,
}

pub struct HeroEngine {
    tracker: ScrollTracker,
    thresholds: PhaseThresholds,
    pub network: NetworkSim,
    pub flickers: FlickerField,
    features: FeatureSet,
    viewport: Viewport,
    scatter_range: FadeRange,
    sampler: SamplerConfig,
    sampler_rng: StdRng,
    clock: f32,
}

/// Derive per-subsystem seeds so streams stay independent.
fn sub_seed(base: u64, stream: u64) -> u64 {
    base ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl HeroEngine {
    pub fn new(config: EngineConfig) -> Self {
        let base = config.seed.unwrap_or_else(rand::random);
        Self {
            tracker: ScrollTracker::new(config.latch),
            thresholds: config.thresholds,
            network: NetworkSim::new(config.network, sub_seed(base, 1)),
            flickers: FlickerField::new(config.flicker, sub_seed(base, 2)),
            features: FeatureSet::default(),
            viewport: Viewport::default(),
            scatter_range: config.scatter.unwrap_or(SCATTER_RANGE.into()),
            sampler: config.sampler,
            sampler_rng: StdRng::seed_from_u64(sub_seed(base, 3)),
            clock: 0.0,
        }
    }

    pub fn on_scroll(&mut self, scroll_top: f64, drive_height: f64, viewport_height: f64) {
        self.tracker
            .set_raw(scroll_progress(scroll_top, drive_height, viewport_height));
    }

    pub fn progress(&self) -> f32 {
        self.tracker.effective()
    }

    pub fn raw_progress(&self) -> f32 {
        self.tracker.raw()
    }

    pub fn is_locked(&self) -> bool {
        self.tracker.is_locked()
    }

    /// The reset gesture: unlatch and return to the top.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Relayout. Prior particle coordinates and sampled features are stale at
    /// the new size; the caller rescans pixels once the layout settles.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.network.resize(viewport.css.x, viewport.css.y);
        self.features = FeatureSet::default();
        self.flickers.clear();
    }

    /// Swap in features scanned from the image at the current layout.
    pub fn scan_image(
        &mut self,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(), FeatureError> {
        if self.viewport.is_degenerate() {
            log::debug!("[engine] deferring feature scan until layout has a size");
            self.features = FeatureSet::default();
            return Ok(());
        }
        self.features = scan_features(rgba, width, height, &self.sampler, &mut self.sampler_rng)?;
        Ok(())
    }

    pub fn clear_features(&mut self) {
        self.features = FeatureSet::default();
        self.flickers.clear();
    }

    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Elapsed animation time in seconds, the shimmer time base.
    pub fn time(&self) -> f32 {
        self.clock
    }

    /// One frame: advance whichever visual source is active and return the
    /// style values for the DOM-apply step.
    pub fn frame(&mut self, dt: f32) -> FrameStyles {
        self.clock += dt;
        let progress = self.tracker.effective();
        let styles = compute_styles(progress, &self.thresholds);

        self.network
            .set_scatter(ease_out_cubic(self.scatter_range.rise(progress)));
        if styles.network_alpha > NETWORK_VISIBLE_EPS {
            if self.features.is_empty() {
                self.network.step(dt);
            } else {
                self.flickers.step(&self.features);
            }
        }
        styles
    }
}
