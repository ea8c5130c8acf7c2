//! Transient highlights for the image-driven variant: short node flashes and
//! wider, faster path blinks, clipped to the image shape at composite time.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::features::FeatureSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlickerKind {
    Node,
    Path,
}

#[derive(Clone, Copy, Debug)]
pub struct Flicker {
    pub pos: Vec2,
    pub radius: f32,
    /// 1 at spawn, dead at <= 0.
    pub life: f32,
    pub decay: f32,
    pub kind: FlickerKind,
}

#[derive(Clone, Debug)]
pub struct FlickerConfig {
    pub cap: usize,
    /// Per kind, per frame.
    pub spawn_probability: f32,
    pub node_radius: (f32, f32),
    pub node_decay: (f32, f32),
    pub path_radius: (f32, f32),
    pub path_decay: (f32, f32),
}

impl Default for FlickerConfig {
    fn default() -> Self {
        Self {
            cap: FLICKER_CAP,
            spawn_probability: FLICKER_SPAWN_PROBABILITY,
            node_radius: NODE_FLICKER_RADIUS,
            node_decay: NODE_FLICKER_DECAY,
            path_radius: PATH_FLICKER_RADIUS,
            path_decay: PATH_FLICKER_DECAY,
        }
    }
}

/// Live flickers plus their spawn logic. Empty feature sets simply never
/// spawn anything, which is the whole fail-soft story for a missing image.
pub struct FlickerField {
    pub flickers: Vec<Flicker>,
    rng: StdRng,
    config: FlickerConfig,
}

impl FlickerField {
    pub fn new(config: FlickerConfig, seed: u64) -> Self {
        Self {
            flickers: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn clear(&mut self) {
        self.flickers.clear();
    }

    /// One frame: roll for new flickers under the cap, then decay and prune.
    pub fn step(&mut self, features: &FeatureSet) {
        if self.flickers.len() < self.config.cap {
            if self.rng.gen::<f32>() < self.config.spawn_probability {
                self.spawn(FlickerKind::Node, features);
            }
            if self.flickers.len() < self.config.cap
                && self.rng.gen::<f32>() < self.config.spawn_probability
            {
                self.spawn(FlickerKind::Path, features);
            }
        }

        for flicker in &mut self.flickers {
            flicker.life -= flicker.decay;
        }
        self.flickers.retain(|f| f.life > 0.0);
    }

    fn spawn(&mut self, kind: FlickerKind, features: &FeatureSet) {
        let (pos, radius, decay) = match kind {
            FlickerKind::Node => {
                let Some(node) = features.nodes.choose(&mut self.rng) else {
                    return;
                };
                (
                    node.pos,
                    range_sample(self.config.node_radius, &mut self.rng),
                    range_sample(self.config.node_decay, &mut self.rng),
                )
            }
            FlickerKind::Path => {
                let Some(pos) = features.paths.choose(&mut self.rng) else {
                    return;
                };
                (
                    *pos,
                    range_sample(self.config.path_radius, &mut self.rng),
                    range_sample(self.config.path_decay, &mut self.rng),
                )
            }
        };
        self.flickers.push(Flicker {
            pos,
            radius,
            life: 1.0,
            decay,
            kind,
        });
    }
}

fn range_sample((base, span): (f32, f32), rng: &mut impl Rng) -> f32 {
    base + rng.gen::<f32>() * span
}
