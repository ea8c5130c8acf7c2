//! Network nodes: scatter interpolation, bounded drift, glow, and the two
//! brightness modes.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::constants::*;

/// Cubic ease-out, used for the cluster -> spread migration.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Which brightness modulation newly spawned particles get. Different site
/// revisions shipped different looks, so this is configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShimmerMode {
    Breath,
    Composite,
}

/// Per-node brightness modulation.
#[derive(Clone, Copy, Debug)]
pub enum Shimmer {
    /// A single slow sinusoid, a gentle breathing pulse.
    Breath { freq: f32, phase: f32 },
    /// Three independent sinusoids multiplied together. The product spends
    /// most of its time near zero and spikes sharply, which reads as flicker
    /// rather than breathing.
    Composite { freqs: [f32; 3], phases: [f32; 3] },
}

impl Shimmer {
    pub fn breath(rng: &mut impl Rng) -> Self {
        Self::Breath {
            freq: NODE_FREQ_MIN + rng.gen::<f32>() * NODE_FREQ_SPAN,
            phase: rng.gen::<f32>() * TAU,
        }
    }

    pub fn composite(rng: &mut impl Rng) -> Self {
        let mut freqs = [0.0f32; 3];
        let mut phases = [0.0f32; 3];
        for i in 0..3 {
            freqs[i] = 0.8 + rng.gen::<f32>() * 2.4;
            phases[i] = rng.gen::<f32>() * TAU;
        }
        Self::Composite { freqs, phases }
    }

    /// Brightness in [0, 1] at the given time (seconds).
    pub fn brightness(&self, time: f32) -> f32 {
        match self {
            Self::Breath { freq, phase } => 0.5 + 0.5 * (time * freq + phase).sin(),
            Self::Composite { freqs, phases } => {
                let mut b = 1.0;
                for i in 0..3 {
                    b *= 0.5 + 0.5 * (time * freqs[i] + phases[i]).sin();
                }
                b
            }
        }
    }
}

/// Where particles start at layout time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnMode {
    /// Already spread over the whole canvas.
    Scattered,
    /// Packed near the canvas center, migrating outward as scatter progress
    /// rises.
    Clustered,
}

#[derive(Clone, Debug)]
pub struct Particle {
    /// Spawn-time origin (cluster center side of the interpolation).
    pub home: Vec2,
    /// Scatter destination.
    pub target: Vec2,
    /// Drift velocity in px/sec, reflected at the bounds.
    pub drift: Vec2,
    /// Accumulated drift on top of the scatter interpolation.
    pub offset: Vec2,
    pub radius: f32,
    /// Decays geometrically toward 0; 1 when freshly fired.
    pub glow: f32,
    pub shimmer: Shimmer,
}

impl Particle {
    pub fn spawn(mode: SpawnMode, shimmer: ShimmerMode, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let target = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let home = match mode {
            SpawnMode::Scattered => target,
            SpawnMode::Clustered => {
                let jitter = Vec2::new(
                    (rng.gen::<f32>() - 0.5) * CLUSTER_JITTER,
                    (rng.gen::<f32>() - 0.5) * CLUSTER_JITTER,
                );
                (bounds * 0.5 + jitter).clamp(Vec2::ZERO, bounds)
            }
        };
        let angle = rng.gen::<f32>() * TAU;
        let speed = DRIFT_SPEED * (0.3 + 0.7 * rng.gen::<f32>());
        Self {
            home,
            target,
            drift: Vec2::from_angle(angle) * speed,
            offset: Vec2::ZERO,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            glow: 0.0,
            shimmer: match shimmer {
                ShimmerMode::Breath => Shimmer::breath(rng),
                ShimmerMode::Composite => Shimmer::composite(rng),
            },
        }
    }

    /// Current position for the given scatter progress (already eased).
    pub fn position(&self, scatter: f32) -> Vec2 {
        self.home.lerp(self.target, scatter) + self.offset
    }

    pub fn fire(&mut self) {
        self.glow = 1.0;
    }

    /// One frame: accumulate drift, reflect off the bounds, decay glow.
    pub fn advance(&mut self, dt: f32, scatter: f32, bounds: Vec2, glow_decay: f32) {
        self.offset += self.drift * dt;

        let pos = self.position(scatter);
        if pos.x < 0.0 {
            self.offset.x -= pos.x;
            self.drift.x = self.drift.x.abs();
        } else if pos.x > bounds.x {
            self.offset.x -= pos.x - bounds.x;
            self.drift.x = -self.drift.x.abs();
        }
        if pos.y < 0.0 {
            self.offset.y -= pos.y;
            self.drift.y = self.drift.y.abs();
        } else if pos.y > bounds.y {
            self.offset.y -= pos.y - bounds.y;
            self.drift.y = -self.drift.y.abs();
        }

        self.glow *= glow_decay;
        if self.glow < GLOW_FLOOR {
            self.glow = 0.0;
        }
    }
}
