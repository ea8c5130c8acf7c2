//! The particle/connection/pulse simulator.
//!
//! All mutable animation state lives here, behind one struct, stepped once per
//! animation frame. Cascading fires go through an explicit queue keyed by
//! frame count instead of delayed callbacks, so the whole cascade is
//! deterministic under a fixed seed.

use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::*;
use crate::particle::{Particle, ShimmerMode, SpawnMode};

/// An undirected edge between two particles closer than the threshold.
/// Stored with `a < b`; `dist` is the distance at rebuild time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub dist: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PulseStyle {
    /// A moving spark sampled along a curved path as life decays; the
    /// destination fires on arrival.
    Trail,
    /// The whole path flashes at once and fades; the destination fires at
    /// spawn.
    Flash,
}

#[derive(Clone, Debug)]
pub struct Pulse {
    pub from: usize,
    pub to: usize,
    /// 1 at spawn, decays by `decay` each frame, dead at <= 0.
    pub life: f32,
    pub decay: f32,
    pub style: PulseStyle,
    /// Sideways bow of the travel path, relative to the segment midpoint.
    pub bend: Vec2,
}

impl Pulse {
    /// Sample the spark position along the quadratic path for the current
    /// life. Only meaningful for [`PulseStyle::Trail`].
    pub fn trail_pos(&self, from: Vec2, to: Vec2) -> Vec2 {
        let t = (1.0 - self.life).clamp(0.0, 1.0);
        let mid = (from + to) * 0.5 + self.bend;
        let a = from.lerp(mid, t);
        let b = mid.lerp(to, t);
        a.lerp(b, t)
    }
}

/// A fire scheduled for a future frame by a cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingFire {
    pub due_frame: u64,
    pub particle: usize,
}

#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub particle_count: usize,
    pub spawn: SpawnMode,
    pub shimmer: ShimmerMode,
    pub connection_distance: f32,
    pub rebuild_interval: u64,
    pub glow_decay: f32,
    pub fire_probability: f32,
    pub max_pulses_per_fire: usize,
    pub pulse_style: PulseStyle,
    pub pulse_decay: f32,
    pub pulse_cap: usize,
    pub cascade_probability: f32,
    pub cascade_delay_frames: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            spawn: SpawnMode::Clustered,
            shimmer: ShimmerMode::Composite,
            connection_distance: CONNECTION_DISTANCE,
            rebuild_interval: CONNECTION_REBUILD_INTERVAL,
            glow_decay: GLOW_DECAY,
            fire_probability: FIRE_PROBABILITY,
            max_pulses_per_fire: MAX_PULSES_PER_FIRE,
            pulse_style: PulseStyle::Trail,
            pulse_decay: PULSE_DECAY,
            pulse_cap: PULSE_CAP,
            cascade_probability: CASCADE_PROBABILITY,
            cascade_delay_frames: CASCADE_DELAY_FRAMES,
        }
    }
}

pub struct NetworkSim {
    pub particles: Vec<Particle>,
    pub connections: Vec<Connection>,
    pub pulses: Vec<Pulse>,
    pending: Vec<PendingFire>,
    adjacency: FnvHashMap<usize, SmallVec<[usize; 8]>>,
    bounds: Vec2,
    frame: u64,
    scatter: f32,
    rng: StdRng,
    config: NetworkConfig,
}

impl NetworkSim {
    pub fn new(mut config: NetworkConfig, seed: u64) -> Self {
        config.rebuild_interval = config.rebuild_interval.max(1);
        config.pulse_cap = config.pulse_cap.max(1);
        Self {
            particles: Vec::new(),
            connections: Vec::new(),
            pulses: Vec::new(),
            pending: Vec::new(),
            adjacency: FnvHashMap::default(),
            bounds: Vec2::ZERO,
            frame: 0,
            scatter: 0.0,
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn scatter(&self) -> f32 {
        self.scatter
    }

    pub fn pending_fires(&self) -> &[PendingFire] {
        &self.pending
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Current position of a particle under the active scatter progress.
    pub fn position(&self, index: usize) -> Vec2 {
        self.particles[index].position(self.scatter)
    }

    /// Eased scatter progress, set by the engine from scroll progress.
    pub fn set_scatter(&mut self, scatter: f32) {
        self.scatter = scatter.clamp(0.0, 1.0);
    }

    /// Relayout: regenerate every particle inside the new bounds and rebuild
    /// the connection set. Live pulses and queued cascades reference stale
    /// coordinates, so both are dropped.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.pulses.clear();
        self.pending.clear();
        if width < 1.0 || height < 1.0 {
            self.particles.clear();
            self.connections.clear();
            self.adjacency.clear();
            return;
        }
        self.particles = (0..self.config.particle_count)
            .map(|_| {
                Particle::spawn(
                    self.config.spawn,
                    self.config.shimmer,
                    self.bounds,
                    &mut self.rng,
                )
            })
            .collect();
        self.rebuild_connections();
        log::debug!(
            "[network] relaid {} particles over {:.0}x{:.0}, {} connections",
            self.particles.len(),
            width,
            height,
            self.connections.len()
        );
    }

    /// One simulation frame. Position and glow updates land before pulses
    /// advance, so a frame's draw sees self-consistent state.
    pub fn step(&mut self, dt: f32) {
        if self.particles.is_empty() {
            return;
        }
        self.frame += 1;

        for particle in &mut self.particles {
            particle.advance(dt, self.scatter, self.bounds, self.config.glow_decay);
        }

        if self.frame % self.config.rebuild_interval == 0 {
            self.rebuild_connections();
        }

        // Due cascades first, then the spontaneous fire roll.
        let frame = self.frame;
        let mut due: SmallVec<[usize; 4]> = SmallVec::new();
        self.pending.retain(|f| {
            if f.due_frame <= frame {
                due.push(f.particle);
                false
            } else {
                true
            }
        });
        for index in due {
            self.fire(index);
        }
        if self.rng.gen::<f32>() < self.config.fire_probability {
            let index = self.rng.gen_range(0..self.particles.len());
            self.fire(index);
        }

        let mut arrivals: SmallVec<[usize; 8]> = SmallVec::new();
        for pulse in &mut self.pulses {
            pulse.life -= pulse.decay;
            if pulse.style == PulseStyle::Trail && pulse.life <= 0.0 {
                arrivals.push(pulse.to);
            }
        }
        for to in arrivals {
            self.arrive(to);
        }

        self.pulses.retain(|p| p.life > 0.0);
    }

    /// Set a particle's glow and launch pulses toward a few of its neighbors.
    pub fn fire(&mut self, index: usize) {
        let Some(particle) = self.particles.get_mut(index) else {
            return;
        };
        particle.fire();

        let neighbors: SmallVec<[usize; 8]> =
            self.adjacency.get(&index).cloned().unwrap_or_default();
        if neighbors.is_empty() {
            return;
        }
        let count = self.config.max_pulses_per_fire.min(neighbors.len());
        let picks: SmallVec<[usize; 4]> = neighbors
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();
        for to in picks {
            self.spawn_pulse(index, to);
        }
    }

    fn spawn_pulse(&mut self, from: usize, to: usize) {
        // Oldest-first prune keeps the live set at the cap.
        while self.pulses.len() >= self.config.pulse_cap {
            self.pulses.remove(0);
        }
        let a = self.position(from);
        let b = self.position(to);
        let across = (b - a).perp().normalize_or_zero();
        let bow = (self.rng.gen::<f32>() - 0.5) * 0.5 * a.distance(b);
        let decay = self.config.pulse_decay * (0.75 + 0.5 * self.rng.gen::<f32>());
        let style = self.config.pulse_style;
        self.pulses.push(Pulse {
            from,
            to,
            life: 1.0,
            decay,
            style,
            bend: across * bow,
        });
        if style == PulseStyle::Flash {
            self.arrive(to);
        }
    }

    /// A pulse reached `to`: light it up, maybe queue a cascade.
    fn arrive(&mut self, to: usize) {
        if let Some(particle) = self.particles.get_mut(to) {
            particle.fire();
        }
        if self.rng.gen::<f32>() < self.config.cascade_probability {
            self.pending.push(PendingFire {
                due_frame: self.frame + self.config.cascade_delay_frames,
                particle: to,
            });
        }
    }

    fn rebuild_connections(&mut self) {
        self.connections.clear();
        self.adjacency.clear();
        let threshold = self.config.connection_distance;
        for i in 0..self.particles.len() {
            let pi = self.particles[i].position(self.scatter);
            for j in (i + 1)..self.particles.len() {
                let dist = pi.distance(self.particles[j].position(self.scatter));
                if dist < threshold {
                    self.connections.push(Connection { a: i, b: j, dist });
                    self.adjacency.entry(i).or_default().push(j);
                    self.adjacency.entry(j).or_default().push(i);
                }
            }
        }
    }
}
