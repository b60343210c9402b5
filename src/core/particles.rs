use super::config::CarConfig;
use super::constants::*;
use super::geometry::heading_vec;
use super::motion::MotionState;
use super::steering::StepOutcome;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::FRAC_PI_2;

/// A trail mark to be drawn by the sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub position: Vec2,
    pub rotation: f32,  // radians
    pub intensity: f32, // [0, 1]
    /// Starting opacity; the drift boost can push it all the way to 1.
    pub opacity: f32,
}

/// Everything the emitter wants spawned this step.
#[derive(Clone, Debug, Default)]
pub struct Emissions {
    pub trail: SmallVec<[TrailParticle; 2]>,
    pub exhaust: bool,
}

impl Emissions {
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty() && !self.exhaust
    }
}

/// Turning while fast. Only changes how the trail looks.
#[inline]
pub fn is_drifting(cfg: &CarConfig, speed: f32, heading_error: f32) -> bool {
    heading_error.abs() > TURNING_EPSILON && speed > cfg.max_speed * DRIFT_SPEED_FRACTION
}

/// Seconds between trail pairs at this speed.
#[inline]
pub fn trail_interval(cfg: &CarConfig, speed: f32, drifting: bool) -> f32 {
    let base = if drifting {
        cfg.drift_particle_interval
    } else {
        cfg.particle_base_interval
    };
    let speed_factor =
        (speed / TRAIL_SPEED_REF).clamp(TRAIL_SPEED_FACTOR_MIN, TRAIL_SPEED_FACTOR_MAX);
    base / speed_factor
}

pub struct ParticleEmitter {
    trail_timer: f32,
    since_exhaust: f32,
    rng: StdRng,
}

impl ParticleEmitter {
    pub fn new(seed: u64) -> Self {
        Self {
            trail_timer: 0.0,
            since_exhaust: f32::INFINITY,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn emit(&mut self, cfg: &CarConfig, state: &MotionState, step: &StepOutcome) -> Emissions {
        let mut out = Emissions::default();
        if step.dt <= 0.0 {
            return out;
        }

        if state.speed > TRAIL_MIN_SPEED {
            let drifting = is_drifting(cfg, state.speed, step.heading_error);
            self.trail_timer += step.dt;
            if self.trail_timer >= trail_interval(cfg, state.speed, drifting) {
                self.trail_timer = 0.0;
                self.spawn_pair(cfg, state, drifting, &mut out);
            }
        } else {
            self.trail_timer = 0.0;
        }

        // Counts simulated time, so a long stall only contributes one clamped step.
        self.since_exhaust += step.dt;
        if step.throttle > EXHAUST_THROTTLE && self.since_exhaust > EXHAUST_MIN_INTERVAL_SECS {
            self.since_exhaust = 0.0;
            out.exhaust = true;
        }
        out
    }

    fn spawn_pair(
        &mut self,
        cfg: &CarConfig,
        state: &MotionState,
        drifting: bool,
        out: &mut Emissions,
    ) {
        let heading = state.heading;
        let rear = state.position - heading_vec(heading) * TRAIL_BACK_OFFSET;
        let boost = if drifting { DRIFT_INTENSITY_BOOST } else { 1.0 };
        let spread = (state.speed / cfg.max_speed.max(f32::EPSILON))
            .clamp(TRAIL_INTENSITY_MIN, 1.0)
            * boost;

        for side in [FRAC_PI_2, -FRAC_PI_2] {
            let wheel = rear + heading_vec(heading + side) * TRAIL_HALF_TRACK;
            out.trail.push(self.particle_at(wheel, heading, spread));
        }
    }

    fn particle_at(&mut self, wheel: Vec2, heading: f32, spread: f32) -> TrailParticle {
        let jitter = Vec2::new(self.rng.gen::<f32>() - 0.5, self.rng.gen::<f32>() - 0.5)
            * TRAIL_JITTER
            * spread;
        let rot_jitter = (self.rng.gen::<f32>() - 0.5) * TRAIL_ROTATION_JITTER_DEG.to_radians();
        TrailParticle {
            position: wheel - heading_vec(heading) * TRAIL_PUSH_BACK + jitter,
            rotation: heading + rot_jitter,
            intensity: spread.clamp(0.0, 1.0),
            opacity: (spread * TRAIL_OPACITY_SCALE).clamp(0.0, 1.0),
        }
    }
}

/// Visual handles a sink has spawned, aged until their lifetime runs out.
#[derive(Debug)]
pub struct LiveParticles<T> {
    items: Vec<(T, f32)>,
}

impl<T> Default for LiveParticles<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> LiveParticles<T> {
    pub fn push(&mut self, handle: T, lifetime_secs: f32) {
        self.items.push((handle, lifetime_secs));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Age every handle by `dt` and hand expired ones to `on_expire`.
    pub fn advance(&mut self, dt: f32, mut on_expire: impl FnMut(T)) {
        if dt <= 0.0 {
            return;
        }
        let mut i = 0;
        while i < self.items.len() {
            self.items[i].1 -= dt;
            if self.items[i].1 <= 0.0 {
                let (handle, _) = self.items.swap_remove(i);
                on_expire(handle);
            } else {
                i += 1;
            }
        }
    }

    /// Drop every handle regardless of age.
    pub fn clear(&mut self, mut on_expire: impl FnMut(T)) {
        for (handle, _) in self.items.drain(..) {
            on_expire(handle);
        }
    }
}
