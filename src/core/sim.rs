use super::config::{CarConfig, MotionMode};
use super::motion::MotionState;
use super::particles::{Emissions, ParticleEmitter, TrailParticle};
use super::pointer::PointerSnapshot;
use super::pose::CarPose;
use super::steering::{clamp_dt, MotionModel, SteeringModel, StepOutcome};
use super::velocity::VelocityModel;
use glam::Vec2;

/// Whatever draws the car. The DOM implementation lives in the web layer;
/// tests use a recording sink.
pub trait RenderSink {
    fn apply_pose(&mut self, pose: &CarPose);
    fn spawn_trail(&mut self, particle: &TrailParticle);
    fn spawn_exhaust(&mut self);
    /// Age spawned visuals and remove the expired ones.
    fn advance(&mut self, dt: f32);
    /// Remove everything the sink created.
    fn dispose(&mut self);
}

/// Result of one tick, also returned so drivers can inspect it.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub step: StepOutcome,
    pub pose: CarPose,
    pub emissions: Emissions,
}

/// Owned simulation context: one car, its motion model and emitter.
pub struct CursorSim {
    config: CarConfig,
    model: Box<dyn MotionModel>,
    state: MotionState,
    emitter: ParticleEmitter,
    viewport: Vec2,
    elapsed: f32,
    disposed: bool,
}

pub fn model_for(mode: MotionMode) -> Box<dyn MotionModel> {
    match mode {
        MotionMode::Steering => Box::new(SteeringModel),
        MotionMode::Velocity => Box::new(VelocityModel::default()),
    }
}

impl CursorSim {
    /// Car parked in the middle of `viewport`.
    pub fn new(config: CarConfig, viewport: Vec2, seed: u64) -> Self {
        let model = model_for(config.mode);
        log::debug!("[car] motion model: {}", model.name());
        Self {
            config,
            model,
            state: MotionState::centered(viewport),
            emitter: ParticleEmitter::new(seed),
            viewport,
            elapsed: 0.0,
            disposed: false,
        }
    }

    pub fn with_state(mut self, state: MotionState) -> Self {
        self.state = state;
        self
    }

    pub fn config(&self) -> &CarConfig {
        &self.config
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Advance one frame without a sink.
    pub fn step(&mut self, pointer: PointerSnapshot, dt: f32) -> FrameOutput {
        if self.disposed {
            return FrameOutput::default();
        }
        let step = self.model.step(&self.config, &mut self.state, pointer, dt);
        self.elapsed += step.dt;
        let emissions = self.emitter.emit(&self.config, &self.state, &step);
        FrameOutput {
            step,
            pose: CarPose::from_state(&self.state, self.elapsed),
            emissions,
        }
    }

    /// Advance one frame and forward the result to `sink`.
    pub fn tick(
        &mut self,
        pointer: PointerSnapshot,
        dt: f32,
        sink: &mut impl RenderSink,
    ) -> FrameOutput {
        let out = self.step(pointer, dt);
        if self.disposed {
            return out;
        }
        sink.apply_pose(&out.pose);
        for p in &out.emissions.trail {
            sink.spawn_trail(p);
        }
        if out.emissions.exhaust {
            sink.spawn_exhaust();
        }
        if let Some(dt) = clamp_dt(dt) {
            sink.advance(dt);
        }
        out
    }

    /// New viewport bounds: keep the car inside the margin.
    pub fn resize(&mut self, viewport: Vec2) -> bool {
        self.viewport = viewport;
        self.state.clamp_into(viewport)
    }

    pub fn dispose(&mut self, sink: &mut impl RenderSink) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        sink.dispose();
    }
}
