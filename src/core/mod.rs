pub mod config;
pub mod constants;
pub mod geometry;
pub mod motion;
pub mod particles;
pub mod platform;
pub mod pointer;
pub mod pose;
pub mod sim;
pub mod steering;
pub mod velocity;

pub use config::*;
pub use motion::MotionState;
pub use particles::{LiveParticles, TrailParticle};
pub use pointer::PointerTracker;
pub use pose::CarPose;
pub use sim::{CursorSim, RenderSink};
