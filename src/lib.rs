pub mod animation;
pub mod field;
pub mod particle;
pub mod recording;
pub mod surface;

pub use animation::{AnimationLoop, FrameScheduler, PendingFrame};
pub use field::ParticleField;
pub use particle::{choose_variant, Particle, Variant};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Bounds, Rgb, Surface};
