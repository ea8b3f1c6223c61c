use thiserror::Error;

/// Failures that stop the page before the first frame.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("frame rate cap must give a representable frame period, got {0}")]
    InvalidFrameRate(f32),

    #[error("too many particles to fit in one ellipse buffer: {0}")]
    TooManyParticles(usize),
}
