use std::time::Duration;

use clap::Parser;

use bean_cosmos::ParticleField;

use crate::error::LaunchError;

/// Falling coffee beans and stars.
#[derive(Parser, Debug)]
#[command(name = "bean_cosmos", version, about)]
pub struct Cli {
    /// Number of particles in the field
    #[arg(short = 'n', long, default_value_t = ParticleField::DEFAULT_COUNT)]
    pub count: usize,

    /// Seed for a reproducible field
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Frame rate cap
    #[arg(long, default_value_t = 150.0)]
    pub max_fps: f32,

    /// Simulate this many frames without a window and print a summary
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Minimum time between two frames under `--max-fps`.
    pub fn frame_budget(&self) -> Result<Duration, LaunchError> {
        if !(self.max_fps.is_finite() && self.max_fps > 0.0) {
            return Err(LaunchError::InvalidFrameRate(self.max_fps));
        }
        Duration::try_from_secs_f32(1.0/self.max_fps).map_err(|_| LaunchError::InvalidFrameRate(self.max_fps))
    }
}
