use std::path::PathBuf;

use clap::Parser;
use orb_config::SceneConfig;

/// Orb: an animated shader orb inside a swirling particle cloud.
#[derive(Parser, Debug)]
#[command(name = "orb", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of particles, overriding `particles.count`.
    #[arg(long)]
    pub particles: Option<u32>,

    /// RNG seed for a reproducible particle cloud.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run the frame loop on the CPU without a window and print a JSON summary.
    #[arg(long)]
    pub headless: bool,

    /// Frames to simulate in headless mode.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut SceneConfig) {
        if let Some(count) = self.particles {
            config.particles.count = count;
        }
        if let Some(seed) = self.seed {
            config.particles.seed = Some(seed);
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
