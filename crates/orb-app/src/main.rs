mod app_state;
mod cli;
mod headless;
mod logging;

use std::process::ExitCode;

use orb_config::SceneConfig;
use winit::event_loop::EventLoop;

fn load_config(args: &cli::Args) -> SceneConfig {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    orb_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SceneConfig::default()
    })
}

fn main() -> ExitCode {
    let args = cli::parse();

    let log = logging::init(args.log_level.as_deref());
    tracing::info!("Orb v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&args);
    log.apply_config_level(config.logging.level);

    args.apply_overrides(&mut config);
    if let Err(e) = orb_config::validation::validate(&config) {
        tracing::error!("Invalid settings: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!(
        particles = config.particles.count,
        seed = ?config.particles.seed,
        "Config loaded"
    );

    if args.headless {
        let summary = headless::run(&config, args.frames).and_then(|s| headless::to_json(&s));
        return match summary {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Headless run failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::OrbApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
