//! Tracing subscriber setup.
//!
//! The filter sits behind a reload layer: logging starts before the config
//! is read, and the config's `logging.level` is applied afterwards unless
//! the command line or `RUST_LOG` already chose a filter.

use orb_config::schema::LogLevel;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

pub const DEFAULT_DIRECTIVE: &str = "warn,orb=info,orb_renderer=info,orb_config=info";

/// Handle for replacing the active filter.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    locked: bool,
}

/// Expand a bare level into a directive for this workspace's crates.
///
/// Anything already shaped like a directive (`target=level` or a list) is
/// passed through untouched.
pub fn directive_for(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    format!("warn,orb={level},orb_renderer={level},orb_config={level}")
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directive}': {e}; using '{DEFAULT_DIRECTIVE}'");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}

/// Install the global subscriber.
///
/// Priority: `cli_level`, then `RUST_LOG`, then [`DEFAULT_DIRECTIVE`].
pub fn init(cli_level: Option<&str>) -> LogHandle {
    let (filter, locked) = match cli_level {
        Some(level) => (build_filter(&directive_for(level)), true),
        None => match EnvFilter::try_from_default_env() {
            Ok(env) => (env, true),
            Err(_) => (build_filter(DEFAULT_DIRECTIVE), false),
        },
    };

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    LogHandle { handle, locked }
}

impl LogHandle {
    /// Switch to the config's level, unless a higher-priority source won.
    pub fn apply_config_level(&self, level: LogLevel) {
        if self.locked {
            return;
        }
        let directive = directive_for(level.as_directive());
        if let Err(e) = self.handle.reload(build_filter(&directive)) {
            tracing::warn!("Failed to apply log level from config: {e}");
        } else {
            tracing::debug!("Log filter set from config: {directive}");
        }
    }
}
