use tracing_subscriber::EnvFilter;

use crate::settings::AppConfig;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
///
/// Production emits JSON lines; other environments get the human-readable format.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    };

    if let Err(e) = installed {
        eprintln!("Tracing subscriber already installed: {}", e);
    }
}
