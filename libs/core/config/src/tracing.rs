use crate::Environment;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre for colored error reports with span traces.
///
/// Call early in main(), before any fallible operations. Safe to call
/// multiple times (silently ignored if already installed).
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware output.
///
/// - Production (`APP_ENV=production`): JSON format for log aggregation,
///   default level `info`
/// - Development: pretty-printed with targets, default level `debug`
///
/// `RUST_LOG` overrides the default filter in both modes. Safe to call
/// multiple times; subsequent calls are no-ops (common in tests).
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info,tower_http=info,sea_orm=warn")
        } else {
            EnvFilter::new("debug,tower_http=debug")
        }
    });

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let result = if is_production {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .try_init()
    };

    // Already initialized is fine (tests call this repeatedly)
    let _ = result;
}
