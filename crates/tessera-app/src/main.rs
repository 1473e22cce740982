mod app_state;
mod boot;
mod cli;
mod panes;
mod state;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use tessera_config::TesseraConfig;

use crate::boot::{BootstrapCoordinator, HttpSource, ResolvedBootstrap};
use crate::state::AppState;

fn load_config(path: Option<&str>) -> (TesseraConfig, Option<String>) {
    let loaded = match path {
        Some(p) => tessera_config::load_config_from(Path::new(p)),
        None => tessera_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (TesseraConfig::default(), Some(e.to_string())),
    }
}

/// Run the bootstrap stages to completion on a short-lived runtime.
fn bootstrap(state: &mut AppState) -> Result<ResolvedBootstrap, tessera_common::TesseraError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let source = HttpSource::new(&state.config.bootstrap)?;
    let coordinator = BootstrapCoordinator::new(source, state.config.bootstrap.clone());
    let resolved = runtime.block_on(coordinator.resolve(&mut state.bootstrap))?;
    Ok(resolved)
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is loaded before logging so its level can seed the filter
    let (config, config_error) = load_config(args.config.as_deref());

    // Initialize logging
    let fallback = format!("tessera={}", config.logging.level.as_str());
    let log_directive = args.log_level.as_deref().unwrap_or(&fallback);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "tessera=info".parse().expect("static directive")),
            ),
        )
        .init();

    tracing::info!("Tessera v{} starting...", env!("CARGO_PKG_VERSION"));

    match (&args.config, config_error) {
        (_, Some(e)) => tracing::warn!("Config load failed, using defaults: {e}"),
        (Some(path), None) => tracing::info!("Using config override: {path}"),
        (None, None) => tracing::info!(
            "Config loaded (schema v{})",
            tessera_config::CONFIG_SCHEMA_VERSION
        ),
    }
    tracing::debug!("Effective config: {}", tessera_config::config_to_json(&config));

    let devtools = args.devtools || cli::development_env();
    let mut state = AppState::new(config, &args.addresses, devtools);
    tracing::info!(
        identity = %state.identity,
        panes = state.addresses.len(),
        dark = state.wants_dark(),
        devtools,
        "Run identity computed"
    );

    // Every bootstrap failure is fatal: no window is ever created
    let resolved = match bootstrap(&mut state) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("Bootstrap failed: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(user_agent = %resolved.user_agent, "Bootstrap complete");

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::TesseraApp::new(state, resolved);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
