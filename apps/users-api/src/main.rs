use axum_helpers::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;
use users_api::{AppState, Config, build_app};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let state = AppState::new(config);
    let app = build_app(&state)?;

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "Starting users API"
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
