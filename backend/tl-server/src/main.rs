use tl_config::Config;
use tl_db::{UserRepository, create_pool, run_migrations};
use tl_server::{AppState, ServerErrorResult, build_router, logger};
use tl_ws::ShutdownCoordinator;

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tl-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = create_pool(database_path.as_deref()).await?;
    run_migrations(&pool).await?;

    let seeded = UserRepository::new(pool.clone())
        .seed_demo_users(config.seed.demo_users, &config.seed.demo_password)
        .await?;
    if seeded > 0 {
        info!("Seeded {seeded} demo users");
    }

    let bind_addr = config.bind_addr();
    let shutdown = ShutdownCoordinator::new();
    let (app_state, workers) = AppState::new(pool, Arc::new(config), shutdown.clone());
    let hub_tasks = workers.spawn(&shutdown);

    let app = build_router(app_state);

    let listener = TcpListener::bind(&bind_addr).await?;
    // Actual address matters when port is 0
    info!("Server listening on {}", listener.local_addr()?);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let mut server_guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            server_guard.wait().await;
        })
        .await?;

    // Also covers the server stopping on its own
    shutdown.shutdown();
    hub_tasks.join().await;
    info!("Graceful shutdown complete");

    Ok(())
}
