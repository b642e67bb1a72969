// src/main.rs

use std::net::SocketAddr;

use quiz_api::{AppState, config::Config, create_router, db, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    let _log_guard = logging::init_logging(&config);

    let pool = db::connect_with_retry(&config).await?;
    tracing::info!("Database connected");

    db::MIGRATOR.run(&pool).await?;
    tracing::info!("Migrations applied");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_router(AppState { pool, config });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Quiz API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
