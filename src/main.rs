use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use todo_rest::config::AppConfig;
use todo_rest::{SharedData, build_router, db, logging, persistence};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file_loaded = dotenv().is_ok();
    let config = AppConfig::from_env()?;

    let otel_exporters = config
        .telemetry
        .as_ref()
        .map(logging::init_exporters)
        .transpose()?;
    logging::setup_logging_and_tracing(logging::init_env_filter()?, otel_exporters);
    if !env_file_loaded {
        info!("No .env file found, using the process environment only");
    }

    let db_pool = db::connect_sqlx(&config.database_url, config.db_max_connections).await?;
    if config.migrate_on_start {
        db::run_migrations(&db_pool).await?;
    } else {
        info!("Skipping database migrations on start");
    }

    let shared_data = Arc::new(SharedData {
        ext_cxn: persistence::ExternalConnectivity::new(db_pool),
    });
    let app = build_router(shared_data, config.serve_api_docs());

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding to {}", config.listen_addr))?;
    info!("Server listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running the HTTP server")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves once the process is asked to stop via Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(signal_err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {signal_err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(signal_err) => {
                tracing::error!("Failed to listen for SIGTERM: {signal_err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting shutdown");
        }
    }
}
