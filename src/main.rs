//! CF Stats - Application Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfstats::{
    codeforces::CodeforcesClient, config::CONFIG, create_router, db, scheduler,
    scheduler::RefreshScheduler, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if CONFIG.server.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting CF Stats server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    let codeforces = Arc::new(CodeforcesClient::new(&CONFIG.codeforces)?);
    let state = AppState::new(db_pool, codeforces, CONFIG.clone());

    // Schedule the refresh cycle
    let mut refresh_scheduler =
        RefreshScheduler::new(state.refresh(), CONFIG.refresh.cron.clone()).await?;
    refresh_scheduler.setup_jobs().await?;
    refresh_scheduler.start().await?;

    if CONFIG.refresh.run_on_startup {
        let refresh = state.refresh();
        tokio::spawn(async move {
            scheduler::run_logged(&refresh).await;
        });
    }

    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down scheduler...");
    refresh_scheduler.shutdown().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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

    tracing::info!("Shutdown signal received");
}
