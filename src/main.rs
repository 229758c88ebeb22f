mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    middleware::auth::TokenKeys,
    router,
    scheduler::expiry_sweep,
    service::selection::shuffle::{Shuffler, ThreadRngShuffler},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::setup_cors(&config)?;
    let shuffler: Arc<dyn Shuffler> = Arc::new(ThreadRngShuffler);

    let mut scheduler =
        expiry_sweep::start_scheduler(db.clone(), shuffler.clone(), &config.sweep_schedule)
            .await?;

    let app = router::router()
        .layer(cors)
        .with_state(AppState::new(
            db,
            TokenKeys::new(&config.jwt_secret),
            shuffler,
        ));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
