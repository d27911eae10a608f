use bakeshift::server::{
    config::Config, error::Error, model::app::AppState, router, scheduler::Scheduler, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    startup::bootstrap_owner(&config, &db).await?;

    Scheduler::new(db.clone()).await?.start().await?;

    let app = router::routes()
        .with_state(AppState::new(db, config.shift_clock))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;

    tracing::info!("Starting server on {}", config.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
