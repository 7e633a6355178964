use tally::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::log_settings(&config);

    let db = startup::connect_to_database(&config).await?;
    let listener = startup::bind_listener(&config).await?;

    let app = router::routes().with_state(AppState::new(db, &config));

    tracing::info!(listen_addr = %config.listen_addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
