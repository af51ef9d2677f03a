use palette_api::config::Config;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::new()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting up Palette Picker API");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    let app = palette_api::app(pool);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("{:<12} - {:?}", "LISTENING", listener.local_addr());

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
