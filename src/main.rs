use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use video_blob_api::{
    api::{create_router, middleware::cors::create_cors_layer_for_config},
    application::builder::ApplicationBuilder,
    Config,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting video blob service");

    let config = Config::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    info!("Configuration loaded and validated");

    let listen_addr = config.listen_addr.clone();
    let cors = create_cors_layer_for_config(&config);

    let state = ApplicationBuilder::new(config)
        .with_infrastructure()
        .context("failed to initialize storage")?
        .build();

    let app = create_router(state).layer(cors);

    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
