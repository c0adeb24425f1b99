use intranet_api::{app, utils::config::AppConfig};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "intranet_api=info,tower_http=info".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then_some(JsonStorageLayer))
        .with(json.then(|| BunyanFormattingLayer::new("intranet-api".into(), std::io::stdout)))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    // The store is an external collaborator; connections open on first use.
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_lazy(&config.database_url)
        .expect("DATABASE_URL should be a valid PostgreSQL connection string");

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.bind_addr, "Server starting");

    axum::serve(listener, app(db_pool, &config))
        .await
        .expect("Server error");
}
