//! Entry point: parse CLI, open the database, and serve the admin routes.

use clap::Parser;
use starwars_admin::{
    cli::Cli,
    server::{router, AppState},
    storage::CharacterDatabase,
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starwars_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let db = match &cli.database {
        Some(path) => CharacterDatabase::new(path)?,
        None => CharacterDatabase::open_default()?,
    };
    let state = AppState::new(db);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!("Starting characters admin server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
