//! genre-svc - Genre catalog microservice
//!
//! Exposes a CRUD REST resource at /genres with list pagination and
//! sorting, persisted in SQLite behind an explicit repository.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use genre_common::config;
use tracing::info;

use genre_svc::db::{self, SqliteGenreRepository};
use genre_svc::{build_router, AppState};

/// Command-line arguments for genre-svc
#[derive(Parser, Debug)]
#[command(name = "genre-svc")]
#[command(about = "Genre catalog microservice")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5760", env = "GENRE_SVC_PORT")]
    port: u16,

    /// Data folder containing the SQLite database
    #[arg(short, long)]
    data_folder: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Genre Catalog (genre-svc) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Data folder: CLI arg > GENRE_SVC_DATA env var > OS default
    let data_folder = config::resolve_data_folder(args.data_folder.as_deref(), "GENRE_SVC_DATA");
    let db_path = config::database_path(&data_folder);
    info!("Database path: {}", db_path.display());

    let pool = db::init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    // Explicit wiring: the repository is injected into the handlers' state
    let repo = Arc::new(SqliteGenreRepository::new(pool));
    let state = AppState::new(repo);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("genre-svc listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
