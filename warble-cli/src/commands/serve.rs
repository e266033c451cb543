//! HTTP server command
//!
//! Connects to Postgres, applies the schema, and serves the JSON API until
//! shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use warble_server::db;
use warble_server::http::{run_server, ServerConfig};
use warble_server::store::{PgStore, Store};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8889)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8889")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL environment variable")?;

    tracing::info!("starting warble server on {}", args.bind);

    let pool = db::create_pool(&database_url)
        .await
        .context("failed to create database pool")?;

    db::migrations::run(&pool)
        .await
        .context("failed to run schema migrations")?;

    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown.
    run_server(store, config).await.context("server error")?;

    Ok(())
}
