use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use clap::Parser;
use server::{build_pool, db, routes, AppState, Cli};
use shared::{configure_tracing, load_dotenv};
use tokio::net::TcpListener;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing();

    let args = Cli::parse();
    debug!(?args);

    // Bring the schema up to date before the pool exists
    let ran = db::run_migrations(&args.sqlite_connection_string)?;
    info!("Ran {ran} db migrations");

    let pool = build_pool(&args.sqlite_connection_string)?;

    let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);
    let listener = TcpListener::bind(socket).await?;
    info!("listening on {}", listener.local_addr()?);

    let state = AppState::new(pool, args);
    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}
