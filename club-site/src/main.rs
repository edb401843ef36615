mod cli;
mod page;
mod routes;
mod state;

use std::{env, net::SocketAddr, process, sync::Arc};

use anyhow::Result;
use chrono::Local;
use club_calendar::Schedule;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{cli::Mode, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let mode = match cli::parse(&args, env::var(cli::ADDR_VAR).ok()) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let state = AppState::new(Schedule::default(), Local::now)?;

    match mode {
        Mode::Help(usage) => println!("{usage}"),
        Mode::Render => println!("{}", state.render_page()?),
        Mode::Ics => print!("{}", state.ics),
        Mode::Serve(addr) => serve(addr, state).await?,
    }

    Ok(())
}

async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(next = %state.announce().label, "Listening at http://{addr}");

    axum::serve(listener, routes::router(Arc::new(state)))
        .with_graceful_shutdown(shutdown())
        .await?;

    Ok(())
}

async fn shutdown() {
    if let Err(err) = signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }

    info!("Shutting down");
}
