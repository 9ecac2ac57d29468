//! Housing Server: application entry point.

use clap::Parser;
use housing_server::args::ServeArgs;
use housing_server::error::StartupError;
use housing_server::routes::build_router;
use housing_server::state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("housing=info".parse()?))
        .json()
        .init();

    let args = ServeArgs::parse();
    let state = AppState::from_config(args.forms_config())?;
    let router = build_router(state);

    let listener = TcpListener::bind(&args.listen).await?;
    tracing::info!(listen = %args.listen, "Starting housing server");

    axum::serve(listener, router).await?;

    tracing::info!("Housing server stopped.");
    Ok(())
}
