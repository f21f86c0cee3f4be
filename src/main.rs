use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openclaw_wrapper::config::Config;
use openclaw_wrapper::state::GatewayState;
use openclaw_wrapper::supervisor::Supervisor;
use openclaw_wrapper::types::AppState;
use openclaw_wrapper::{server, shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openclaw_wrapper=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env());
    let gateway = GatewayState::new();
    let state = AppState::new(config.clone(), gateway.clone())?;
    let app = server::create_router(state);

    let addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("wrapper listening on http://{addr}");
    info!("health check available at http://{addr}/health");

    tokio::spawn(Supervisor::new(config, gateway.clone()).run());

    tokio::select! {
        result = async { axum::serve(listener, app).await } => result?,
        result = shutdown::wait_for_signal(gateway) => result?,
    }

    Ok(())
}
