#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use openclaw_wrapper::config::Config;
use openclaw_wrapper::server;
use openclaw_wrapper::state::GatewayState;
use openclaw_wrapper::types::AppState;

/// Wrapper configuration pointing the proxy at `gateway_port`, with delays
/// short enough for tests.
pub fn test_config(gateway_port: u16) -> Config {
    Config {
        listen_port: 0,
        gateway_port,
        gateway_program: "true".to_string(),
        gateway_args: Vec::new(),
        state_dir: "/tmp/.openclaw-test".to_string(),
        workspace_dir: "/tmp/openclaw-test-workspace".to_string(),
        ready_grace: Duration::from_millis(50),
        restart_delay: Duration::from_millis(100),
    }
}

/// Serves the wrapper router on an ephemeral port in the background.
/// Returns the base URL and the shared gateway state.
pub async fn spawn_wrapper(config: Config) -> Result<(String, GatewayState)> {
    let gateway = GatewayState::new();
    let state = AppState::new(Arc::new(config), gateway.clone())?;
    let app = server::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{addr}"), gateway))
}

/// Picks a loopback port that nothing is listening on.
pub fn free_port() -> Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

/// Polls `condition` until it holds or `deadline` elapses.
pub async fn wait_until<F: Fn() -> bool>(condition: F, deadline: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
