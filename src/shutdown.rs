//! Shutdown coordinator: forwards SIGINT/SIGTERM to the gateway child, then
//! lets the wrapper exit.

use anyhow::{Context, Result};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{info, warn};

use crate::state::GatewayState;

/// Waits for SIGINT or SIGTERM, forwards the same signal kind to the gateway
/// child if one is alive, and returns. The caller exits immediately without
/// waiting for the child.
pub async fn wait_for_signal(gateway: GatewayState) -> Result<()> {
    let mut sigterm = signal(SignalKind::terminate()).context("installing SIGTERM handler")?;
    let mut sigint = signal(SignalKind::interrupt()).context("installing SIGINT handler")?;

    let received = tokio::select! {
        _ = sigterm.recv() => Signal::SIGTERM,
        _ = sigint.recv() => Signal::SIGINT,
    };
    info!(signal = ?received, "received shutdown signal, forwarding to gateway");

    if let Some(pid) = gateway.pid() {
        if let Err(err) = kill(Pid::from_raw(pid as i32), received) {
            warn!(pid, "failed to forward signal to gateway: {err}");
        }
    }

    Ok(())
}
