//! Child process manager for the gateway.
//!
//! One indefinite loop: spawn the gateway, arm the readiness timer, wait for
//! the process to exit, clear readiness, sleep the fixed restart delay, and
//! go again. There is no backoff growth and no retry cap; the wrapper heals
//! the gateway forever.

use std::os::unix::process::ExitStatusExt;
use std::process::Stdio;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::process::{Child, Command};
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::state::GatewayState;

/// Owns the gateway child's lifecycle: spawn, readiness grace, restart on
/// exit.
pub struct Supervisor {
    config: Arc<Config>,
    state: GatewayState,
}

impl Supervisor {
    pub fn new(config: Arc<Config>, state: GatewayState) -> Self {
        Self { config, state }
    }

    /// Runs the supervise loop forever. The task only stops when it is
    /// dropped at wrapper shutdown.
    pub async fn run(self) {
        loop {
            match self.spawn_gateway() {
                Ok(child) => self.monitor(child).await,
                Err(err) => {
                    // Degraded but alive: /health keeps answering 503 and
                    // the loop retries on the same fixed delay.
                    error!("failed to spawn gateway: {err:#}");
                    self.state.mark_failed();
                }
            }

            info!(
                delay_ms = self.config.restart_delay.as_millis() as u64,
                "scheduling gateway restart"
            );
            sleep(self.config.restart_delay).await;
        }
    }

    fn spawn_gateway(&self) -> Result<Child> {
        info!(
            program = %self.config.gateway_program,
            args = ?self.config.gateway_args,
            "starting OpenClaw gateway"
        );

        let mut cmd = Command::new(&self.config.gateway_program);
        cmd.args(&self.config.gateway_args)
            .env("OPENCLAW_STATE_DIR", &self.config.state_dir)
            .env("OPENCLAW_WORKSPACE_DIR", &self.config.workspace_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        cmd.spawn()
            .with_context(|| format!("spawning {}", self.config.gateway_program))
    }

    /// Tracks one incarnation of the gateway from spawn to exit.
    async fn monitor(&self, mut child: Child) {
        let generation = self.state.begin_spawn(child.id());
        info!(generation, pid = ?child.id(), "gateway spawned, waiting for initialization");

        // One-shot readiness timer. mark_ready checks the generation, so a
        // timer left over from a superseded spawn changes nothing.
        let state = self.state.clone();
        let grace = self.config.ready_grace;
        tokio::spawn(async move {
            sleep(grace).await;
            if state.mark_ready(generation) {
                info!(generation, "gateway marked as ready");
            }
        });

        match child.wait().await {
            Ok(status) => {
                // Readiness must clear before anything else observes the
                // exit; health probes never see a stale 200.
                self.state.mark_exited(generation);
                warn!(
                    generation,
                    code = ?status.code(),
                    signal = ?status.signal(),
                    "gateway exited"
                );
            }
            Err(err) => {
                self.state.mark_exited(generation);
                error!(generation, "failed waiting on gateway: {err}");
            }
        }
    }
}
