use std::time::Duration;

/// Fixed loopback port the gateway listens on.
pub const GATEWAY_PORT: u16 = 18789;

/// Default public listen port, overridable via `PORT`.
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Wrapper configuration. Everything comes from the environment; there is no
/// CLI surface.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public listen port for the front end.
    pub listen_port: u16,
    /// Loopback port the proxy forwards to.
    pub gateway_port: u16,
    /// Gateway executable.
    pub gateway_program: String,
    /// Fixed argument list passed to the gateway.
    pub gateway_args: Vec<String>,
    /// Value for `OPENCLAW_STATE_DIR` in the child environment.
    pub state_dir: String,
    /// Value for `OPENCLAW_WORKSPACE_DIR` in the child environment.
    pub workspace_dir: String,
    /// Delay between a successful spawn and asserting readiness.
    pub ready_grace: Duration,
    /// Delay before respawning after the gateway exits.
    pub restart_delay: Duration,
}

impl Config {
    /// Reads configuration from the environment, falling back to the fixed
    /// defaults. The directory overlays honor already-set variables so a
    /// deployment can relocate the gateway's state.
    pub fn from_env() -> Self {
        let listen_port = std::env::var("PORT")
            .unwrap_or_default()
            .parse()
            .unwrap_or(DEFAULT_LISTEN_PORT);
        let state_dir = std::env::var("OPENCLAW_STATE_DIR")
            .unwrap_or_else(|_| "/data/.openclaw".to_string());
        let workspace_dir = std::env::var("OPENCLAW_WORKSPACE_DIR")
            .unwrap_or_else(|_| "/data/workspace".to_string());

        Self {
            listen_port,
            gateway_port: GATEWAY_PORT,
            gateway_program: "openclaw".to_string(),
            gateway_args: vec![
                "gateway".to_string(),
                "--allow-unconfigured".to_string(),
                "--bind".to_string(),
                "loopback".to_string(),
            ],
            state_dir,
            workspace_dir,
            ready_grace: Duration::from_secs(5),
            restart_delay: Duration::from_secs(5),
        }
    }
}
