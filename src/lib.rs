//! Process supervisor and HTTP front door for the OpenClaw gateway.
//!
//! The wrapper owns a single child process (the gateway), reflects its
//! readiness on `/health`, serves a static `/setup` page, and reverse-proxies
//! every other request (including WebSocket upgrades) to the gateway's fixed
//! loopback port.

pub mod config;
pub mod handlers;
pub mod proxy;
pub mod server;
pub mod shutdown;
pub mod state;
pub mod supervisor;
pub mod types;

pub use config::Config;
pub use server::create_router;
pub use state::{GatewayPhase, GatewayState};
pub use supervisor::Supervisor;
pub use types::AppState;
