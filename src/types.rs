use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::state::GatewayState;

/// State handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: GatewayState,
    /// Upstream client for the proxy. Redirects are disabled so the gateway's
    /// own redirects pass through to the caller untouched.
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Arc<Config>, gateway: GatewayState) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("building proxy client")?;

        Ok(Self {
            config,
            gateway,
            client,
        })
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub gateway: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// JSON body for proxy failures (HTTP 502).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}
