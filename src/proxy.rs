//! Origin-changing reverse proxy to the gateway's loopback port.
//!
//! Everything the front end does not own lands here. Plain requests are
//! forwarded with method, headers, and body intact (Host rewritten to the
//! target); WebSocket handshakes are forwarded too, and on a `101` reply the
//! two upgraded byte streams are relayed until either side closes. A gateway
//! that cannot be reached yields HTTP 502 with a JSON error body.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use hyper::upgrade::OnUpgrade;
use hyper_util::rt::TokioIo;
use tracing::{debug, error, warn};

use crate::types::{AppState, ErrorResponse};

/// Fallback handler forwarding a request to the gateway.
pub async fn forward(State(state): State<AppState>, mut req: Request) -> Response {
    let client_upgrade = req.extensions_mut().remove::<OnUpgrade>();
    let upgrading = is_upgrade_request(req.headers());

    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_string();
    let target = format!(
        "http://127.0.0.1:{}{path_and_query}",
        state.config.gateway_port
    );
    debug!(method = %req.method(), %target, "forwarding to gateway");

    let (parts, body) = req.into_parts();

    // Origin-changing semantics: Host comes from the target URL. Connection
    // handling is per hop, except when the client is negotiating an upgrade.
    let mut headers = parts.headers.clone();
    headers.remove(header::HOST);
    if !upgrading {
        headers.remove(header::CONNECTION);
        headers.remove(header::UPGRADE);
    }

    let mut upstream = state
        .client
        .request(parts.method.clone(), &target)
        .headers(headers);

    // Only attach a body when the request actually framed one; re-framing a
    // bodyless GET as chunked would break upgrade handshakes.
    let has_body = parts.headers.contains_key(header::CONTENT_LENGTH)
        || parts.headers.contains_key(header::TRANSFER_ENCODING);
    if has_body {
        upstream = upstream.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }

    let resp = match upstream.send().await {
        Ok(resp) => resp,
        Err(err) => return gateway_unavailable(&err),
    };

    if resp.status() == StatusCode::SWITCHING_PROTOCOLS {
        return relay_upgrade(resp, client_upgrade);
    }

    let status = resp.status();
    let mut relayed = copy_response_headers(resp.headers());
    let mut response = Response::new(Body::from_stream(resp.bytes_stream()));
    *response.status_mut() = status;
    std::mem::swap(response.headers_mut(), &mut relayed);
    response
}

/// True when the client asked to switch protocols (WebSocket handshake).
fn is_upgrade_request(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONNECTION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().contains("upgrade"))
        .unwrap_or(false)
        && headers.contains_key(header::UPGRADE)
}

/// Clones the gateway's response headers minus the per-hop ones; the server
/// stack frames the relayed body itself.
fn copy_response_headers(from: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(from.len());
    for (name, value) in from {
        if name == header::CONNECTION || name == header::TRANSFER_ENCODING {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// Answers the client's handshake with the gateway's `101` and splices the
/// two upgraded connections together in a background task.
fn relay_upgrade(resp: reqwest::Response, client_upgrade: Option<OnUpgrade>) -> Response {
    let Some(client_upgrade) = client_upgrade else {
        warn!("gateway switched protocols but the client connection is not upgradable");
        return StatusCode::BAD_GATEWAY.into_response();
    };

    let mut relayed = copy_response_headers(resp.headers());
    relayed.insert(
        header::CONNECTION,
        header::HeaderValue::from_static("upgrade"),
    );

    tokio::spawn(async move {
        let mut upstream = match resp.upgrade().await {
            Ok(io) => io,
            Err(err) => {
                warn!("gateway upgrade failed: {err}");
                return;
            }
        };
        let client = match client_upgrade.await {
            Ok(io) => io,
            Err(err) => {
                warn!("client upgrade failed: {err}");
                return;
            }
        };
        let mut client = TokioIo::new(client);

        match tokio::io::copy_bidirectional(&mut client, &mut upstream).await {
            Ok((to_gateway, to_client)) => {
                debug!(to_gateway, to_client, "websocket relay closed");
            }
            Err(err) => debug!("websocket relay ended: {err}"),
        }
    });

    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::SWITCHING_PROTOCOLS;
    std::mem::swap(response.headers_mut(), &mut relayed);
    response
}

/// Maps a forwarding failure to the documented 502 body.
fn gateway_unavailable(err: &reqwest::Error) -> Response {
    error!("proxy error: {err}");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: "Gateway unavailable".to_string(),
            message: "OpenClaw gateway is starting or not responding".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
        .into_response()
}
