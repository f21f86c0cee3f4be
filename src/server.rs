use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::types::AppState;
use crate::{handlers, proxy};

/// Builds the wrapper router: the two front-end-owned routes, then the proxy
/// fallback for everything else.
///
/// The front end claims only `GET /health` and `GET /setup`; any other
/// method on those paths belongs to the gateway, so the method-not-allowed
/// fallback proxies too instead of answering 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/setup", get(handlers::setup::setup_page))
        .fallback(proxy::forward)
        .method_not_allowed_fallback(proxy::forward)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
