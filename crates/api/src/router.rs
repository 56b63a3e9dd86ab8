//! Shared application router builder.
//!
//! Provides [`build_app_router`] so the server binary, the invocation
//! adapter, and the integration tests all run requests through the exact
//! same middleware stack.

use std::time::Duration;

use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, Response, StatusCode};
use axum::middleware::map_response;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header the admin UI sends with mutating requests. It is allowed through
/// CORS but not checked server-side.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// How long browsers may cache a preflight answer.
pub const CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

/// `Access-Control-Allow-Methods` as sent to clients.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// `Access-Control-Allow-Headers` as sent to clients.
pub const ALLOWED_HEADERS: &str = "Content-Type, X-Admin-Token";

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS list spelling (rewrites the preflight lists, see [`spell_cors_lists`])
/// 2. CORS (so every response carries `Access-Control-Allow-Origin`)
/// 3. Set request ID on incoming requests
/// 4. Structured request/response tracing
/// 5. Propagate request ID to response
/// 6. Request timeout
/// 7. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        // Health check at root level (not under /api/v1).
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer())
        .layer(map_response(spell_cors_lists))
        .with_state(state)
}

/// Build the public CORS policy.
///
/// Any origin may call the API. Every OPTIONS request is answered here with
/// 200 and an empty body, carrying the allowed methods, headers, and max age.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(ADMIN_TOKEN_HEADER)])
        .max_age(CORS_MAX_AGE)
}

/// Replace the preflight method and header lists with [`ALLOWED_METHODS`]
/// and [`ALLOWED_HEADERS`].
///
/// `CorsLayer` joins the lists with bare commas and lowercases header
/// names. Clients that compare the values literally expect the canonical
/// spelling. Responses without the headers (anything but a preflight) are
/// left alone.
async fn spell_cors_lists<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    if let Some(value) = headers.get_mut(ACCESS_CONTROL_ALLOW_METHODS) {
        *value = HeaderValue::from_static(ALLOWED_METHODS);
    }
    if let Some(value) = headers.get_mut(ACCESS_CONTROL_ALLOW_HEADERS) {
        *value = HeaderValue::from_static(ALLOWED_HEADERS);
    }
    response
}
