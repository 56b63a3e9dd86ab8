pub mod health;

use axum::routing::any;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /exhibits      GET (list | ?id=), POST, PUT, DELETE ?id=
/// /tours         GET (list | ?id=), POST, PUT, DELETE ?id=
/// ```
///
/// Every method is routed to the resource's dispatcher, which answers
/// unsupported methods with 405.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/exhibits", any(handlers::exhibits::dispatch))
        .route("/tours", any(handlers::tours::dispatch))
}
