//! Serverless-style invocation adapter.
//!
//! Function platforms hand each handler an event describing one HTTP request
//! (`httpMethod`, `queryStringParameters`, `headers`, `body`) and expect back
//! `{statusCode, headers, body, isBase64Encoded}`. [`invoke`] translates an
//! event into an HTTP request, runs it through the full application router,
//! and translates the response back, so both entry points share one code
//! path including CORS.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tower::ServiceExt;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::router::build_app_router;
use crate::state::AppState;

/// One inbound event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    /// Defaults to `GET` when absent.
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

/// The handler's answer, in the platform's response shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl Invocation {
    /// Build the HTTP request this event describes, targeting `path`.
    pub fn into_request(self, path: &str) -> AppResult<Request<Body>> {
        let method = match self.http_method.as_deref().map(str::trim) {
            None | Some("") => Method::GET,
            Some(raw) => Method::from_bytes(raw.to_ascii_uppercase().as_bytes())
                .map_err(|_| AppError::BadRequest(format!("Invalid HTTP method '{raw}'")))?,
        };

        let uri = match self.query_string_parameters {
            Some(params) if !params.is_empty() => {
                let ordered: BTreeMap<_, _> = params.into_iter().collect();
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(ordered.iter())
                    .finish();
                format!("{path}?{query}")
            }
            _ => path.to_string(),
        };

        let mut builder = Request::builder().method(method).uri(uri);

        let mut has_content_type = false;
        for (name, value) in self.headers.unwrap_or_default() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AppError::BadRequest(format!("Invalid header name '{name}'")))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|_| AppError::BadRequest(format!("Invalid value for header '{name}'")))?;
            has_content_type |= name == CONTENT_TYPE;
            builder = builder.header(name, value);
        }

        let body = self.body.unwrap_or_default();
        if !body.is_empty() && !has_content_type {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }

        builder
            .body(Body::from(body))
            .map_err(|e| AppError::InternalError(format!("Failed to build request: {e}")))
    }
}

impl InvocationResponse {
    /// Buffer an HTTP response into the platform shape.
    ///
    /// Repeated headers (e.g. `vary`) are joined with `", "`. Header values
    /// that are not visible ASCII are dropped.
    pub async fn from_response(response: Response) -> AppResult<Self> {
        let (parts, body) = response.into_parts();

        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in &parts.headers {
            let Ok(value) = value.to_str() else {
                tracing::warn!(header = %name, "Dropping non-ASCII response header");
                continue;
            };
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }

        let bytes = body
            .collect()
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to read response body: {e}")))?
            .to_bytes();

        Ok(Self {
            status_code: parts.status.as_u16(),
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
            is_base64_encoded: false,
        })
    }
}

/// Build the application router for a single invocation.
///
/// The pool is lazy: an event that the router answers without a query
/// (OPTIONS, 405, validation failures) never opens a connection.
pub fn build_invocation_app(
    database_url: &str,
    config: &ServerConfig,
) -> Result<Router, sqlx::Error> {
    let pool = museum_db::create_lazy_pool(database_url, 1)?;
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    Ok(build_app_router(state, config))
}

/// Run one event through `app` as a request to `path`.
pub async fn invoke(app: Router, path: &str, event: Invocation) -> AppResult<InvocationResponse> {
    let request = event.into_request(path)?;
    let response = app
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});
    InvocationResponse::from_response(response).await
}
