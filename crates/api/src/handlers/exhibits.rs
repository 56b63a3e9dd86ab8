//! Handler for the `/exhibits` resource.
//!
//! The target id travels in the `id` query parameter for GET and DELETE and
//! in the JSON body for PUT.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use museum_core::error::CoreError;
use museum_core::museum::{self, EXHIBIT};
use museum_core::validation::{parse_id, require_id};
use museum_db::models::exhibit::{CreateExhibit, Exhibit, UpdateExhibit};
use museum_db::repositories::ExhibitRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::request::{id_param, json_body, QueryParams};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET | POST | PUT | DELETE /api/v1/exhibits
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<QueryParams>,
    body: Bytes,
) -> AppResult<Response> {
    match method {
        Method::GET => match id_param(&params) {
            Some(raw_id) => Ok(get_by_id(&state, raw_id).await?.into_response()),
            None => Ok(list(&state).await?.into_response()),
        },
        Method::POST => Ok(create(&state, json_body(&body)?).await?.into_response()),
        Method::PUT => Ok(update(&state, json_body(&body)?).await?.into_response()),
        Method::DELETE => Ok(delete(&state, id_param(&params)).await?.into_response()),
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn list(state: &AppState) -> AppResult<Json<Vec<Exhibit>>> {
    let exhibits = ExhibitRepo::list(&state.pool).await?;
    Ok(Json(exhibits))
}

async fn get_by_id(state: &AppState, raw_id: &str) -> AppResult<Json<Exhibit>> {
    let id = parse_id(EXHIBIT, Some(raw_id))?;
    let exhibit = ExhibitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EXHIBIT,
            id,
        }))?;
    Ok(Json(exhibit))
}

async fn create(state: &AppState, input: CreateExhibit) -> AppResult<(StatusCode, Json<Exhibit>)> {
    input.validate().map_err(CoreError::from)?;

    let exhibit = ExhibitRepo::create(&state.pool, &input).await?;
    tracing::info!(exhibit_id = exhibit.id, "Exhibit created");
    Ok((StatusCode::CREATED, Json(exhibit)))
}

async fn update(state: &AppState, input: UpdateExhibit) -> AppResult<Json<Exhibit>> {
    let id = require_id(EXHIBIT, input.id)?;
    if !input.has_changes() {
        return Err(CoreError::Validation(museum::NO_FIELDS_TO_UPDATE.into()).into());
    }

    let exhibit = ExhibitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EXHIBIT,
            id,
        }))?;
    tracing::info!(exhibit_id = id, "Exhibit updated");
    Ok(Json(exhibit))
}

async fn delete(state: &AppState, raw_id: Option<&str>) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(EXHIBIT, raw_id)?;
    if !ExhibitRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: EXHIBIT,
            id,
        }));
    }

    tracing::info!(exhibit_id = id, "Exhibit deactivated");
    Ok(Json(MessageResponse::new(museum::deleted(EXHIBIT))))
}
