//! Handler for the `/tours` resource.
//!
//! The target id travels in the `id` query parameter for GET and DELETE and
//! in the JSON body for PUT.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use museum_core::error::CoreError;
use museum_core::museum::{self, TOUR};
use museum_core::validation::{parse_id, require_id};
use museum_db::models::tour::{CreateTour, Tour, UpdateTour};
use museum_db::repositories::TourRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::request::{id_param, json_body, QueryParams};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET | POST | PUT | DELETE /api/v1/tours
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

async fn list(state: &AppState) -> AppResult<Json<Vec<Tour>>> {
    let tours = TourRepo::list(&state.pool).await?;
    Ok(Json(tours))
}

async fn get_by_id(state: &AppState, raw_id: &str) -> AppResult<Json<Tour>> {
    let id = parse_id(TOUR, Some(raw_id))?;
    let tour = TourRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: TOUR,
            id,
        }))?;
    Ok(Json(tour))
}

async fn create(state: &AppState, input: CreateTour) -> AppResult<(StatusCode, Json<Tour>)> {
    input.validate().map_err(CoreError::from)?;

    let tour = TourRepo::create(&state.pool, &input).await?;
    tracing::info!(tour_id = tour.id, "Tour created");
    Ok((StatusCode::CREATED, Json(tour)))
}

async fn update(state: &AppState, input: UpdateTour) -> AppResult<Json<Tour>> {
    let id = require_id(TOUR, input.id)?;
    if !input.has_changes() {
        return Err(CoreError::Validation(museum::NO_FIELDS_TO_UPDATE.into()).into());
    }

    let tour = TourRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: TOUR,
            id,
        }))?;
    tracing::info!(tour_id = id, "Tour updated");
    Ok(Json(tour))
}

async fn delete(state: &AppState, raw_id: Option<&str>) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(TOUR, raw_id)?;
    if !TourRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: TOUR,
            id,
        }));
    }

    tracing::info!(tour_id = id, "Tour deactivated");
    Ok(Json(MessageResponse::new(museum::deleted(TOUR))))
}
