//! Route handlers
//!
//! Each handler is a thin pass-through: lock the connection, call the
//! repository, serialize the result. Request bodies arrive as
//! `Result<Json<..>, JsonRejection>` so undecodable payloads collapse to
//! the generic validation error instead of axum's default rejection.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use orrery_core::model::{
    Mission, NewMission, NewScientist, Planet, Scientist, ScientistDetail, ScientistPatch,
};
use orrery_core::OrreryError;
use orrery_store::repo::{missions, planets, scientists};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - liveness, empty 200
pub async fn home() -> StatusCode {
    StatusCode::OK
}

/// GET /scientists - all scientists as flat rows
pub async fn list_scientists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Scientist>>, ApiError> {
    let conn = state.conn()?;
    let rows = scientists::list(&conn)?;
    Ok(Json(rows))
}

/// GET /scientists/{id} - one scientist with their missions
pub async fn get_scientist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ScientistDetail>, ApiError> {
    let conn = state.conn()?;
    let detail = scientists::get_detail(&conn, id)?
        .ok_or(OrreryError::ScientistNotFound { id })?;
    Ok(Json(detail))
}

/// POST /scientists - create, 201 with the persisted record
pub async fn create_scientist(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewScientist>, JsonRejection>,
) -> Result<(StatusCode, Json<ScientistDetail>), ApiError> {
    let Json(input) = payload?;

    let conn = state.conn()?;
    let scientist = scientists::insert(&conn, input)?;

    // Fresh scientists own no missions yet
    let detail = ScientistDetail::new(scientist, Vec::new());
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PATCH /scientists/{id} - partial update, 202 with the flat record
pub async fn update_scientist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<ScientistPatch>, JsonRejection>,
) -> Result<(StatusCode, Json<Scientist>), ApiError> {
    let Json(patch) = payload?;

    let conn = state.conn()?;
    let scientist = scientists::update(&conn, id, &patch)?;
    Ok((StatusCode::ACCEPTED, Json(scientist)))
}

/// DELETE /scientists/{id} - 204 empty; missions cascade
pub async fn delete_scientist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    scientists::delete(&conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /planets - all planets as flat rows
pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Planet>>, ApiError> {
    let conn = state.conn()?;
    let rows = planets::list(&conn)?;
    Ok(Json(rows))
}

/// POST /missions - create, 201 with the persisted record
pub async fn create_mission(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewMission>, JsonRejection>,
) -> Result<(StatusCode, Json<Mission>), ApiError> {
    let Json(input) = payload?;

    let conn = state.conn()?;
    let mission = missions::insert(&conn, input)?;
    Ok((StatusCode::CREATED, Json(mission)))
}
