//! Cafe CRUD handlers
//!
//! Create/update respond with the `{status, message, data}` envelope;
//! a replace that loses the optimistic-concurrency race responds 500 with
//! the error detail and the submitted record echoed back.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::models::{Cafe, CafeCreate, CafeWithEmployeeCount};
use crate::projection;
use crate::utils::{AppError, AppResponse, AppResult, created, storage_error};

/// GET /api/cafes - list with derived employee counts
pub async fn list(State(state): State<ServerState>) -> Json<Vec<CafeWithEmployeeCount>> {
    let cafes = state.store().cafes.list();
    let employees = state.store().employees.list();
    Json(projection::cafes_with_employee_counts(
        cafes,
        &employees,
        state.config.sort_cafes_by_employee_count,
    ))
}

/// GET /api/cafes/{id}
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Cafe>> {
    state
        .store()
        .cafes
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Cafe {id} not found")))
}

/// POST /api/cafes - server assigns the id
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CafeCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<Cafe>>)> {
    payload.validate()?;

    let cafe = state
        .store()
        .cafes
        .insert(payload.into_cafe(Uuid::new_v4()));
    tracing::info!(id = %cafe.id, name = %cafe.name, "Cafe created");
    Ok(created(cafe, "Cafe added successfully."))
}

/// PUT /api/cafes/{id} - full-record replacement
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(cafe): Json<Cafe>,
) -> AppResult<Response> {
    if id != cafe.id {
        return Err(AppError::invalid("Path id does not match payload id"));
    }
    cafe.validate()?;

    match state.store().cafes.replace(&id, cafe.clone()) {
        Ok(updated) => {
            tracing::info!(id = %updated.id, "Cafe updated");
            Ok(created(updated, "Cafe updated successfully.").into_response())
        }
        Err(e) => Ok(storage_error(
            cafe,
            "An error occurred while updating cafe data.",
            e.to_string(),
        )
        .into_response()),
    }
}

/// DELETE /api/cafes/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if state.store().cafes.remove(&id) {
        tracing::info!(id = %id, "Cafe deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Cafe {id} not found")))
    }
}
