//! Employee CRUD handlers
//!
//! Creation enforces email uniqueness: a duplicate returns HTTP 200 with a
//! `conflict` envelope (the admin UI treats it as a form warning, not a
//! failure) and leaves the store untouched. Optional cafe references are
//! validated at write time against the cafe collection.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::idgen::generate_employee_id;
use crate::models::{Employee, EmployeeCreate, EmployeeWithCafeDetails};
use crate::projection;
use crate::utils::time::today_business;
use crate::utils::{AppError, AppResult, conflict, created, storage_error};

/// GET /api/employees - list with derived cafe name and days worked
pub async fn list(State(state): State<ServerState>) -> Json<Vec<EmployeeWithCafeDetails>> {
    let employees = state.store().employees.list();
    let cafes = state.store().cafes.list();
    Json(projection::employees_with_cafe_details(
        employees,
        &cafes,
        today_business(),
        state.config.clamp_min_days_worked,
    ))
}

/// GET /api/employees/{id}
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    state
        .store()
        .employees
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))
}

/// POST /api/employees - server assigns the generated id
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Response> {
    payload.validate()?;

    // Uniqueness is enforced at creation only, never on update
    let email = payload.email_address.clone();
    if state.store().employees.any(|e| e.email_address == email) {
        return Ok(conflict(payload, "Employee with the same email already exists.").into_response());
    }

    validate_cafe_reference(&state, payload.cafe_id)?;

    let employee = payload.into_employee(generate_employee_id()?);
    let employee = state.store().employees.insert(employee);
    tracing::info!(id = %employee.id, name = %employee.name, "Employee created");
    Ok(created(employee, "Employee added successfully.").into_response())
}

/// PUT /api/employees/{id} - full-record replacement
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(employee): Json<Employee>,
) -> AppResult<Response> {
    if id != employee.id {
        return Err(AppError::invalid("Path id does not match payload id"));
    }
    employee.validate()?;
    validate_cafe_reference(&state, employee.cafe_id)?;

    match state.store().employees.replace(&id, employee.clone()) {
        Ok(updated) => {
            tracing::info!(id = %updated.id, "Employee updated");
            Ok(created(updated, "Employee updated successfully.").into_response())
        }
        Err(e) => Ok(storage_error(
            employee,
            "An error occurred while updating employee data.",
            e.to_string(),
        )
        .into_response()),
    }
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.store().employees.remove(&id) {
        tracing::info!(id = %id, "Employee deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Employee {id} not found")))
    }
}

/// An assigned cafe must exist at write time (dangling references can still
/// arise later from cafe deletes; those project as an empty cafeName)
fn validate_cafe_reference(state: &ServerState, cafe_id: Option<Uuid>) -> AppResult<()> {
    if let Some(id) = cafe_id
        && state.store().cafes.get(&id).is_none()
    {
        return Err(AppError::validation(format!(
            "cafeId {id} does not reference an existing cafe"
        )));
    }
    Ok(())
}
