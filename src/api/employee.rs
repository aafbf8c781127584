//! Employee endpoints

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use crate::error::ServiceError;
use crate::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::services::employee as service;
use crate::state::AppState;

use super::ApiResult;

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(data): Json<EmployeeCreate>,
) -> Result<(StatusCode, Json<Employee>), ServiceError> {
    data.validate()?;
    let created = service::create(&state.pool, &data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /employees
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let employees = service::list_all(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Employee> {
    let employee = service::find_by_id(&state.pool, id).await?;
    Ok(Json(employee))
}

/// PUT /employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<EmployeeUpdate>,
) -> ApiResult<Employee> {
    data.validate()?;
    let updated = service::update(&state.pool, id, &data).await?;
    Ok(Json(updated))
}

/// DELETE /employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ServiceError> {
    service::delete_by_id(&state.pool, id).await?;
    Ok("Deleted")
}
