//! Employee service
//!
//! Enforces the two business invariants on top of [`crate::db::employee`]:
//! no duplicate email on create, existence before read/update. The
//! duplicate check is read-then-insert; the UNIQUE column in the schema
//! is the backstop for concurrent creates racing on the same email.

use sqlx::SqlitePool;

use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{Employee, EmployeeCreate, EmployeeUpdate};

pub async fn create(pool: &SqlitePool, data: &EmployeeCreate) -> ServiceResult<Employee> {
    if let Some(existing) = db::employee::find_by_email(pool, &data.email).await? {
        return Err(ServiceError::AlreadyExists(existing.email));
    }
    let created = db::employee::insert(pool, data).await?;
    tracing::info!(id = created.id, "employee created");
    Ok(created)
}

pub async fn list_all(pool: &SqlitePool) -> ServiceResult<Vec<Employee>> {
    Ok(db::employee::list_all(pool).await?)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> ServiceResult<Employee> {
    db::employee::find_by_id(pool, id)
        .await?
        .ok_or(ServiceError::NotFound(id))
}

/// Fetch the saved record, overwrite only the mutable fields present in
/// the payload, and persist. The id never changes.
pub async fn update(pool: &SqlitePool, id: i64, data: &EmployeeUpdate) -> ServiceResult<Employee> {
    let saved = find_by_id(pool, id).await?;
    let merged = Employee {
        id: saved.id,
        first_name: data.first_name.clone().unwrap_or(saved.first_name),
        last_name: data.last_name.clone().unwrap_or(saved.last_name),
        email: data.email.clone().unwrap_or(saved.email),
    };
    Ok(db::employee::update(pool, &merged).await?)
}

/// Idempotent delete: removing an absent id is not an error.
pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> ServiceResult<()> {
    let removed = db::employee::delete_by_id(pool, id).await?;
    if removed > 0 {
        tracing::info!(id, "employee deleted");
    }
    Ok(())
}
