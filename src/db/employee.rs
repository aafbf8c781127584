//! Employee database operations

use sqlx::SqlitePool;

use crate::models::{Employee, EmployeeCreate};

/// Insert a new employee and return the row with its assigned id
pub async fn insert(pool: &SqlitePool, data: &EmployeeCreate) -> Result<Employee, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO employees (first_name, last_name, email)
        VALUES (?, ?, ?)
        RETURNING id, first_name, last_name, email
        "#,
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .fetch_one(pool)
    .await
}

/// List all employees in store order
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, first_name, last_name, email
        FROM employees
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, first_name, last_name, email
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, first_name, last_name, email
        FROM employees
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_name(
    pool: &SqlitePool,
    first_name: &str,
    last_name: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, first_name, last_name, email
        FROM employees
        WHERE first_name = ? AND last_name = ?
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_optional(pool)
    .await
}

/// Overwrite the mutable columns of an existing row and read it back
pub async fn update(pool: &SqlitePool, employee: &Employee) -> Result<Employee, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE employees
        SET first_name = ?, last_name = ?, email = ?
        WHERE id = ?
        RETURNING id, first_name, last_name, email
        "#,
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(&employee.email)
    .bind(employee.id)
    .fetch_one(pool)
    .await
}

/// Delete by id; returns the number of rows removed (0 when absent)
pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");
        pool
    }

    fn jane() -> EmployeeCreate {
        EmployeeCreate {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_round_trips() {
        let pool = test_pool().await;
        let created = insert(&pool, &jane()).await.unwrap();
        assert!(created.id >= 1);

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn email_column_is_unique() {
        let pool = test_pool().await;
        insert(&pool, &jane()).await.unwrap();
        let err = insert(&pool, &jane()).await.unwrap_err();
        match err {
            sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
            other => panic!("expected unique violation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lookups_by_email_and_name() {
        let pool = test_pool().await;
        let created = insert(&pool, &jane()).await.unwrap();

        let by_email = find_by_email(&pool, "jane@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);
        assert!(find_by_email(&pool, "nobody@x.com").await.unwrap().is_none());

        let by_name = find_by_name(&pool, "Jane", "Doe").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);
        assert!(find_by_name(&pool, "John", "Doe").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_columns_in_place() {
        let pool = test_pool().await;
        let mut created = insert(&pool, &jane()).await.unwrap();
        created.last_name = "Smith".into();
        created.email = "jane.smith@x.com".into();

        let updated = update(&pool, &created).await.unwrap();
        assert_eq!(updated, created);
        assert_eq!(list_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_rows_affected() {
        let pool = test_pool().await;
        let created = insert(&pool, &jane()).await.unwrap();
        assert_eq!(delete_by_id(&pool, created.id).await.unwrap(), 1);
        assert_eq!(delete_by_id(&pool, created.id).await.unwrap(), 0);
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
    }
}
