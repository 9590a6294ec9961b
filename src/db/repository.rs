use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};

pub async fn insert_task(db: &SqlitePool, req: CreateTaskRequest) -> Result<Task, sqlx::Error> {
    let now = Utc::now();

    let id = sqlx::query(
        "INSERT INTO tasks (description, status, created_at, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&req.description)
    .bind(TaskStatus::Pending)
    .bind(now)
    .bind(now)
    .execute(db)
    .await?
    .last_insert_rowid();

    Ok(Task {
        id,
        description: req.description,
        status: TaskStatus::Pending,
        created_at: now,
        updated_at: now,
    })
}

/// Newest-created first; ties on the (second-resolution) timestamp fall
/// back to descending id so listing order stays deterministic.
pub async fn fetch_tasks(db: &SqlitePool) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, description, status, created_at, updated_at
         FROM tasks
         ORDER BY datetime(created_at) DESC, id DESC",
    )
    .fetch_all(db)
    .await
}

pub async fn find_task_by_id(db: &SqlitePool, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, description, status, created_at, updated_at FROM tasks WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Fetch-then-patch: absent fields keep their stored value, `updated_at`
/// is refreshed unconditionally. Returns `None` when no row matches.
pub async fn update_task(
    db: &SqlitePool,
    req: UpdateTaskRequest,
) -> Result<Option<Task>, sqlx::Error> {
    let mut current = match find_task_by_id(db, req.id).await? {
        Some(t) => t,
        None => return Ok(None),
    };

    if let Some(description) = req.description {
        current.description = description;
    }
    if let Some(status) = req.status {
        current.status = status;
    }
    current.updated_at = Utc::now();

    sqlx::query(
        "UPDATE tasks
         SET description = ?,
             status = ?,
             updated_at = ?
         WHERE id = ?",
    )
    .bind(&current.description)
    .bind(current.status)
    .bind(current.updated_at)
    .bind(current.id)
    .execute(db)
    .await?;

    Ok(Some(current))
}

/// Hard delete. `false` when no row matched, which callers treat as a
/// normal negative outcome rather than an error.
pub async fn delete_task(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(affected > 0)
}
