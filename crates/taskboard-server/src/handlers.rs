/*
[INPUT]:  HTTP requests with task payloads and identifiers
[OUTPUT]: JSON task records or `{"error": ...}` bodies
[POS]:    HTTP layer - task store request handlers
[UPDATE]: When adding endpoints or changing validation
*/

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::error;

use crate::models::Task;

const TASK_COLUMNS: &str = "id, title, completed, created_at, updated_at";
const MAX_TITLE_CHARS: usize = 200;

pub async fn get_tasks(State(pool): State<SqlitePool>) -> Response {
    let query = format!(
        "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC"
    );
    match sqlx::query_as::<_, Task>(&query).fetch_all(&pool).await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(err) => {
            error!(%err, "fetch tasks");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to fetch tasks")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
}

pub async fn create_task(
    State(pool): State<SqlitePool>,
    Json(input): Json<CreateTaskInput>,
) -> Response {
    if input.title.is_empty() || input.title.chars().count() > MAX_TITLE_CHARS {
        return error_response(StatusCode::BAD_REQUEST, "invalid input");
    }

    let now = Utc::now().to_rfc3339();
    let query = format!(
        "INSERT INTO tasks (title, completed, created_at, updated_at) \
         VALUES (?, 0, ?, ?) RETURNING {TASK_COLUMNS}"
    );
    match sqlx::query_as::<_, Task>(&query)
        .bind(&input.title)
        .bind(&now)
        .bind(&now)
        .fetch_one(&pool)
        .await
    {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(err) => {
            error!(%err, "create task");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to create task")
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

pub async fn update_task(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTaskInput>,
) -> Response {
    let select = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?");
    let existing = match sqlx::query_as::<_, Task>(&select)
        .bind(id)
        .fetch_optional(&pool)
        .await
    {
        Ok(Some(task)) => task,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "task not found"),
        Err(err) => {
            error!(%err, id, "load task");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to update task");
        }
    };

    let title = input.title.unwrap_or(existing.title);
    let completed = input.completed.unwrap_or(existing.completed);
    let now = Utc::now().to_rfc3339();

    let update = format!(
        "UPDATE tasks SET title = ?, completed = ?, updated_at = ? \
         WHERE id = ? RETURNING {TASK_COLUMNS}"
    );
    match sqlx::query_as::<_, Task>(&update)
        .bind(&title)
        .bind(completed)
        .bind(&now)
        .bind(id)
        .fetch_one(&pool)
        .await
    {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(err) => {
            error!(%err, id, "update task");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to update task")
        }
    }
}

pub async fn delete_task(State(pool): State<SqlitePool>, Path(id): Path<i64>) -> Response {
    match sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await
    {
        // deleting an absent id still reports success
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!(%err, id, "delete task");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to delete task")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
