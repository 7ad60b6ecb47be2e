/*
[INPUT]:  Database rows and serde requirements
[OUTPUT]: Typed task records for storage and API responses
[POS]:    Data layer - the store's task model
[UPDATE]: When the task schema changes
*/

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task as stored. Timestamps are RFC 3339 text, assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}
