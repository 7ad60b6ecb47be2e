/*
[INPUT]:  User-dispatched operations and task store call outcomes
[OUTPUT]: Reconciled local task list with error reporting
[POS]:    Synchronizer - mirrors the in-memory board against the task store
[UPDATE]: When adding operations or changing reconciliation behavior
*/

pub mod state;

pub use state::BoardState;

use taskboard_adapter::{
    CreateTaskRequest, Task, TaskStoreClient, TaskStoreError, UpdateTaskRequest,
};
use tracing::debug;

const LOAD_FAILED: &str = "Failed to load tasks";
const CREATE_FAILED: &str = "Failed to create task";
const UPDATE_FAILED: &str = "Failed to update task";
const DELETE_FAILED: &str = "Failed to delete task";

/// Synchronizer for the task board.
///
/// Operations take `&mut self`, so call outcomes are applied one at a time
/// and never interleave; dropping an in-flight operation cancels its
/// request rather than leaving a resolution to land later.
#[derive(Debug)]
pub struct TaskBoard {
    client: TaskStoreClient,
    state: BoardState,
}

impl TaskBoard {
    /// Create a board without contacting the store
    pub fn new(client: TaskStoreClient) -> Self {
        Self {
            client,
            state: BoardState::new(),
        }
    }

    /// Create a board and run the one automatic initial load
    pub async fn connect(client: TaskStoreClient) -> Self {
        let mut board = Self::new(client);
        board.load().await;
        board
    }

    /// Fetch the full collection, replacing the cache on success and
    /// keeping the stale cache on failure.
    pub async fn load(&mut self) {
        self.state.begin_load();
        let outcome = self
            .client
            .list_tasks()
            .await
            .map_err(|err| failure_message(err, LOAD_FAILED));
        if let Ok(tasks) = &outcome {
            debug!(count = tasks.len(), "loaded tasks");
        }
        self.state.finish_load(outcome);
    }

    /// Submit the current draft title. A draft that trims to empty is
    /// silently ignored and no request is made.
    pub async fn submit_draft(&mut self) {
        let title = self.state.draft_title.trim().to_string();
        if title.is_empty() {
            return;
        }
        let outcome = self
            .client
            .create_task(CreateTaskRequest { title })
            .await
            .map_err(|err| failure_message(err, CREATE_FAILED));
        self.state.finish_create(outcome);
    }

    /// Flip the completion flag of the cached task with this id, adopting
    /// the store's returned record wholesale on success.
    pub async fn toggle(&mut self, id: i64) {
        let Some(task) = self.state.tasks.iter().find(|entry| entry.id == id) else {
            debug!(id, "toggle ignored, task not in local cache");
            return;
        };
        let req = UpdateTaskRequest {
            completed: Some(!task.completed),
            ..Default::default()
        };
        let outcome = self
            .client
            .update_task(id, req)
            .await
            .map_err(|err| failure_message(err, UPDATE_FAILED));
        self.state.finish_update(outcome);
    }

    /// Remove the task with this id from the store, then from the cache.
    pub async fn delete(&mut self, id: i64) {
        let outcome = self
            .client
            .delete_task(id)
            .await
            .map_err(|err| failure_message(err, DELETE_FAILED));
        self.state.finish_delete(id, outcome);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn pending(&self) -> bool {
        self.state.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    pub fn draft_title(&self) -> &str {
        &self.state.draft_title
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.state.draft_title = title.into();
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }
}

/// Prefer the message the store attached to a non-success response; fall
/// back to the operation-specific default for transport and decode failures.
fn failure_message(err: TaskStoreError, fallback: &str) -> String {
    match err {
        TaskStoreError::Api { message, .. } if !message.is_empty() => message,
        _ => fallback.to_string(),
    }
}
