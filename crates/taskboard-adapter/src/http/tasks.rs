/*
[INPUT]:  Task payloads and identifiers
[OUTPUT]: Typed task records from the store
[POS]:    HTTP layer - task collection endpoints
[UPDATE]: When adding new task endpoints or changing response format
*/

use crate::http::{Result, TaskStoreClient};
use crate::types::{CreateTaskRequest, Task, UpdateTaskRequest};
use reqwest::Method;

impl TaskStoreClient {
    /// List the full task collection
    ///
    /// GET /api/tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, "/api/tasks")?;
        self.send_json(builder).await
    }

    /// Create a task; the store assigns `id` and `created_at`
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, req: CreateTaskRequest) -> Result<Task> {
        let builder = self.request(Method::POST, "/api/tasks")?.json(&req);
        self.send_json(builder).await
    }

    /// Partially update a task; unset fields are left untouched by the store
    ///
    /// PUT /api/tasks/{id}
    pub async fn update_task(&self, id: i64, req: UpdateTaskRequest) -> Result<Task> {
        let endpoint = format!("/api/tasks/{id}");
        let builder = self.request(Method::PUT, &endpoint)?.json(&req);
        self.send_json(builder).await
    }

    /// Delete a task. Any 2xx status counts as success, 204 No Content included.
    ///
    /// DELETE /api/tasks/{id}
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let endpoint = format!("/api/tasks/{id}");
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_no_content(builder).await
    }
}
