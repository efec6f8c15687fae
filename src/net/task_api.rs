//! Client for the task resource.
//!
//! Each call is a single request/response round trip. Errors are returned
//! exactly as the transport reported them; callers own user-facing handling.

#[cfg(test)]
#[path = "task_api_test.rs"]
mod task_api_test;

use super::http::{ApiError, ApiRequest, Transport, send_json};
use super::types::{DataEnvelope, Task, TaskPatch};

const TASKS_ENDPOINT: &str = "/api/tasks";

fn task_endpoint(id: i64) -> String {
    format!("/api/task/{id}")
}

// The create route keeps its trailing slash.
const CREATE_TASK_ENDPOINT: &str = "/api/task/";

/// Order tasks newest-first by id.
pub fn sort_tasks_desc(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.id.cmp(&a.id));
}

pub struct TaskService<T> {
    transport: T,
}

impl<T: Transport> TaskService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch all tasks via `GET /api/tasks`, highest id first.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn get_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let envelope: DataEnvelope<Vec<Task>> = send_json(&self.transport, ApiRequest::get(TASKS_ENDPOINT)).await?;
        let mut tasks = envelope.data;
        sort_tasks_desc(&mut tasks);
        Ok(tasks)
    }

    /// Update a task via `PUT /api/task/{id}` and return the stored result.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
        let request = ApiRequest::put(task_endpoint(id), patch)?;
        let envelope: DataEnvelope<Task> = send_json(&self.transport, request).await?;
        Ok(envelope.data)
    }

    /// Create a task via `POST /api/task/` and return the stored result.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn create_task(&self, patch: &TaskPatch) -> Result<Task, ApiError> {
        let request = ApiRequest::post(CREATE_TASK_ENDPOINT, patch)?;
        let envelope: DataEnvelope<Task> = send_json(&self.transport, request).await?;
        Ok(envelope.data)
    }
}
