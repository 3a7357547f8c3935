//! Client helpers for task endpoints. These functions keep endpoint paths
//! centralized and assume the backend enforces ownership and authorization.

use crate::app_lib::{
    AppError, delete_with_bearer, get_json_with_bearer, post_json_with_bearer,
    post_json_with_bearer_response, put_json_with_bearer,
};
use crate::features::tasks::types::{
    CreateTaskRequest, FilterTasksRequest, SearchTasksRequest, TaskListResponse, UpdateTaskRequest,
};

/// Fetches a page of tasks. Admins receive all users' tasks.
pub async fn list_tasks(
    access_token: &str,
    page: u32,
    limit: u32,
) -> Result<TaskListResponse, AppError> {
    get_json_with_bearer(&format!("/tasks?page={page}&limit={limit}"), access_token).await
}

/// Creates a task owned by the current user.
pub async fn create_task(request: &CreateTaskRequest, access_token: &str) -> Result<(), AppError> {
    post_json_with_bearer("/tasks", request, access_token).await
}

/// Updates a task's title, description, and completion state.
pub async fn update_task(
    id: i64,
    request: &UpdateTaskRequest,
    access_token: &str,
) -> Result<(), AppError> {
    put_json_with_bearer(&format!("/tasks/{id}"), request, access_token).await
}

/// Deletes a task. Admin-gated on the server.
pub async fn delete_task(id: i64, access_token: &str) -> Result<(), AppError> {
    delete_with_bearer(&format!("/tasks/{id}"), access_token).await
}

/// Full-text search over title and description.
pub async fn search_tasks(
    request: &SearchTasksRequest,
    access_token: &str,
) -> Result<TaskListResponse, AppError> {
    post_json_with_bearer_response("/tasks/search", request, access_token).await
}

/// Filters tasks by completion state.
pub async fn filter_tasks(
    request: &FilterTasksRequest,
    access_token: &str,
) -> Result<TaskListResponse, AppError> {
    post_json_with_bearer_response("/tasks/filter", request, access_token).await
}
