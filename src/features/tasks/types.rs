use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    /// Owner of the task. Present only in admin-scoped responses.
    #[serde(default)]
    pub user: Option<TaskOwner>,
}

impl Task {
    /// Date portion of the creation timestamp for display.
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskOwner {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTasksRequest {
    pub query: String,
    pub page: u32,
    pub limit: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterTasksRequest {
    pub completed: bool,
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_list_response_parses_wire_shape() {
        let json = r#"{
            "tasks": [
                {
                    "id": 7,
                    "title": "Write report",
                    "description": null,
                    "completed": false,
                    "createdAt": "2026-08-12T09:30:00.000Z",
                    "user": { "email": "a@b.com" }
                }
            ],
            "pagination": { "page": 1, "limit": 10, "total": 1, "pages": 1 }
        }"#;

        let response: TaskListResponse = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.tasks.len(), 1);
        let task = &response.tasks[0];
        assert_eq!(task.id, 7);
        assert!(task.description.is_none());
        assert_eq!(task.created_date(), "2026-08-12");
        assert_eq!(task.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
        assert_eq!(response.pagination.pages, 1);
    }

    #[test]
    fn task_without_owner_field_parses() {
        let json = r#"{
            "id": 1,
            "title": "Buy milk",
            "description": "2 liters",
            "completed": true,
            "createdAt": "2026-08-01T00:00:00.000Z"
        }"#;

        let task: Task = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(task.user.is_none());
        assert!(task.completed);
    }

    #[test]
    fn update_request_serializes_camel_case() {
        let request = UpdateTaskRequest {
            title: "Buy milk".to_string(),
            description: None,
            completed: true,
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert_eq!(
            json,
            r#"{"title":"Buy milk","description":null,"completed":true}"#
        );
    }
}
