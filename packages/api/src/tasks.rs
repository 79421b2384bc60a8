use store::models::{NewTask, Task, TaskPatch};

use crate::error::ApiResult;
use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.require_token()?;
        self.get_json("/api/tasks").await
    }

    pub async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        self.require_token()?;
        self.post_json("/api/tasks", task).await
    }

    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> ApiResult<Task> {
        self.require_token()?;
        self.patch_json(&format!("/api/tasks/{id}"), patch).await
    }

    pub async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.require_token()?;
        self.delete(&format!("/api/tasks/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use store::TaskStatus;

    #[tokio::test]
    async fn test_status_change_round_trip() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/tasks")
            .with_status(200)
            .with_body(r#"[{"_id":"t1","title":"Write docs","status":"Not started","dueDate":"2024-05-01T00:00:00Z"}]"#)
            .create_async()
            .await;
        let patch = server
            .mock("PATCH", "/api/tasks/t1")
            .match_body(Matcher::JsonString(r#"{"status":"In progress"}"#.into()))
            .with_status(200)
            .with_body(r#"{"_id":"t1","title":"Write docs","status":"In progress"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).with_token(Some("tok".into()));
        let tasks = client.list_tasks().await.unwrap();
        assert!(tasks[0].due_date.is_some());

        let update = TaskPatch {
            status: Some(TaskStatus::InProgress),
            ..TaskPatch::default()
        };
        let task = client.update_task("t1", &update).await.unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        patch.assert_async().await;
    }

    #[tokio::test]
    async fn test_requires_token() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert!(client.delete_task("t1").await.is_err());
    }
}
