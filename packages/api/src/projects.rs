use store::models::{NewProject, Project, ProjectPatch};

use crate::error::ApiResult;
use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.require_token()?;
        self.get_json("/api/projects").await
    }

    pub async fn get_project(&self, id: &str) -> ApiResult<Project> {
        self.require_token()?;
        self.get_json(&format!("/api/projects/{id}")).await
    }

    pub async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        self.require_token()?;
        self.post_json("/api/projects", project).await
    }

    /// Returns the project as the backend stored it.
    pub async fn update_project(&self, id: &str, patch: &ProjectPatch) -> ApiResult<Project> {
        self.require_token()?;
        self.patch_json(&format!("/api/projects/{id}"), patch).await
    }

    pub async fn delete_project(&self, id: &str) -> ApiResult<()> {
        self.require_token()?;
        self.delete(&format!("/api/projects/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use store::models::{Priority, ProjectStatus};

    fn client(server: &mockito::Server) -> ApiClient {
        ApiClient::new(server.url()).with_token(Some("tok".into()))
    }

    #[tokio::test]
    async fn test_list_projects_with_defaults() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/projects")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(
                r#"[{"_id":"p1","title":"Website","status":"active","priority":"high",
                    "assignee":{"name":"Ada","email":"a@x.com"}},
                   {"_id":"p2","title":"Bare"}]"#,
            )
            .create_async()
            .await;

        let projects = client(&server).list_projects().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].status, ProjectStatus::Active);
        assert_eq!(projects[0].assignee.as_ref().map(|a| a.name.as_str()), Some("Ada"));
        assert_eq!(projects[1].status, ProjectStatus::Planning);
        assert_eq!(projects[1].priority, Priority::Medium);
    }

    #[tokio::test]
    async fn test_inline_field_edit_patches_one_field() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/projects/p1")
            .match_body(Matcher::JsonString(r#"{"status":"completed"}"#.into()))
            .with_status(200)
            .with_body(r#"{"_id":"p1","title":"Website","status":"completed"}"#)
            .create_async()
            .await;

        let patch = ProjectPatch::field("status", "completed").unwrap();
        let updated = client(&server).update_project("p1", &patch).await.unwrap();
        assert_eq!(updated.status, ProjectStatus::Completed);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_and_delete() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/api/projects")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "title": "Launch",
                "status": "planning",
                "priority": "medium"
            })))
            .with_status(201)
            .with_body(r#"{"_id":"p9","title":"Launch"}"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/projects/p9")
            .with_status(204)
            .create_async()
            .await;

        let client = client(&server);
        let project = client
            .create_project(&NewProject::new("Launch", ""))
            .await
            .unwrap();
        client.delete_project(&project.id).await.unwrap();
        create.assert_async().await;
        delete.assert_async().await;
    }
}
