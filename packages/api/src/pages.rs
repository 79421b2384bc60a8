//! Page endpoints. Pages are sent with the bearer token when one is held
//! but do not require it.

use store::models::NewPage;
use store::{Page, PagePatch, PageSummary};

use crate::error::ApiResult;
use crate::gateway::ApiClient;

impl ApiClient {
    /// Only the summary fields are decoded; block content is ignored.
    pub async fn list_pages(&self) -> ApiResult<Vec<PageSummary>> {
        self.get_json("/api/pages").await
    }

    pub async fn get_page(&self, id: &str) -> ApiResult<Page> {
        self.get_json(&format!("/api/pages/{id}")).await
    }

    pub async fn create_page(&self, page: &NewPage) -> ApiResult<Page> {
        self.post_json("/api/pages", page).await
    }

    /// `PATCH /api/pages/{id}` with only the changed fields. The echoed page
    /// is discarded: the caller's optimistic copy stays authoritative.
    pub async fn update_page(&self, id: &str, patch: &PagePatch) -> ApiResult<()> {
        let _: serde_json::Value = self.patch_json(&format!("/api/pages/{id}"), patch).await?;
        Ok(())
    }

    /// Soft-delete: the page moves to the trash.
    pub async fn trash_page(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/pages/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use store::PageTemplate;

    #[tokio::test]
    async fn test_get_page_decodes_blocks() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/pages/p1")
            .with_status(200)
            .with_body(
                r#"{"_id":"p1","title":"Roadmap","icon":"🚀","content":[
                    {"_id":"b1","type":"heading1","content":"Q3"},
                    {"_id":"b2","type":"todo","content":"Ship","checked":true,"status":"Done"}
                ]}"#,
            )
            .create_async()
            .await;

        let page = ApiClient::new(server.url()).get_page("p1").await.unwrap();
        assert_eq!(page.title, "Roadmap");
        assert_eq!(page.icon.as_deref(), Some("🚀"));
        assert_eq!(page.content.len(), 2);
        assert!(page.content[1].is_todo());
    }

    #[tokio::test]
    async fn test_list_pages_ignores_block_content() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/pages")
            .with_status(200)
            .with_body(
                r#"[
                    {"_id":"p1","title":"Notes","content":[{"_id":"b1","content":"no type"}]},
                    {"_id":"p2","title":"Plan","content":[{"_id":"b2","type":"bulleted","content":"x"}]}
                ]"#,
            )
            .create_async()
            .await;

        let pages = ApiClient::new(server.url()).list_pages().await.unwrap();
        let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Notes", "Plan"]);
    }

    #[tokio::test]
    async fn test_get_page_keeps_unknown_blocks() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/pages/p1")
            .with_status(200)
            .with_body(
                r#"{"_id":"p1","title":"Mixed","content":[
                    {"_id":"b1","type":"todo","content":"a"},
                    {"_id":"b2","type":"bulleted","content":"b"}
                ]}"#,
            )
            .create_async()
            .await;

        let page = ApiClient::new(server.url()).get_page("p1").await.unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[1].content(), "b");
        assert!(page.content[1].kind.block_type().is_none());
    }

    #[tokio::test]
    async fn test_update_page_sends_only_changed_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/pages/p1")
            .match_body(Matcher::JsonString(r#"{"title":"Renamed"}"#.into()))
            .with_status(200)
            .with_body(r#"{"_id":"p1","title":"Renamed"}"#)
            .create_async()
            .await;

        ApiClient::new(server.url())
            .update_page("p1", &PagePatch::title("Renamed"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_clearing_icon_sends_null() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/pages/p1")
            .match_body(Matcher::JsonString(r#"{"icon":null}"#.into()))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let patch = PagePatch {
            icon: Some(None),
            ..PagePatch::default()
        };
        ApiClient::new(server.url())
            .update_page("p1", &patch)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_page_from_template() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/pages")
            .match_body(Matcher::PartialJsonString(r#"{"title":"Tasks Tracker"}"#.into()))
            .with_status(201)
            .with_body(r#"{"_id":"new","title":"Tasks Tracker"}"#)
            .create_async()
            .await;

        let page = ApiClient::new(server.url())
            .create_page(&PageTemplate::TasksTracker.to_new_page())
            .await
            .unwrap();
        assert_eq!(page.id, "new");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_trash_page_failure_is_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/pages/p1")
            .with_status(404)
            .with_body(r#"{"message":"Page not found"}"#)
            .create_async()
            .await;

        let err = ApiClient::new(server.url())
            .trash_page("p1")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Page not found");
    }
}
