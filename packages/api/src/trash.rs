use reqwest::Method;
use serde::Serialize;
use store::models::{TrashItem, TrashItemType};

use crate::error::ApiResult;
use crate::gateway::ApiClient;

#[derive(Serialize)]
struct RestoreRequest {
    #[serde(rename = "type")]
    item_type: TrashItemType,
}

impl ApiClient {
    pub async fn list_trash(&self) -> ApiResult<Vec<TrashItem>> {
        self.require_token()?;
        self.get_json("/api/trash").await
    }

    /// Move an item back out of the trash.
    pub async fn restore_item(&self, id: &str, item_type: TrashItemType) -> ApiResult<()> {
        self.require_token()?;
        let body = serde_json::to_string(&RestoreRequest { item_type })?;
        let path = format!("/api/trash/{id}/restore");
        self.send_empty(self.request(Method::POST, &path).body(body))
            .await
    }

    /// Purge an item. Irreversible.
    pub async fn delete_permanently(&self, id: &str, item_type: TrashItemType) -> ApiResult<()> {
        self.require_token()?;
        let request = self
            .request(Method::DELETE, &format!("/api/trash/{id}"))
            .query(&[("type", item_type.as_str())]);
        self.send_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_restore_and_purge_carry_item_type() {
        let mut server = mockito::Server::new_async().await;
        let restore = server
            .mock("POST", "/api/trash/x1/restore")
            .match_body(Matcher::JsonString(r#"{"type":"page"}"#.into()))
            .with_status(200)
            .create_async()
            .await;
        let purge = server
            .mock("DELETE", "/api/trash/x2")
            .match_query(Matcher::UrlEncoded("type".into(), "project".into()))
            .with_status(200)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).with_token(Some("tok".into()));
        client.restore_item("x1", TrashItemType::Page).await.unwrap();
        client
            .delete_permanently("x2", TrashItemType::Project)
            .await
            .unwrap();
        restore.assert_async().await;
        purge.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_trash() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/trash")
            .with_status(200)
            .with_body(
                r#"[{"_id":"x1","title":"Old notes","itemType":"page",
                    "deletedAt":"2024-05-01T10:00:00Z","deletedBy":{"name":"Ada"}}]"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).with_token(Some("tok".into()));
        let items = client.list_trash().await.unwrap();
        assert_eq!(items[0].item_type, TrashItemType::Page);
        assert_eq!(items[0].deleted_by.as_ref().map(|d| d.name.as_str()), Some("Ada"));
    }
}
