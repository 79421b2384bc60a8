//! Inbox endpoints.

use reqwest::Method;
use store::models::Notification;

use crate::error::ApiResult;
use crate::gateway::ApiClient;

impl ApiClient {
    /// `GET /api/notifications`, optionally only the unread ones.
    pub async fn list_notifications(&self, unread_only: bool) -> ApiResult<Vec<Notification>> {
        self.require_token()?;
        let mut request = self.request(Method::GET, "/api/notifications");
        if unread_only {
            request = request.query(&[("unreadOnly", "true")]);
        }
        let response = self.execute(request, "Request failed").await?;
        Self::decode(response).await
    }

    pub async fn mark_notification_read(&self, id: &str) -> ApiResult<()> {
        self.require_token()?;
        let path = format!("/api/notifications/{id}/read");
        self.send_empty(self.request(Method::PATCH, &path)).await
    }

    pub async fn mark_all_notifications_read(&self) -> ApiResult<()> {
        self.require_token()?;
        let request = self.request(Method::POST, "/api/notifications/mark-all-read");
        self.send_empty(request).await
    }

    pub async fn delete_notification(&self, id: &str) -> ApiResult<()> {
        self.require_token()?;
        self.delete(&format!("/api/notifications/{id}")).await
    }
}
