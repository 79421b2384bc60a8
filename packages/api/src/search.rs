use reqwest::Method;
use store::models::SearchResults;

use crate::error::ApiResult;
use crate::gateway::ApiClient;

impl ApiClient {
    /// `GET /api/search?q=`. Groups the backend omits come back empty.
    pub async fn search(&self, query: &str) -> ApiResult<SearchResults> {
        self.require_token()?;
        let request = self.request(Method::GET, "/api/search").query(&[("q", query)]);
        let response = self.execute(request, "Search failed").await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_query_is_encoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search")
            .match_query(Matcher::UrlEncoded("q".into(), "road map".into()))
            .with_status(200)
            .with_body(r#"{"pages":[{"_id":"p1","title":"Road map"}]}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).with_token(Some("tok".into()));
        let results = client.search("road map").await.unwrap();
        assert_eq!(results.pages.len(), 1);
        assert!(results.projects.is_empty());
        assert_eq!(results.total(), 1);
        mock.assert_async().await;
    }
}
