use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;

pub const PAGE_SIZE: u32 = 5;

/// A headline reduced to what the view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    url: Option<String>,
}

/// Client for a NewsAPI-compatible `/everything` endpoint.
#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl NewsClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Self::with_endpoint(
            &config.news_api_base_url,
            config.news_api_key.clone(),
            Duration::from_secs(config.news_timeout_secs),
        )
    }

    pub fn with_endpoint(
        base_url: &str,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            endpoint: format!("{}/everything", base_url.trim_end_matches('/')),
        })
    }

    /// Latest articles for `industry`, newest first. Any failure yields an empty list.
    pub async fn fetch_industry_news(&self, industry: &str) -> Vec<NewsItem> {
        match self.try_fetch(industry).await {
            Ok(items) => {
                debug!("Fetched {} news items for '{industry}'", items.len());
                items
            }
            Err(e) => {
                warn!("News fetch for '{industry}' failed: {e}");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, industry: &str) -> Result<Vec<NewsItem>, reqwest::Error> {
        let page_size = PAGE_SIZE.to_string();
        let response: EverythingResponse = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", industry),
                ("pageSize", page_size.as_str()),
                ("sortBy", "publishedAt"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(reduce_articles(response.articles))
    }
}

/// Keeps articles that have both a title and a url.
fn reduce_articles(articles: Vec<Article>) -> Vec<NewsItem> {
    articles
        .into_iter()
        .filter_map(|a| match (a.title, a.url) {
            (Some(title), Some(url)) => Some(NewsItem { title, url }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_articles_reduce_to_title_and_url() {
        let json = r#"{
            "status": "ok",
            "totalResults": 3,
            "articles": [
                {"source": {"id": null, "name": "Wired"}, "title": "AI in hospitals", "url": "https://example.com/a", "publishedAt": "2026-10-01T10:00:00Z"},
                {"title": null, "url": "https://example.com/removed"},
                {"title": "Cloud costs fall", "url": "https://example.com/b"}
            ]
        }"#;
        let response: EverythingResponse = serde_json::from_str(json).unwrap();
        let items = reduce_articles(response.articles);
        assert_eq!(
            items,
            vec![
                NewsItem {
                    title: "AI in hospitals".into(),
                    url: "https://example.com/a".into()
                },
                NewsItem {
                    title: "Cloud costs fall".into(),
                    url: "https://example.com/b".into()
                },
            ]
        );
    }

    #[test]
    fn test_error_body_without_articles_is_empty() {
        let json = r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid"}"#;
        let response: EverythingResponse = serde_json::from_str(json).unwrap();
        assert!(reduce_articles(response.articles).is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_returns_empty_list() {
        // Port 9 on localhost has nothing listening; the connection is refused.
        let client = NewsClient::with_endpoint(
            "http://127.0.0.1:9/v2",
            "test-key".into(),
            Duration::from_secs(2),
        )
        .unwrap();
        assert!(client.fetch_industry_news("Healthcare").await.is_empty());
    }
}
