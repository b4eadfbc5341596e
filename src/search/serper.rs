use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::advisor::capability::SearchService;
use crate::config::SearchConfig;
use crate::search::SearchHit;

/// Serper搜索客户端
#[derive(Clone)]
pub struct SerperClient {
    http: reqwest::Client,
    config: SearchConfig,
}

/// Serper返回的单条organic结果
#[derive(Debug, Deserialize)]
struct OrganicEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

/// Serper响应体，只关心organic部分
#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<OrganicEntry>,
}

impl SerperClient {
    /// 创建新的搜索客户端
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build search http client")?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl SearchService for SerperClient {
    async fn query(&self, text: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        let body = json!({
            "q": text,
            "num": max_results,
        });

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("X-API-KEY", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Search request failed")?
            .error_for_status()
            .context("Search service returned an error status")?;

        let parsed: SerperResponse = response
            .json()
            .await
            .context("Failed to parse search response")?;

        Ok(parsed
            .organic
            .into_iter()
            .take(max_results)
            .map(|entry| SearchHit {
                title: entry.title,
                snippet: entry.snippet,
                url: entry.link,
            })
            .collect())
    }
}
