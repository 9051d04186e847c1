//! DuckDuckGo web search tool.
//!
//! Calls the instant-answer API and reduces the response to a short textual
//! answer: the abstract if present, else the direct answer, else up to five
//! related-topic snippets joined by newlines.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use caravan_core::error::{CaravanError, Result};
use caravan_core::tool::{Tool, ToolContext, ToolName};

const BASE_URL: &str = "https://api.duckduckgo.com/";
const NO_RESULTS: &str = "DuckDuckGo returned no answer for this query.";
const MAX_SNIPPETS: usize = 5;

/// Web search tool backed by DuckDuckGo's instant-answer API.
#[derive(Clone)]
pub struct DuckDuckGoSearch {
    client: Client,
}

impl DuckDuckGoSearch {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn perform_search(&self, query: &str) -> Result<String> {
        debug!(query = %query, "searching DuckDuckGo");

        let response = self
            .client
            .get(BASE_URL)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("no_redirect", "1"),
            ])
            .send()
            .await
            .map_err(|err| {
                CaravanError::backend(None, format!("DuckDuckGo request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read DuckDuckGo error body".to_string());
            return Err(CaravanError::backend(Some(status.as_u16()), body));
        }

        // The endpoint serves JSON with a javascript content type, so the
        // body is read as text and parsed explicitly.
        let text = response.text().await.map_err(|err| {
            CaravanError::backend(None, format!("Failed to read DuckDuckGo response: {err}"))
        })?;
        let payload: Value = serde_json::from_str(&text)?;

        Ok(extract_answer(&payload).unwrap_or_else(|| NO_RESULTS.to_string()))
    }
}

impl Default for DuckDuckGoSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for DuckDuckGoSearch {
    fn name(&self) -> ToolName {
        ToolName::DuckDuckGoSearch
    }

    fn description(&self) -> &str {
        "Search the web using DuckDuckGo."
    }

    async fn run(&self, ctx: &ToolContext) -> Result<String> {
        let query = ctx.query.trim();
        if query.is_empty() {
            return Err(CaravanError::invalid_input("search query cannot be empty"));
        }

        self.perform_search(query).await
    }
}

fn extract_answer(root: &Value) -> Option<String> {
    if let Some(text) = non_empty_str(root.get("AbstractText")) {
        return Some(text);
    }
    if let Some(text) = non_empty_str(root.get("Answer")) {
        return Some(text);
    }

    let topics = root.get("RelatedTopics")?.as_array()?;
    let mut collected = Vec::new();
    for topic in topics {
        if let Some(text) = non_empty_str(topic.get("Text")) {
            collected.push(text);
        } else if let Some(nested) = topic.get("Topics").and_then(|t| t.as_array()) {
            // Category entries nest their results one level down.
            for inner in nested {
                if let Some(text) = non_empty_str(inner.get("Text")) {
                    collected.push(text);
                }
            }
        }
    }

    collected.truncate(MAX_SNIPPETS);
    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
