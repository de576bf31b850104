mod duckduckgo;
mod types;

pub use duckduckgo::DuckDuckGoProvider;
pub use types::*;

use crate::{Result, config::SearchConfig};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs a text search and returns hits in provider order.
    async fn text(&self, query: &str, region: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}

/// Best-effort web search for ticket resolutions.
///
/// Provider failures never escape this type: they are logged and turned into
/// a fallback search link.
#[derive(Clone)]
pub struct WebSearcher {
    provider: Arc<dyn SearchProvider>,
    region: String,
    max_results: usize,
    fallback_url: String,
}

impl WebSearcher {
    pub fn new(provider: Arc<dyn SearchProvider>, config: &SearchConfig) -> Self {
        Self {
            provider,
            region: config.region.clone(),
            max_results: config.max_results,
            fallback_url: config.fallback_url.clone(),
        }
    }

    pub async fn search(&self, query: &str) -> SearchOutcome {
        let search_query = format!("how to fix {}", query);

        let links: Vec<String> = match self
            .provider
            .text(&search_query, &self.region, self.max_results)
            .await
        {
            Ok(hits) => hits
                .into_iter()
                .map(|hit| hit.href)
                .take(self.max_results)
                .collect(),
            Err(e) => {
                error!("Web search failed: {}", e);
                Vec::new()
            }
        };

        if links.is_empty() {
            debug!("No web results for '{}', using fallback link", search_query);
            return SearchOutcome::Fallback(self.fallback_link(&search_query));
        }

        debug!("Found {} web results for '{}'", links.len(), search_query);
        SearchOutcome::Links(links)
    }

    /// Formatted recommendations block for `query`. Always non-empty.
    pub async fn web_solutions(&self, query: &str) -> String {
        self.search(query).await.to_string()
    }

    fn fallback_link(&self, search_query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(search_query.as_bytes()).collect();
        format!("{}?q={}", self.fallback_url, encoded)
    }
}
