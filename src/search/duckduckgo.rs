use super::{SearchHit, SearchProvider};
use crate::{Error, Result, config::SearchConfig};
use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

/// Scrapes the DuckDuckGo HTML search page.
pub struct DuckDuckGoProvider {
    client: Client,
    endpoint: String,
}

impl DuckDuckGoProvider {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/html/", config.base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    async fn text(&self, query: &str, region: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        debug!("Querying DuckDuckGo for '{}' (region: {})", query, region);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("q", query), ("kl", region)])
            .header("Accept", "text/html")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::search(format!("DuckDuckGo responded with status {}", status)));
        }

        let body = response.text().await?;
        parse_results(&body, max_results)
    }
}

/// Extracts result links from a DuckDuckGo HTML page, in page order.
fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchHit>> {
    let link_selector = Selector::parse("a.result__a")
        .map_err(|e| Error::search(format!("Invalid result selector: {}", e)))?;

    let document = Html::parse_document(html);
    let hits = document
        .select(&link_selector)
        .filter_map(|link| {
            let href = unwrap_redirect(link.value().attr("href")?);
            if !href.starts_with("http") {
                return None;
            }

            let title = link.text().collect::<String>().trim().to_string();
            Some(SearchHit {
                href,
                title: (!title.is_empty()).then_some(title),
            })
        })
        .take(max_results)
        .collect();

    Ok(hits)
}

/// DuckDuckGo wraps result URLs in redirects like
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
fn unwrap_redirect(href: &str) -> String {
    if let Some(pos) = href.find("uddg=") {
        let start = pos + "uddg=".len();
        let end = href[start..]
            .find('&')
            .map(|i| start + i)
            .unwrap_or(href.len());
        let encoded = &href[start..end];
        if !encoded.is_empty() {
            return percent_decode_str(encoded).decode_utf8_lossy().into_owned();
        }
    }
    href.to_string()
}
