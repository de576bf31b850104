use async_trait::async_trait;
use ticket_triage::{
    Error, Result,
    search::{SearchHit, SearchProvider},
};
use std::sync::{Arc, Mutex};

/// A recorded call to a mock search provider
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCall {
    pub query: String,
    pub region: String,
    pub max_results: usize,
}

/// Mock search provider for testing
#[derive(Debug, Clone)]
pub struct MockSearchProvider {
    pub hits: Arc<Mutex<Vec<SearchHit>>>,
    pub calls: Arc<Mutex<Vec<SearchCall>>>,
    pub error: Option<String>,
}

impl MockSearchProvider {
    pub fn new() -> Self {
        Self {
            hits: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_links(self, links: &[&str]) -> Self {
        *self.hits.lock().unwrap() = links.iter().map(|href| SearchHit::new(*href)).collect();
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<SearchCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn text(&self, query: &str, region: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        self.calls.lock().unwrap().push(SearchCall {
            query: query.to_string(),
            region: region.to_string(),
            max_results,
        });

        if let Some(ref error) = self.error {
            return Err(Error::search(error.clone()));
        }

        Ok(self.hits.lock().unwrap().clone())
    }
}

impl Default for MockSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider that panics, for exercising the 500 path
pub struct PanickingProvider;

#[async_trait]
impl SearchProvider for PanickingProvider {
    async fn text(&self, _query: &str, _region: &str, _max_results: usize) -> Result<Vec<SearchHit>> {
        panic!("search provider exploded");
    }
}
