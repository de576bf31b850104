use crate::{
    classifier::{self, Category, Priority},
    search::WebSearcher,
};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub category: Category,
    pub priority: Priority,
    pub resolution: String,
}

/// Classifies a ticket and appends web search recommendations to the
/// canned resolution.
#[derive(Clone)]
pub struct TicketAnalyzer {
    searcher: WebSearcher,
}

impl TicketAnalyzer {
    pub fn new(searcher: WebSearcher) -> Self {
        Self { searcher }
    }

    pub async fn analyze(&self, title: &str, description: &str) -> Analysis {
        let classification = classifier::classify(title, description);

        let search_text = format!("{} {}", title, classification.category);
        let web_links = self.searcher.web_solutions(&search_text).await;

        info!("Analyzed ticket: '{}' -> {}", title, classification.category);

        Analysis {
            category: classification.category,
            priority: classification.priority,
            resolution: format!("{}{}", classification.base_resolution, web_links),
        }
    }
}
