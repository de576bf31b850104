use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Authentication Issue")]
    Authentication,
    #[serde(rename = "Server Issue")]
    Server,
    #[serde(rename = "Performance Issue")]
    Performance,
    #[serde(rename = "Installation Issue")]
    Installation,
    #[serde(rename = "Network Issue")]
    Network,
    #[serde(rename = "General Support")]
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "Authentication Issue",
            Self::Server => "Server Issue",
            Self::Performance => "Performance Issue",
            Self::Installation => "Installation Issue",
            Self::Network => "Network Issue",
            Self::General => "General Support",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// A keyword group and the outcome it produces when any keyword occurs in
/// the ticket text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
    pub priority: Priority,
    pub base_resolution: &'static str,
}

impl KeywordRule {
    /// Substring containment against already-lowercased text.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Checked top to bottom, first match wins.
pub static RULES: [KeywordRule; 5] = [
    KeywordRule {
        keywords: &["login", "password", "authentication", "auth", "sign-in"],
        category: Category::Authentication,
        priority: Priority::High,
        base_resolution: "Ask user to reset password, verify credentials, and check authentication services.",
    },
    KeywordRule {
        keywords: &["server", "500", "crash", "down", "timeout"],
        category: Category::Server,
        priority: Priority::Critical,
        base_resolution: "Check server logs, restart services, and alert the backend team immediately.",
    },
    KeywordRule {
        keywords: &["slow", "performance", "lag", "latency"],
        category: Category::Performance,
        priority: Priority::Medium,
        base_resolution: "Analyze system load, optimize database queries, and scale resources.",
    },
    KeywordRule {
        keywords: &["install", "setup", "config", "configuration"],
        category: Category::Installation,
        priority: Priority::Low,
        base_resolution: "Send installation documentation and verify system requirements.",
    },
    KeywordRule {
        keywords: &["network", "internet", "wifi", "connection", "dns"],
        category: Category::Network,
        priority: Priority::High,
        base_resolution: "Check firewall rules, DNS settings, and general connectivity.",
    },
];

pub static DEFAULT_RULE: KeywordRule = KeywordRule {
    keywords: &[],
    category: Category::General,
    priority: Priority::Low,
    base_resolution: "Request more details from the user and assign to a support agent.",
};
