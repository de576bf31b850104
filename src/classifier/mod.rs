//! Keyword based ticket classification.
//!
//! Matching is plain substring containment on the lowercased text, so
//! `install` also fires on "reinstall" or "installer". That is the intended
//! behavior and is kept as-is.

mod rules;

pub use rules::{Category, DEFAULT_RULE, KeywordRule, Priority, RULES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub priority: Priority,
    pub base_resolution: &'static str,
}

impl From<&KeywordRule> for Classification {
    fn from(rule: &KeywordRule) -> Self {
        Self {
            category: rule.category,
            priority: rule.priority,
            base_resolution: rule.base_resolution,
        }
    }
}

pub fn classify(title: &str, description: &str) -> Classification {
    let text = format!("{} {}", title, description).to_lowercase();

    let rule = RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .unwrap_or(&DEFAULT_RULE);

    Classification::from(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Cannot login", "password invalid", Category::Authentication, Priority::High)]
    #[case("Site down", "500 error on checkout", Category::Server, Priority::Critical)]
    #[case("Dashboard", "pages are SLOW to load", Category::Performance, Priority::Medium)]
    #[case("Installer fails", "cannot finish", Category::Installation, Priority::Low)]
    #[case("No wifi", "office floor 3", Category::Network, Priority::High)]
    #[case("Question", "how do I export a report?", Category::General, Priority::Low)]
    fn test_classify_cases(
        #[case] title: &str,
        #[case] description: &str,
        #[case] category: Category,
        #[case] priority: Priority,
    ) {
        let result = classify(title, description);
        assert_eq!(result.category, category);
        assert_eq!(result.priority, priority);
    }

    #[test]
    fn test_auth_wins_over_server() {
        let result = classify("Server crash", "and the login page is broken");
        assert_eq!(result.category, Category::Authentication);
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn test_server_wins_over_network() {
        let result = classify("Timeout", "network connection drops");
        assert_eq!(result.category, Category::Server);
    }

    #[test]
    fn test_substring_matching_quirk() {
        // "reinstall" contains "install"
        let result = classify("Please reinstall", "the reporting app");
        assert_eq!(result.category, Category::Installation);

        // "author" contains "auth"
        let result = classify("Wrong author", "on the document");
        assert_eq!(result.category, Category::Authentication);
    }

    #[test]
    fn test_keyword_in_description_only() {
        let result = classify("Help please", "DNS lookups fail");
        assert_eq!(result.category, Category::Network);
    }

    #[test]
    fn test_empty_input_falls_back_to_default() {
        let result = classify("", "");
        assert_eq!(result, Classification::from(&DEFAULT_RULE));
        assert_eq!(result.category.as_str(), "General Support");
        assert_eq!(
            result.base_resolution,
            "Request more details from the user and assign to a support agent."
        );
    }

    #[test]
    fn test_base_resolution_for_authentication() {
        let result = classify("Cannot login", "password invalid");
        assert!(result.base_resolution.starts_with("Ask user to reset password"));
    }

    #[test]
    fn test_labels_serialize_as_display_strings() {
        assert_eq!(
            serde_json::to_string(&Category::Installation).unwrap(),
            "\"Installation Issue\""
        );
        assert_eq!(serde_json::to_string(&Priority::Critical).unwrap(), "\"Critical\"");
        assert_eq!(Priority::Medium.to_string(), "Medium");
        assert_eq!(Category::Network.to_string(), "Network Issue");
    }
}
