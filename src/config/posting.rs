//! `[posting]` section configuration.
//!
//! Values shared by every `BlogPosting` descriptor.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[posting]` section in ldpost.toml.
///
/// # Example
/// ```toml
/// [posting]
/// keywords = ["rust", "consulting"]
/// word_count = "1200"
/// pretty = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PostingConfig {
    /// Keyword set, emitted comma-joined.
    #[serde(default = "defaults::posting::keywords")]
    #[educe(Default = defaults::posting::keywords())]
    pub keywords: Vec<String>,

    /// Word count estimate. Posts are not measured.
    #[serde(default = "defaults::posting::word_count")]
    #[educe(Default = defaults::posting::word_count())]
    pub word_count: String,

    /// Placeholder `articleBody`.
    #[serde(default = "defaults::posting::article_body")]
    #[educe(Default = defaults::posting::article_body())]
    pub article_body: String,

    /// Pretty-print the JSON written into pages.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub pretty: bool,
}

impl PostingConfig {
    /// Keywords as a single comma-separated string.
    pub fn joined_keywords(&self) -> String {
        self.keywords.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::super::SeoConfig;
    use super::*;

    #[test]
    fn test_posting_defaults() {
        let config = PostingConfig::default();

        assert_eq!(config.word_count, "1000");
        assert_eq!(config.article_body, "Full content available on page.");
        assert!(!config.pretty);
        assert!(config.keywords.iter().any(|k| k == "Idea Manifest"));
    }

    #[test]
    fn test_joined_keywords() {
        let config: SeoConfig = toml::from_str(
            r#"
            [posting]
            keywords = ["rust", "seo", "blog"]
        "#,
        )
        .unwrap();

        assert_eq!(config.posting.joined_keywords(), "rust, seo, blog");
    }

    #[test]
    fn test_empty_keywords() {
        let config: SeoConfig = toml::from_str(
            r#"
            [posting]
            keywords = []
        "#,
        )
        .unwrap();

        assert_eq!(config.posting.joined_keywords(), "");
    }
}
