//! `[publisher]` section configuration.
//!
//! The organization credited as author and publisher of every post.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[publisher]` section in ldpost.toml - organization identity.
///
/// # Example
/// ```toml
/// [publisher]
/// name = "Idea Manifest"
/// url = "https://www.ideamanifest.com"
/// logo = "https://www.ideamanifest.com/logo.png"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PublisherConfig {
    /// Organization name, used for both `author` and `publisher`.
    #[serde(default = "defaults::publisher::name")]
    #[educe(Default = defaults::publisher::name())]
    pub name: String,

    /// Organization home page (`author.url`).
    #[serde(default = "defaults::publisher::url")]
    #[educe(Default = defaults::publisher::url())]
    pub url: String,

    /// Absolute logo URL (`publisher.logo.url`).
    #[serde(default = "defaults::publisher::logo")]
    #[educe(Default = defaults::publisher::logo())]
    pub logo: String,
}

#[cfg(test)]
mod tests {
    use super::super::SeoConfig;

    #[test]
    fn test_publisher_defaults() {
        let config: SeoConfig = toml::from_str("").unwrap();

        assert_eq!(config.publisher.name, "Idea Manifest");
        assert_eq!(config.publisher.url, "https://www.ideamanifest.com");
        assert_eq!(config.publisher.logo, "https://www.ideamanifest.com/logo.png");
    }

    #[test]
    fn test_publisher_override() {
        let config: SeoConfig = toml::from_str(
            r#"
            [publisher]
            name = "Acme"
            logo = "https://acme.test/logo.svg"
        "#,
        )
        .unwrap();

        assert_eq!(config.publisher.name, "Acme");
        assert_eq!(config.publisher.url, "https://www.ideamanifest.com");
        assert_eq!(config.publisher.logo, "https://acme.test/logo.svg");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SeoConfig, _> = toml::from_str(
            r#"
            [publisher]
            name = "Acme"
            twitter = "@acme"
        "#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
