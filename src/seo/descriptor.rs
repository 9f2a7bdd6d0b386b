//! schema.org `BlogPosting` descriptor.
//!
//! # Shape
//!
//! ```json
//! {
//!   "@context": "https://schema.org",
//!   "@type": "BlogPosting",
//!   "headline": "...",
//!   "alternativeHeadline": "...",
//!   "image": "...",
//!   "author": { "@type": "Organization", "name": "...", "url": "..." },
//!   "publisher": {
//!     "@type": "Organization",
//!     "name": "...",
//!     "logo": { "@type": "ImageObject", "url": "..." }
//!   },
//!   "genre": "...",
//!   "keywords": "a, b, c",
//!   "wordcount": "1000",
//!   "url": "...",
//!   "datePublished": "...",
//!   "dateCreated": "...",
//!   "dateModified": "2024-01-01T00:00:00.000Z",
//!   "description": "...",
//!   "articleBody": "..."
//! }
//! ```

use super::SeoError;
use crate::{config::SeoConfig, content::ContentItem, utils::date::iso_timestamp};
use chrono::{DateTime, Utc};
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    kind: &'static str,
    url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishingOrganization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    logo: ImageObject,
}

/// One post's structured data, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub headline: String,
    pub alternative_headline: String,
    pub image: String,
    pub author: Organization,
    pub publisher: PublishingOrganization,
    pub genre: String,
    pub keywords: String,
    #[serde(rename = "wordcount")]
    pub word_count: String,
    pub url: String,
    pub date_published: String,
    pub date_created: String,
    pub date_modified: String,
    pub description: String,
    pub article_body: String,
}

impl BlogPosting {
    /// Build the descriptor for `item` shown at `location`, modified at `now`.
    pub fn build(
        item: &ContentItem,
        config: &SeoConfig,
        location: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let org = &config.publisher;
        let posting = &config.posting;

        Self {
            context: SCHEMA_CONTEXT,
            kind: "BlogPosting",
            headline: item.title.clone(),
            alternative_headline: item.subtitle.clone(),
            image: item.image.clone(),
            author: Organization {
                kind: "Organization",
                name: org.name.clone(),
                url: org.url.clone(),
            },
            publisher: PublishingOrganization {
                kind: "Organization",
                name: org.name.clone(),
                logo: ImageObject {
                    kind: "ImageObject",
                    url: org.logo.clone(),
                },
            },
            genre: item.category.clone(),
            keywords: posting.joined_keywords(),
            word_count: posting.word_count.clone(),
            url: location.to_owned(),
            date_published: item.date.clone(),
            date_created: item.date.clone(),
            date_modified: iso_timestamp(now),
            description: item.description().to_owned(),
            article_body: posting.article_body.clone(),
        }
    }

    /// Serialize to JSON that is safe inside a `<script>` element.
    ///
    /// `<`, `>` and `&` are written as `\u` escapes, which leaves the JSON
    /// value unchanged.
    pub fn to_json(&self, pretty: bool) -> Result<String, SeoError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(escape_for_script(&json))
    }
}

fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_build_mirrors_item() {
        let config = SeoConfig::default();
        let posting = BlogPosting::build(&sample("hello"), &config, "https://site/blog/hello/", now());

        assert_eq!(posting.headline, "Hello");
        assert_eq!(posting.alternative_headline, "World");
        assert_eq!(posting.image, "https://x/y.png");
        assert_eq!(posting.genre, "Tech");
        assert_eq!(posting.date_published, "2024-01-01");
        assert_eq!(posting.date_created, "2024-01-01");
        assert_eq!(posting.date_modified, "2025-06-01T12:30:00.000Z");
        assert_eq!(posting.url, "https://site/blog/hello/");
        assert_eq!(posting.description, "World");
    }

    #[test]
    fn test_json_shape() {
        let config = SeoConfig::default();
        let posting = BlogPosting::build(&sample("hello"), &config, "https://site/blog/hello/", now());
        let value: Value = serde_json::from_str(&posting.to_json(false).unwrap()).unwrap();

        let expected = json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": "Hello",
            "alternativeHeadline": "World",
            "image": "https://x/y.png",
            "author": {
                "@type": "Organization",
                "name": "Idea Manifest",
                "url": "https://www.ideamanifest.com"
            },
            "publisher": {
                "@type": "Organization",
                "name": "Idea Manifest",
                "logo": {
                    "@type": "ImageObject",
                    "url": "https://www.ideamanifest.com/logo.png"
                }
            },
            "genre": "Tech",
            "keywords": config.posting.joined_keywords(),
            "wordcount": "1000",
            "url": "https://site/blog/hello/",
            "datePublished": "2024-01-01",
            "dateCreated": "2024-01-01",
            "dateModified": "2025-06-01T12:30:00.000Z",
            "description": "World",
            "articleBody": "Full content available on page."
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_json_key_order_starts_with_context() {
        let config = SeoConfig::default();
        let json = BlogPosting::build(&sample("a"), &config, "u", now())
            .to_json(false)
            .unwrap();
        assert!(json.starts_with(r#"{"@context":"https://schema.org","@type":"BlogPosting","headline":"Hello""#));
    }

    #[test]
    fn test_configured_identity_is_used() {
        let mut config = SeoConfig::default();
        config.publisher.name = "Acme".into();
        config.posting.keywords = vec!["a".into(), "b".into()];
        config.posting.word_count = "250".into();

        let posting = BlogPosting::build(&sample("a"), &config, "u", now());
        assert_eq!(posting.author.name, "Acme");
        assert_eq!(posting.publisher.name, "Acme");
        assert_eq!(posting.keywords, "a, b");
        assert_eq!(posting.word_count, "250");
    }

    #[test]
    fn test_to_json_escapes_markup() {
        let config = SeoConfig::default();
        let item = ContentItem {
            title: "</script><b>Tom & Jerry</b>".into(),
            ..sample("a")
        };
        let json = BlogPosting::build(&item, &config, "u", now())
            .to_json(false)
            .unwrap();

        assert!(!json.contains('<'));
        assert!(!json.contains('>'));
        assert!(!json.contains('&'));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["headline"], "</script><b>Tom & Jerry</b>");
    }

    #[test]
    fn test_to_json_pretty() {
        let config = SeoConfig::default();
        let json = BlogPosting::build(&sample("a"), &config, "u", now())
            .to_json(true)
            .unwrap();
        assert!(json.contains("\n  \"headline\": \"Hello\""));
    }
}
