//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [publisher] Section Defaults
// ============================================================================

pub mod publisher {
    pub fn name() -> String {
        "Idea Manifest".into()
    }

    pub fn url() -> String {
        "https://www.ideamanifest.com".into()
    }

    pub fn logo() -> String {
        "https://www.ideamanifest.com/logo.png".into()
    }
}

// ============================================================================
// [posting] Section Defaults
// ============================================================================

pub mod posting {
    pub fn keywords() -> Vec<String> {
        [
            "software development",
            "web development",
            "mobile app development",
            "AI solutions",
            "technology consulting",
            "Idea Manifest",
        ]
        .into_iter()
        .map(Into::into)
        .collect()
    }

    pub fn word_count() -> String {
        "1000".into()
    }

    pub fn article_body() -> String {
        "Full content available on page.".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "posts.toml".into()
    }

    pub fn pages() -> PathBuf {
        "public/blog".into()
    }

    pub fn output() -> Option<PathBuf> {
        None
    }

    pub fn base_url() -> String {
        "https://www.ideamanifest.com".into()
    }

    pub fn path_prefix() -> String {
        "blog".into()
    }
}
