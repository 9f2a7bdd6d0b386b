//! Page injection.
//!
//! # Architecture
//!
//! ```text
//! inject_pages()
//!     │
//!     └── for each post (parallel) ──► inject_page()
//!             │
//!             ├── read <pages>/<page_path>, parse into a Page
//!             ├── mount publisher, publish post, render
//!             └── write <output>/<page_path>
//! ```

use crate::{
    config::SeoConfig,
    content::{ContentItem, PostIndex},
    document::Page,
    log,
    seo::StructuredDataPublisher,
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{fs, path::PathBuf};

/// What happened to one post's page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Written(PathBuf),
    Missing(PathBuf),
}

#[derive(Debug, Default)]
pub struct InjectSummary {
    pub written: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

/// Inject every post of `index` into its page.
///
/// Each page gets its own document and publisher. With `strict`, a post
/// without a page file fails the run.
pub fn inject_pages(config: &SeoConfig, index: &PostIndex, strict: bool) -> Result<InjectSummary> {
    log!("inject"; "{} posts from {}", index.len(), config.build.content.display());
    if index.is_empty() {
        log!("warn"; "no posts in {}", config.build.content.display());
    }

    let outcomes = index
        .as_slice()
        .par_iter()
        .map(|item| {
            inject_page(item, config, strict)
                .with_context(|| format!("failed to inject post `{}`", item.id))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut summary = InjectSummary::default();
    for outcome in outcomes {
        match outcome {
            PageOutcome::Written(path) => summary.written.push(path),
            PageOutcome::Missing(path) => summary.missing.push(path),
        }
    }

    log!(
        "inject";
        "wrote {} pages to {}, skipped {}",
        summary.written.len(),
        config.output_dir().display(),
        summary.missing.len()
    );
    Ok(summary)
}

/// Publish one post into its page and write the result.
pub fn inject_page(item: &ContentItem, config: &SeoConfig, strict: bool) -> Result<PageOutcome> {
    let page_path = item.page_path();
    let source = config.build.pages.join(&page_path);

    if !source.is_file() {
        if strict {
            bail!("page not found: {}", source.display());
        }
        log!("warn"; "no page for `{}` at {}", item.id, source.display());
        return Ok(PageOutcome::Missing(source));
    }

    let html = fs::read(&source).with_context(|| format!("failed to read {}", source.display()))?;
    let location = config.page_url(&item.url_path(&config.build.path_prefix));
    let mut page = Page::parse(location, html)
        .with_context(|| format!("failed to parse {}", source.display()))?;

    let rendered = {
        let mut publisher = StructuredDataPublisher::mount(&mut page, config);
        publisher.publish(item)?;
        publisher.document().render()?
    };

    let dest = config.output_dir().join(&page_path);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&dest, rendered).with_context(|| format!("failed to write {}", dest.display()))?;

    Ok(PageOutcome::Written(dest))
}
