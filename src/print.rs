//! `ldpost print`: show a post's descriptor without touching its page.

use crate::{
    config::SeoConfig,
    content::PostIndex,
    seo::BlogPosting,
    utils::date::Clock,
};
use anyhow::Result;

/// Build the descriptor `id` would get when injected into its page.
pub fn describe_post(
    config: &SeoConfig,
    index: &PostIndex,
    id: &str,
    clock: impl Clock,
) -> Result<BlogPosting> {
    let item = index.get(id)?;
    let location = config.page_url(&item.url_path(&config.build.path_prefix));
    Ok(BlogPosting::build(item, config, &location, clock.now()))
}

/// Pretty-printed JSON for one post.
pub fn render_post(
    config: &SeoConfig,
    index: &PostIndex,
    id: &str,
    clock: impl Clock,
) -> Result<String> {
    let posting = describe_post(config, index, id, clock)?;
    Ok(posting.to_json(true)?)
}
