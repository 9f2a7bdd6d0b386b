//! Audit of rendered pages.
//!
//! Scans HTML files for `application/ld+json` blocks and flags pages that
//! carry more than one `BlogPosting` or a block that is not valid JSON.

use crate::log;
use anyhow::{Context, Result};
use regex::bytes::Regex;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use walkdir::WalkDir;

static JSON_LD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is-u)<script[^>]*type\s*=\s*["']?application/ld\+json["']?[^>]*>(.*?)</script\s*>"#,
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// More than one `BlogPosting` on the page.
    Duplicate { path: PathBuf, count: usize },
    /// A JSON-LD block that does not parse.
    Malformed { path: PathBuf, error: String },
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate { path, count } => {
                write!(f, "{}: {count} BlogPosting blocks", path.display())
            }
            Self::Malformed { path, error } => {
                write!(f, "{}: malformed JSON-LD ({error})", path.display())
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub pages: usize,
    pub postings: usize,
    pub problems: Vec<Problem>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check every `.html` file under `dir`.
pub fn check_dir(dir: &Path) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for path in collect_html_files(dir)? {
        let html = fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        report.pages += 1;

        let mut postings = 0;
        for block in extract_json_ld(&html) {
            match block {
                Ok(value) => postings += count_postings(&value),
                Err(error) => report.problems.push(Problem::Malformed {
                    path: path.clone(),
                    error,
                }),
            }
        }

        report.postings += postings;
        if postings > 1 {
            report.problems.push(Problem::Duplicate {
                path: path.clone(),
                count: postings,
            });
        }
    }

    for problem in &report.problems {
        log!("error"; "{problem}");
    }
    log!(
        "check";
        "{} pages, {} BlogPosting blocks, {} problems",
        report.pages,
        report.postings,
        report.problems.len()
    );
    Ok(report)
}

/// Every `.html` file under `dir`, sorted. Unreadable entries are errors.
fn collect_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("failed to scan {}", dir.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "html")
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Parse every JSON-LD script body in `html`.
fn extract_json_ld(html: &[u8]) -> Vec<Result<Value, String>> {
    JSON_LD
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|body| {
            let body = String::from_utf8_lossy(body.as_bytes());
            serde_json::from_str(body.trim()).map_err(|err| err.to_string())
        })
        .collect()
}

/// Count `BlogPosting` objects, looking into arrays and `@graph`.
fn count_postings(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(count_postings).sum(),
        Value::Object(obj) => {
            let own = match obj.get("@type") {
                Some(Value::String(kind)) => usize::from(kind == "BlogPosting"),
                Some(Value::Array(kinds)) => {
                    usize::from(kinds.iter().any(|kind| kind == "BlogPosting"))
                }
                _ => 0,
            };
            own + obj.get("@graph").map_or(0, count_postings)
        }
        _ => 0,
    }
}
