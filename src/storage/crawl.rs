//! Corpus loading from a directory of HTML pages
//!
//! Every file whose name ends in `.html` becomes a page named after its file name
//! (a file called just `.html` included).
//! Outbound links are the `href` targets of `<a>` tags. Self-links and links to files
//! outside the directory are discarded before the [`Corpus`] is built.

use super::Corpus;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// File name suffix of pages taking part in the corpus
pub const PAGE_SUFFIX: &str = ".html";

#[allow(clippy::expect_used)] // Literal pattern, checked by tests
fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("href pattern compiles")
    })
}

/// Extract `href` targets from anchor tags, in document order
///
/// # Example
///
/// ```
/// use surfer_rank::storage::extract_links;
///
/// let html = r#"<p><a href="2.html">two</a> <a class="x" href="3.html">three</a></p>"#;
/// assert_eq!(extract_links(html), vec!["2.html", "3.html"]);
/// ```
#[must_use]
pub fn extract_links(html: &str) -> Vec<String> {
    href_pattern()
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse a directory of HTML pages into a [`Corpus`]
///
/// Pages are ordered by file name so repeated crawls produce the same corpus.
///
/// # Errors
///
/// Returns error if `directory` is not a readable directory, if a page cannot be
/// read, or if the directory holds no `*.html` pages
pub async fn crawl<P: AsRef<Path>>(directory: P) -> Result<Corpus> {
    let directory = directory.as_ref();

    let metadata = tokio::fs::metadata(directory)
        .await
        .with_context(|| format!("Failed to access corpus {}", directory.display()))?;
    if !metadata.is_dir() {
        bail!("Corpus {} is not a directory", directory.display());
    }

    let mut entries = tokio::fs::read_dir(directory)
        .await
        .with_context(|| format!("Failed to list {}", directory.display()))?;

    let mut pages: Vec<(String, Vec<String>)> = Vec::new();

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to list {}", directory.display()))?
    {
        let path = entry.path();
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            if file_name.to_string_lossy().ends_with(PAGE_SUFFIX) {
                warn!(path = %path.display(), "skipping page with non UTF-8 file name");
            }
            continue;
        };
        if !name.ends_with(PAGE_SUFFIX) {
            continue;
        }

        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        if file_type.is_dir() {
            debug!(path = %path.display(), "skipping directory");
            continue;
        }
        let name = name.to_string();

        let contents = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read page {}", path.display()))?;

        let mut links = extract_links(&contents);
        links.retain(|link| *link != name);
        debug!(page = %name, links = links.len(), "parsed page");

        pages.push((name, links));
    }

    if pages.is_empty() {
        bail!("Corpus {} contains no {PAGE_SUFFIX} pages", directory.display());
    }

    pages.sort_by(|a, b| a.0.cmp(&b.0));

    let corpus = Corpus::from_links_lenient(pages)
        .with_context(|| format!("Failed to build corpus from {}", directory.display()))?;

    info!(
        directory = %directory.display(),
        pages = corpus.num_pages(),
        links = corpus.num_links(),
        "crawled corpus"
    );

    Ok(corpus)
}
