//! Single-page downloads and bounded section crawls.
//!
//! A section crawl saves the seed page, discovers its sibling pages through
//! the navigation sidebar and saves up to `max_pages` documents in total
//! into a fresh `docs_<timestamp>` directory. A failing sibling is logged
//! and skipped; only the seed fetch is fatal.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::thread;

use chrono::Utc;
use tracing::{info, warn};
use url::Url;

use crate::assemble::MarkdownDocument;
use crate::error::{Error, Result};
use crate::extract;
use crate::fetch::{Fetch, Fetched};
use crate::filename;
use crate::links::discover_related_links;
use crate::options::{Options, SiteVariant};
use crate::output;
use crate::page::Page;
use crate::url_utils;

/// URLs already fetched during one crawl, compared without fragments.
#[derive(Debug, Default)]
pub struct CrawlFrontier {
    visited: HashSet<Url>,
}

impl CrawlFrontier {
    /// Empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` visited. Returns `false` when it already was.
    pub fn insert(&mut self, url: &Url) -> bool {
        self.visited.insert(url_utils::without_fragment(url))
    }

    /// Whether `url` has been visited.
    #[must_use]
    pub fn contains(&self, url: &Url) -> bool {
        self.visited.contains(&url_utils::without_fragment(url))
    }

    /// Number of visited URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Whether nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// A page that could not be saved during a section crawl.
#[derive(Debug)]
pub struct CrawlFailure {
    /// Page URL.
    pub url: Url,
    /// What went wrong.
    pub error: Error,
}

/// Outcome of a download.
#[derive(Debug)]
pub struct CrawlReport {
    /// Directory the documents were written to.
    pub output_dir: PathBuf,
    /// Written files, seed first.
    pub saved: Vec<PathBuf>,
    /// Pages skipped because of fetch or write failures.
    pub failures: Vec<CrawlFailure>,
}

/// Single-page mode for `max_pages <= 1`, a section crawl otherwise.
///
/// # Errors
///
/// Fails when the seed page cannot be fetched or written.
pub fn download<F: Fetch>(fetcher: &F, url: &Url, options: &Options) -> Result<CrawlReport> {
    if options.max_pages <= 1 {
        let path = download_single(fetcher, url, options)?;
        return Ok(CrawlReport {
            output_dir: options.output_dir.clone(),
            saved: vec![path],
            failures: Vec::new(),
        });
    }
    download_section(fetcher, url, options)
}

/// Fetch, convert and save one page into `options.output_dir`.
///
/// # Errors
///
/// Returns [`Error::Fetch`] or [`Error::Write`].
pub fn download_single<F: Fetch>(fetcher: &F, url: &Url, options: &Options) -> Result<PathBuf> {
    let fetched = fetcher.fetch(url)?;
    let doc = convert(&fetched, options);
    save(&doc, &options.output_dir, options.variant, 0)
}

/// Crawl the section around `url` into `<output_dir>/docs_<unix-timestamp>`.
///
/// # Errors
///
/// Fails only when the seed page cannot be fetched or written; sibling
/// failures are collected in [`CrawlReport::failures`].
pub fn download_section<F: Fetch>(fetcher: &F, url: &Url, options: &Options) -> Result<CrawlReport> {
    let dir_name = filename::sanitize_filename(&format!("docs_{}", Utc::now().timestamp()));
    let output_dir = options.output_dir.join(dir_name);
    info!(url = %url, dir = %output_dir.display(), max_pages = options.max_pages, "starting section download");

    let mut frontier = CrawlFrontier::new();
    frontier.insert(url);

    let seed = fetcher.fetch(url)?;
    frontier.insert(&seed.url);
    let seed_page = Page::parse(&seed.text(), seed.url.clone());
    let related = discover_related_links(&seed_page);
    let seed_doc = extract::convert(seed_page, options);
    let mut saved = vec![save(&seed_doc, &output_dir, options.variant, 0)?];

    let mut failures = Vec::new();
    let mut index = 1;

    for link in related {
        if saved.len() >= options.max_pages {
            break;
        }
        if !frontier.insert(&link) {
            continue;
        }

        pause(options);
        info!(url = %link, "downloading");
        let result = fetcher.fetch(&link).and_then(|fetched| {
            frontier.insert(&fetched.url);
            let doc = convert(&fetched, options);
            save(&doc, &output_dir, options.variant, index)
        });

        match result {
            Ok(path) => {
                saved.push(path);
                index += 1;
            }
            Err(error) => {
                warn!(url = %link, %error, "skipping page");
                failures.push(CrawlFailure { url: link, error });
            }
        }
    }

    info!(saved = saved.len(), failed = failures.len(), "section download finished");
    Ok(CrawlReport {
        output_dir,
        saved,
        failures,
    })
}

fn convert(fetched: &Fetched, options: &Options) -> MarkdownDocument {
    let page = Page::parse(&fetched.text(), fetched.url.clone());
    extract::convert(page, options)
}

/// Filename stem for a converted document.
#[must_use]
pub fn document_stem(doc: &MarkdownDocument, variant: SiteVariant, index: usize) -> String {
    match variant {
        SiteVariant::Docs => filename::docs_filename(&doc.metadata.title, index),
        SiteVariant::Blog => filename::blog_filename(&doc.metadata),
    }
}

fn save(doc: &MarkdownDocument, dir: &Path, variant: SiteVariant, index: usize) -> Result<PathBuf> {
    output::write_document(dir, &document_stem(doc, variant, index), &doc.render())
}

fn pause(options: &Options) {
    if !options.delay.is_zero() {
        thread::sleep(options.delay);
    }
}
