// src/blog.rs
// =============================================================================
// The resolver: one configured blog, ready to list and render posts.
//
// Flow of a listing:
// 1. GET the listing (contents API JSON, or {dir}/index.html in static mode)
// 2. Keep markdown files only
// 3. GET each file and extract its header (a few at a time, order kept)
// 4. Sort by the configured filename mask
//
// Nothing in that flow surfaces an error. A failed step 1 gives
// Listing::Failed, a failed step 3 gives that entry a filename-derived title,
// a bad mask leaves the order alone. Every one of those is logged.
// =============================================================================

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::blocking;
use crate::config::BlogConfig;
use crate::error::{BlogError, Result};
use crate::http::Transport;
use crate::listing::{header, parse_contents, parse_index, Entry, Listing, SortMask};
use crate::render::{render_markdown, Post, SanitizedHtml};

// Header and content fetches in flight at once for one listing
const CONCURRENT_FETCHES: usize = 8;

pub struct RepoBlog<T> {
    config: BlogConfig,
    transport: T,
    listing_url: String,
    content_prefix: String,
    mask: Option<SortMask>,
}

impl<T: Transport> RepoBlog<T> {
    /// `root` is prepended to the static-mode base path (e.g. the path the
    /// site is mounted under); it is ignored in API mode.
    pub fn new(config: BlogConfig, root: Option<&str>, transport: T) -> Self {
        let listing_url = config.listing_url(root);
        let content_prefix = config.content_prefix(root);

        let mask = match SortMask::new(&config.file_sort_regex) {
            Ok(mask) => Some(mask),
            Err(e) => {
                warn!("{}; listing order will not be changed", e);
                None
            }
        };

        if config.debug.enabled() {
            debug!("debugging is on; set \"debug\": false in the config to silence it");
            debug!(html_mode = config.is_html_mode(), %listing_url, %content_prefix, "resolved blog");
        }

        Self {
            config,
            transport,
            listing_url,
            content_prefix,
            mask,
        }
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    pub fn content_prefix(&self) -> &str {
        &self.content_prefix
    }

    /// Fetch, filter, enrich and sort the listing.
    pub async fn list(&self) -> Listing {
        let entries = match self.fetch_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("could not list {}: {}", self.listing_url, e);
                return Listing::Failed(e);
            }
        };

        let mut entries = self.with_headers(entries).await;
        if let Some(mask) = &self.mask {
            mask.sort(&mut entries);
        }

        if self.config.debug.enabled() {
            debug!(count = entries.len(), "file listing");
            for entry in &entries {
                debug!(name = %entry.name, title = %entry.header.title, image = ?entry.header.image, "entry");
            }
        }

        Listing::Fetched(entries)
    }

    /// Blocking twin of [`RepoBlog::list`]. Must not be called from inside a
    /// tokio runtime.
    pub fn list_blocking(&self) -> Listing {
        blocking::block_on(self.list()).unwrap_or_else(Listing::Failed)
    }

    /// Fetch one post and render it to sanitized HTML.
    pub async fn content(&self, entry: &Entry) -> Result<SanitizedHtml> {
        let url = entry
            .content_url()
            .ok_or_else(|| BlogError::NoContent(entry.name.clone()))?;
        let markdown = self.get(url).await?;
        Ok(render_markdown(&markdown))
    }

    pub fn content_blocking(&self, entry: &Entry) -> Result<SanitizedHtml> {
        blocking::block_on(self.content(entry))?
    }

    /// Render every entry's content; failures leave that post empty.
    pub async fn posts(&self, entries: Vec<Entry>) -> Vec<Post> {
        stream::iter(entries)
            .map(|entry| async move {
                let content = match self.content(&entry).await {
                    Ok(html) => Some(html),
                    Err(e) => {
                        warn!("could not render {}: {}", entry.name, e);
                        None
                    }
                };
                Post { entry, content }
            })
            .buffered(CONCURRENT_FETCHES)
            .collect()
            .await
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        if self.config.is_html_mode() {
            let url = self.listing_url.strip_suffix('/').unwrap_or(&self.listing_url);
            let body = self.get(&format!("{}/index.html", url)).await?;
            Ok(parse_index(&body, url, &self.content_prefix))
        } else {
            let body = self.get(&self.listing_url).await?;
            parse_contents(&body)
        }
    }

    async fn with_headers(&self, entries: Vec<Entry>) -> Vec<Entry> {
        stream::iter(entries)
            .map(|entry| self.with_header(entry))
            .buffered(CONCURRENT_FETCHES)
            .collect()
            .await
    }

    async fn with_header(&self, mut entry: Entry) -> Entry {
        let Some(url) = entry.content_url() else {
            debug!("{} has no download URL; using its filename as title", entry.name);
            entry.header = header::fallback_header(&entry.name);
            return entry;
        };

        entry.header = match self.get(url).await {
            Ok(markdown) => header::parse_header(&entry.name, &markdown, &self.content_prefix),
            Err(e) => {
                warn!("could not read header of {}: {}", entry.name, e);
                header::fallback_header(&entry.name)
            }
        };
        entry
    }

    async fn get(&self, url: &str) -> Result<String> {
        let url = self.config.resolve(url)?;
        if self.config.debug.verbose() {
            debug!("GET {}", url);
        }
        self.transport.get_text(&url).await
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why buffered() and not buffer_unordered()?
//    - buffer_unordered hands results back as they finish
//    - buffered keeps the input order, so an unsorted (bad mask) listing
//      still comes out in the order the server listed it
//
// 2. Why is `list` infallible?
//    - A blog widget with no posts is better than a page that errors out
//    - Listing::Failed still carries the error for callers (and the CLI's
//      exit code) that want to know
//
// 3. What does block_on give the blocking twins?
//    - A fresh single-threaded tokio runtime per call, driving the same
//      async code; no second implementation to keep in step
// -----------------------------------------------------------------------------
