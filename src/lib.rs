// src/lib.rs
// =============================================================================
// repoblog: list markdown posts kept in a GitHub repository (or a static
// directory with an index page) and render them as sanitized HTML.
//
// Typical use:
//
//   let transport = ReqwestTransport::new()?;
//   let config = BlogConfig::load("repoblog.json", &transport).await?;
//   let blog = RepoBlog::new(config, None, transport);
//   for entry in blog.list().await.entries() {
//       println!("{}: {}", entry.name, entry.header.title);
//   }
//
// Modules:
// - config: the JSON config and the URLs derived from it
// - http: the Transport trait and its reqwest implementation
// - listing: entries, header extraction, sorting, listing parsers
// - blog: RepoBlog, which fetches and assembles listings
// - render: markdown rendering, the widget page, the view contract
// - index: index.html generation for static directories
// =============================================================================

mod blocking;
pub mod blog;
pub mod config;
pub mod error;
pub mod http;
pub mod index;
pub mod listing;
pub mod render;

pub use blog::RepoBlog;
pub use config::{BlogConfig, DebugMode};
pub use error::{BlogError, Result};
pub use http::{ReqwestTransport, Transport};
pub use listing::{Entry, EntryType, HeaderInfo, Listing, SortMask};
pub use render::{ContentView, Post, SanitizedHtml, Selection};
