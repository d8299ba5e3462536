// src/listing/mod.rs
// =============================================================================
// Everything about turning a directory listing into blog entries, minus the
// network (that lives in blog.rs):
// - entry: Entry, HeaderInfo and the Listing result
// - contents: GitHub contents API responses
// - html: static index.html pages
// - header: title/image extraction from a post
// - sort: ordering by a filename mask
// =============================================================================

mod contents;
mod entry;
pub mod header;
mod html;
mod sort;

pub use contents::parse_contents;
pub use entry::{Entry, EntryType, HeaderInfo, Listing};
pub use header::{default_title, parse_header};
pub use html::parse_index;
pub use sort::SortMask;
