// src/listing/contents.rs
// =============================================================================
// Parsing a GitHub-style contents API response.
//
// GET {apiUrl}/{user}/{repo}/contents/{basePath}?ref={branch} answers with a
// JSON array, one object per directory entry:
//
//   [{"name": "a.md", "path": "blog/a.md", "type": "file",
//     "download_url": "https://raw.githubusercontent.com/..."}, ...]
//
// Anything that isn't an array of those (a single-file object, an error
// object with "message") is a parse error.
// =============================================================================

use super::entry::{basename, Entry};
use crate::error::Result;

/// Markdown file entries from a contents API body, keys filled in.
pub fn parse_contents(json: &str) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;

    Ok(entries
        .into_iter()
        .filter(Entry::is_markdown_file)
        .map(|mut entry| {
            entry.key = basename(&entry.name).to_string();
            entry
        })
        .collect())
}
