// src/listing/entry.rs
// =============================================================================
// What a listing is made of.
//
// An Entry starts life as one row of a directory listing (the field names
// follow the GitHub contents API so API responses deserialize straight into
// it), then gets its header filled in from the file's own content.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::BlogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    /// symlink, submodule, anything else the API reports
    #[serde(other)]
    Other,
}

/// Title and image pulled out of a post's leading content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Never filled in; kept so the JSON shape matches what views expect
    #[serde(default)]
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    /// Raw content URL; the API leaves it null for directories
    #[serde(default)]
    pub download_url: Option<String>,
    /// Sort key, the bare filename
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub header: HeaderInfo,
}

impl Entry {
    /// A markdown file entry as discovered in a static index page.
    pub fn markdown_file(name: &str, path: String, download_url: String) -> Self {
        Self {
            name: name.to_string(),
            path,
            kind: EntryType::File,
            download_url: Some(download_url),
            key: basename(name).to_string(),
            header: HeaderInfo::default(),
        }
    }

    /// Only these survive into a listing.
    pub fn is_markdown_file(&self) -> bool {
        self.kind == EntryType::File && self.name.ends_with(".md")
    }

    /// Where the raw markdown lives.
    pub fn content_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    /// What a link should show: the extracted title, else the file name.
    pub fn display_title(&self) -> &str {
        if self.header.title.is_empty() {
            &self.name
        } else {
            &self.header.title
        }
    }
}

/// Result of asking for a listing.
///
/// A failed listing reads as empty through [`Listing::entries`], but the
/// failure is still there for callers that care.
#[derive(Debug)]
pub enum Listing {
    Fetched(Vec<Entry>),
    Failed(BlogError),
}

impl Listing {
    pub fn entries(&self) -> &[Entry] {
        match self {
            Listing::Fetched(entries) => entries,
            Listing::Failed(_) => &[],
        }
    }

    pub fn into_entries(self) -> Vec<Entry> {
        match self {
            Listing::Fetched(entries) => entries,
            Listing::Failed(_) => Vec::new(),
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Listing::Fetched(_))
    }

    pub fn error(&self) -> Option<&BlogError> {
        match self {
            Listing::Fetched(_) => None,
            Listing::Failed(error) => Some(error),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries().iter().find(|entry| entry.name == name)
    }
}

pub(crate) fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
