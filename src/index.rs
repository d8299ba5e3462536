// src/index.rs
// =============================================================================
// Writes index.html for a local directory of posts.
//
// Static mode reads the listing out of {dir}/index.html. Most web servers can
// generate one, but when the directory is deployed as plain files (GitHub
// Pages, an S3 bucket) something has to write it. This does: a table of
// name, size and modification time, one row per file or directory, skipping
// dot-files and the index itself.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use maud::{html, Markup, DOCTYPE};
use tracing::debug;

use crate::error::Result;

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub name: String,
    /// None for directories
    pub size: Option<u64>,
    pub modified: Option<DateTime<Utc>>,
}

/// Regenerate `dir/index.html`; returns the path written.
pub fn write_index(dir: &Path) -> Result<PathBuf> {
    let rows = collect_rows(dir)?;
    let path = dir.join(INDEX_FILE);
    fs::write(&path, render_index(&rows).into_string())?;
    debug!(path = %path.display(), rows = rows.len(), "wrote index");
    Ok(path)
}

/// Directory rows sorted by name, dot-files and the index left out.
pub fn collect_rows(dir: &Path) -> Result<Vec<IndexRow>> {
    let mut rows = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name == INDEX_FILE {
            continue;
        }

        let metadata = entry.metadata()?;
        rows.push(IndexRow {
            name,
            size: (!metadata.is_dir()).then(|| metadata.len()),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        });
    }

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(rows)
}

pub fn render_index(rows: &[IndexRow]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            body {
                table {
                    thead {
                        tr.header id="theader" {
                            th id="nameColumnHeader" { "Name" }
                            th id="sizeColumnHeader" { "Size" }
                            th id="dateColumnHeader" { "Modified" }
                        }
                    }
                    tbody id="tbody" {
                        @for row in rows {
                            tr {
                                td { a href=(row.name) { (row.name) } }
                                td {
                                    @if let Some(size) = row.size { (size) }
                                }
                                td {
                                    @if let Some(modified) = row.modified { (modified.to_rfc2822()) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
