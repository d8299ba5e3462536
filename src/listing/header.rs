// src/listing/header.rs
// =============================================================================
// Best-effort header extraction from a post's markdown.
//
// This deliberately does not run a markdown parser: the title is "whatever
// follows the first `# `" and the image is the first `![..](..)` on a line.
// Posts are hand-written and short, and the cheap scan is what decides how
// the link looks, nothing more.
//
// Rules:
// - title: text after the first "# " up to the end of that line; when there
//   is none, the filename without ".md" and with '_' turned into spaces
// - image: target of the first markdown image, made absolute against the
//   content prefix; absolute http(s) targets are left alone
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use super::entry::{basename, HeaderInfo};

// `.` does not cross newlines, so an image tag has to sit on one line
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("image pattern is valid"));

/// Header for a post called `name` whose content is `markdown`.
pub fn parse_header(name: &str, markdown: &str, content_prefix: &str) -> HeaderInfo {
    HeaderInfo {
        title: extract_title(markdown).unwrap_or_else(|| default_title(name)),
        image: extract_image(markdown, content_prefix),
        preview: String::new(),
    }
}

/// Header used whenever the content can't be had.
pub fn fallback_header(name: &str) -> HeaderInfo {
    HeaderInfo {
        title: default_title(name),
        ..HeaderInfo::default()
    }
}

/// "2024_first_post.md" -> "2024 first post"
pub fn default_title(filename: &str) -> String {
    let name = basename(filename);
    name.strip_suffix(".md").unwrap_or(name).replace('_', " ")
}

pub fn extract_title(markdown: &str) -> Option<String> {
    let start = markdown.find("# ")? + 2;
    let rest = &markdown[start..];
    let end = rest.find('\n').unwrap_or(rest.len());
    let title = rest[..end].trim_end();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

pub fn extract_image(markdown: &str, content_prefix: &str) -> Option<String> {
    let captures = IMAGE.captures(markdown)?;
    // Drop an optional "title" after the target
    let target = captures.get(1)?.as_str().split_whitespace().next()?;

    if target.starts_with("http://") || target.starts_with("https://") {
        return Some(target.to_string());
    }

    let relative = target.strip_prefix("./").unwrap_or(target);
    let relative = relative.strip_prefix('/').unwrap_or(relative);
    let prefix = content_prefix.strip_suffix('/').unwrap_or(content_prefix);
    Some(format!("{}/{}", prefix, relative))
}
