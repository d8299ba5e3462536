// src/listing/html.rs
// =============================================================================
// Parsing a static directory's index.html.
//
// In static mode there is no API to ask, so the directory has to carry an
// index page (a web server's autoindex, or one written by `repoblog index`).
// Every <a href> whose target ends in ".md" becomes a file entry.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM
// - Supports CSS selectors for finding elements
// =============================================================================

use scraper::{Html, Selector};

use super::entry::{basename, Entry};

// Extracts markdown entries from an index page
//
// Parameters:
//   html: the index page
//   listing_url: the directory URL, without a trailing slash
//   content_prefix: where the raw files are served from
//
// Example:
//   html = "<a href='first_post.md'>first_post.md</a>"
//   listing_url = "/blog"
//   result = [Entry { name: "first_post.md", path: "/blog/first_post.md", .. }]
pub fn parse_index(html: &str, listing_url: &str, content_prefix: &str) -> Vec<Entry> {
    let document = Html::parse_document(html);

    // Our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").expect("static selector is valid");

    let prefix = content_prefix.strip_suffix('/').unwrap_or(content_prefix);

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(strip_query)
        .filter(|href| href.ends_with(".md"))
        .map(|href| {
            let name = basename(href);
            Entry::markdown_file(
                name,
                format!("{}/{}", listing_url, name),
                format!("{}/{}", prefix, name),
            )
        })
        .collect()
}

// "a.md?raw=1#top" -> "a.md"
fn strip_query(href: &str) -> &str {
    href.split(['?', '#']).next().unwrap_or(href)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why only the basename of the href?
//    - Index pages link files relative to themselves ("a.md"), but some
//      servers emit absolute links ("/blog/a.md" or a full URL)
//    - Taking the last segment and rebuilding both URLs from our own config
//      gives the same entry either way
//
// 2. Why filter_map + map + filter instead of a loop?
//    - Each step is one rule: has an href, drop the query, is markdown
//    - Iterator chains are lazy, so nothing is built until .collect()
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::EntryType;

    #[test]
    fn finds_markdown_links() {
        let html = r#"
            <table>
              <tr><td><a href="first_post.md">first_post.md</a></td></tr>
              <tr><td><a href="cover.png">cover.png</a></td></tr>
              <tr><td><a href="drafts/">drafts/</a></td></tr>
            </table>
        "#;
        let entries = parse_index(html, "/blog", "/blog");
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.name, "first_post.md");
        assert_eq!(entry.key, "first_post.md");
        assert_eq!(entry.kind, EntryType::File);
        assert_eq!(entry.path, "/blog/first_post.md");
        assert_eq!(entry.content_url(), Some("/blog/first_post.md"));
    }

    #[test]
    fn absolute_links_reduced_to_basename() {
        let html = r#"<a href="https://example.com/blog/a.md">a</a><a href="/blog/b.md?x=1">b</a>"#;
        let entries = parse_index(html, "/blog", "/blog/");
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
        assert_eq!(entries[1].content_url(), Some("/blog/b.md"));
    }

    #[test]
    fn anchors_without_href_ignored() {
        let html = r#"<a name="top">a.md</a><a href="">empty</a>"#;
        assert!(parse_index(html, "/blog", "/blog").is_empty());
    }
}
