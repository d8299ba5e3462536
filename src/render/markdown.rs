// src/render/markdown.rs
// =============================================================================
// Markdown to HTML that is safe to drop into a page.
//
// Two crates do the work:
// - pulldown-cmark parses the post (CommonMark plus tables, strikethrough and
//   task lists) and writes HTML; raw HTML inside the post passes through
// - ammonia then cleans that HTML against a whitelist: <script>, event
//   handler attributes and javascript: URLs are gone afterwards
//
// The result is wrapped in SanitizedHtml so a view can only ever be handed
// HTML that went through the cleaner.
// =============================================================================

use std::fmt;

use pulldown_cmark::{html, Options, Parser};

/// HTML that has been through the sanitizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Already escaped, so maud must not escape it again
impl maud::Render for SanitizedHtml {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}

pub fn render_markdown(markdown: &str) -> SanitizedHtml {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut unsafe_html = String::new();
    html::push_html(&mut unsafe_html, parser);

    sanitize(&unsafe_html)
}

pub fn sanitize(unsafe_html: &str) -> SanitizedHtml {
    // Task list items render as disabled checkboxes
    let clean = ammonia::Builder::default()
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .clean(unsafe_html)
        .to_string();
    SanitizedHtml(clean)
}
