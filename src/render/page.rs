// src/render/page.rs
// =============================================================================
// The widget as a static HTML page.
//
// One button per post (image + title caption). Each button opens a popover
// holding that post's rendered content, with a close button. Everything is
// done with the HTML `popover` attribute, so the page needs no script.
//
// Class names are stable so a site can restyle the widget:
//   repoblog_links, repoblog_link, repoblog_link_button,
//   repoblog_link_image, repoblog_link_caption, repoblog_content
// =============================================================================

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::markdown::SanitizedHtml;
use crate::listing::Entry;

/// Shown when a post has no image of its own.
pub const DEFAULT_IMAGE: &str = "data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 32'%3E%3Cpath d='M2 1h14l6 6v24H2z' fill='%23f4f4f4' stroke='%23999'/%3E%3Cpath d='M6 14h12M6 18h12M6 22h8' stroke='%23999'/%3E%3C/svg%3E";

const DEFAULT_CSS: &str = "\
.repoblog_links { display: flex; flex-wrap: wrap; gap: 1rem; }
.repoblog_link_button { display: flex; flex-direction: column; align-items: center; width: 10rem; padding: 0.5rem; border: 1px solid #ccc; border-radius: 0.5rem; background: none; cursor: pointer; }
.repoblog_link_image { width: 8rem; height: 8rem; object-fit: cover; }
.repoblog_link_caption { margin-top: 0.5rem; }
.repoblog_content { max-width: 50rem; max-height: 80vh; overflow: auto; padding: 1.5rem; }
.repoblog_content img { max-width: 100%; }
.repoblog_close { float: right; }
";

/// A post ready to be shown: its entry plus rendered content, if any.
#[derive(Debug, Clone)]
pub struct Post {
    pub entry: Entry,
    pub content: Option<SanitizedHtml>,
}

/// Full standalone document. `extra_css` is appended after the built-in
/// styles, so a site stylesheet can override any of the classes above.
pub fn render_page(title: &str, posts: &[Post], extra_css: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                // Raw text element: escaping would break selectors like `a > b`
                style { (PreEscaped(DEFAULT_CSS)) }
                @if let Some(css) = extra_css {
                    style { (PreEscaped(css)) }
                }
            }
            body {
                h1 { (title) }
                (render_widget(posts))
            }
        }
    }
}

/// Just the widget, for embedding into an existing page.
pub fn render_widget(posts: &[Post]) -> Markup {
    html! {
        div.repoblog_links {
            @for (idx, post) in posts.iter().enumerate() {
                (render_link(idx, &post.entry))
            }
        }
        @for (idx, post) in posts.iter().enumerate() {
            (render_popover(idx, post))
        }
    }
}

fn render_link(idx: usize, entry: &Entry) -> Markup {
    let title = entry.display_title();
    let image = entry.header.image.as_deref().unwrap_or(DEFAULT_IMAGE);

    html! {
        div.repoblog_link {
            button.repoblog_link_button type="button" popovertarget=(popover_id(idx, &entry.name)) {
                img.repoblog_link_image src=(image) alt=(title);
                div.repoblog_link_caption { (title) }
            }
        }
    }
}

fn render_popover(idx: usize, post: &Post) -> Markup {
    let id = popover_id(idx, &post.entry.name);

    html! {
        div.repoblog_content id=(id) popover="auto" {
            button.repoblog_close type="button" popovertarget=(id) popovertargetaction="hide" {
                "×"
            }
            @match &post.content {
                Some(content) => { (content) }
                None => { p { "This post could not be loaded." } }
            }
        }
    }
}

/// Element id for the post at position `idx`: "repoblog-{idx}-" plus the
/// filename with anything outside [A-Za-z0-9_-] replaced by '-'.
///
/// The slug alone is lossy ("a.b.md" and "a-b.md" share one); the position
/// keeps ids unique within a page.
pub fn popover_id(idx: usize, name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect();
    format!("repoblog-{}-{}", idx, slug)
}
