// src/render/mod.rs
// =============================================================================
// The presentation side:
// - markdown: post -> sanitized HTML
// - page: the static widget page (link buttons + popovers)
// - view: the show/hide contract for interactive hosts
// =============================================================================

mod markdown;
mod page;
mod view;

pub use markdown::{render_markdown, sanitize, SanitizedHtml};
pub use page::{popover_id, render_page, render_widget, Post, DEFAULT_IMAGE};
pub use view::{ContentView, Selection};
