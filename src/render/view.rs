// src/render/view.rs
// =============================================================================
// The contract between the blog and whatever displays a post.
//
// A view only knows two things: show this (already sanitized) HTML next to
// that anchor, and hide. Selection drives it: picking an entry fetches and
// renders the post then shows it, picking nothing hides it.
// =============================================================================

use tracing::warn;

use super::markdown::SanitizedHtml;
use crate::blog::RepoBlog;
use crate::http::Transport;
use crate::listing::Entry;

pub trait ContentView {
    /// Display `html` at the element identified by `anchor` (the entry name).
    fn show(&mut self, anchor: &str, html: &SanitizedHtml);

    fn hide(&mut self);
}

/// Tracks which entry is open and keeps a view in step with it.
pub struct Selection<'a, T> {
    blog: &'a RepoBlog<T>,
    active: Option<Entry>,
}

impl<'a, T: Transport> Selection<'a, T> {
    pub fn new(blog: &'a RepoBlog<T>) -> Self {
        Self { blog, active: None }
    }

    pub fn active(&self) -> Option<&Entry> {
        self.active.as_ref()
    }

    /// Select `entry` (or nothing) and update `view`.
    ///
    /// A post that can't be fetched is logged and leaves the view hidden.
    pub async fn select<V: ContentView>(&mut self, entry: Option<&Entry>, view: &mut V) {
        self.active = entry.cloned();

        let Some(entry) = entry else {
            view.hide();
            return;
        };

        match self.blog.content(entry).await {
            Ok(html) => view.show(&entry.name, &html),
            Err(e) => {
                warn!("could not show {}: {}", entry.name, e);
                view.hide();
            }
        }
    }
}
