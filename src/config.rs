// src/config.rs
// =============================================================================
// The blog configuration record and the URLs derived from it.
//
// A config is a small JSON document:
//
//   {
//     "apiUrl": "https://api.github.com/repos",
//     "rawUrl": "https://raw.githubusercontent.com",
//     "user": "someone", "repo": "site", "branch": "main",
//     "basePath": "blog",
//     "fileSortRegex": "\\d{4}-\\d{2}-\\d{2}",
//     "isRepo": true,
//     "debug": false
//   }
//
// Two modes:
// - API mode (isRepo true, the default): the listing comes from a
//   GitHub-style contents API, content from a raw-file host.
// - Static mode (isRepo false): basePath is a directory on the site that
//   carries an index.html listing its markdown files.
// =============================================================================

use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::debug;
use url::Url;

use crate::blocking;
use crate::error::{BlogError, Result};
use crate::http::Transport;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogConfig {
    /// Contents API root, e.g. https://api.github.com/repos
    pub api_url: String,
    /// Raw file host, e.g. https://raw.githubusercontent.com
    pub raw_url: String,
    pub user: String,
    pub repo: String,
    pub branch: String,
    /// Directory holding the posts (repo path in API mode, site path otherwise)
    pub base_path: String,
    /// Filenames matching this pattern sort first, by the matched text
    pub file_sort_regex: String,
    /// false switches to static HTML-index mode
    pub is_repo: bool,
    pub debug: DebugMode,
    /// Origin that root-relative static-mode URLs are resolved against
    pub site_url: Option<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            raw_url: String::new(),
            user: String::new(),
            repo: String::new(),
            branch: String::new(),
            base_path: String::new(),
            file_sort_regex: String::new(),
            is_repo: true,
            debug: DebugMode::Off,
            site_url: None,
        }
    }
}

/// How chatty the resolver is.
///
/// In JSON this is `false`, `true` or `"verbose"`. Any other non-empty
/// string counts as `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DebugMode {
    #[default]
    Off,
    On,
    /// Also log every URL fetched
    Verbose,
}

impl DebugMode {
    pub fn enabled(self) -> bool {
        !matches!(self, DebugMode::Off)
    }

    pub fn verbose(self) -> bool {
        matches!(self, DebugMode::Verbose)
    }
}

impl<'de> Deserialize<'de> for DebugMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Level(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => DebugMode::Off,
            Raw::Flag(true) => DebugMode::On,
            Raw::Level(level) if level == "verbose" => DebugMode::Verbose,
            Raw::Level(level) if level.is_empty() => DebugMode::Off,
            Raw::Level(_) => DebugMode::On,
        })
    }
}

impl BlogConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a config from a file path or an http(s) URL.
    pub async fn load<T: Transport>(source: &str, transport: &T) -> Result<Self> {
        let text = if is_remote(source) {
            transport.get_text(source).await?
        } else {
            tokio::fs::read_to_string(Path::new(source)).await?
        };
        let config = Self::from_json(&text)?;
        debug!(source, html_mode = config.is_html_mode(), "loaded blog config");
        Ok(config)
    }

    /// Blocking twin of [`BlogConfig::load`]. Must not be called from
    /// inside a tokio runtime.
    pub fn load_blocking<T: Transport>(source: &str, transport: &T) -> Result<Self> {
        blocking::block_on(Self::load(source, transport))?
    }

    pub fn is_html_mode(&self) -> bool {
        !self.is_repo
    }

    /// Base URL that raw markdown files and their images are served from.
    pub fn content_prefix(&self, root: Option<&str>) -> String {
        if self.is_html_mode() {
            let mut base = self.base_path.as_str();
            // Files under public/ are served from the site root
            if let Some(idx) = base.find("public") {
                base = base.get(idx + "public/".len()..).unwrap_or("");
            }
            let url = match root.filter(|r| !r.is_empty()) {
                Some(root) => format!("/{}/{}", root, base),
                None => format!("/{}", base),
            };
            return collapse_slashes(&url);
        }

        format!(
            "{}/{}/{}/refs/heads/{}/{}",
            self.raw_url, self.user, self.repo, self.branch, self.base_path
        )
    }

    /// URL the directory listing is fetched from.
    ///
    /// In static mode this is the content directory itself; the listing
    /// code appends `index.html`.
    pub fn listing_url(&self, root: Option<&str>) -> String {
        if self.is_html_mode() {
            return self.content_prefix(root);
        }

        format!(
            "{}/{}/{}/contents/{}?ref={}",
            self.api_url, self.user, self.repo, self.base_path, self.branch
        )
    }

    /// Turn a root-relative URL into an absolute one using `siteUrl`.
    ///
    /// Absolute URLs, and everything when no site URL is configured, come
    /// back unchanged.
    pub fn resolve(&self, url: &str) -> Result<String> {
        if Url::parse(url).is_ok() {
            return Ok(url.to_string());
        }
        let Some(site) = self.site_url.as_deref() else {
            return Ok(url.to_string());
        };

        let base = Url::parse(site).map_err(|source| BlogError::Url {
            url: site.to_string(),
            source,
        })?;
        let joined = base.join(url).map_err(|source| BlogError::Url {
            url: url.to_string(),
            source,
        })?;
        Ok(joined.to_string())
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockTransport;
    use std::io::Write;

    fn api_config() -> BlogConfig {
        BlogConfig::from_json(
            r#"{
                "apiUrl": "https://api.github.com/repos",
                "rawUrl": "https://raw.githubusercontent.com",
                "user": "someone",
                "repo": "site",
                "branch": "main",
                "basePath": "blog",
                "fileSortRegex": "\\d+"
            }"#,
        )
        .unwrap()
    }

    fn static_config(base_path: &str) -> BlogConfig {
        BlogConfig {
            base_path: base_path.to_string(),
            is_repo: false,
            ..BlogConfig::default()
        }
    }

    #[test]
    fn parses_camel_case_with_defaults() {
        let config = api_config();
        assert_eq!(config.user, "someone");
        assert_eq!(config.file_sort_regex, "\\d+");
        assert!(config.is_repo);
        assert_eq!(config.debug, DebugMode::Off);
        assert_eq!(config.site_url, None);
    }

    #[test]
    fn debug_flag_accepts_bool_and_verbose() {
        let on = BlogConfig::from_json(r#"{"debug": true}"#).unwrap();
        assert_eq!(on.debug, DebugMode::On);
        let verbose = BlogConfig::from_json(r#"{"debug": "verbose"}"#).unwrap();
        assert!(verbose.debug.verbose());
        let off = BlogConfig::from_json(r#"{"debug": false}"#).unwrap();
        assert!(!off.debug.enabled());
        let other = BlogConfig::from_json(r#"{"debug": "yes"}"#).unwrap();
        assert_eq!(other.debug, DebugMode::On);
    }

    #[test]
    fn api_mode_urls() {
        let config = api_config();
        assert_eq!(
            config.content_prefix(None),
            "https://raw.githubusercontent.com/someone/site/refs/heads/main/blog"
        );
        assert_eq!(
            config.listing_url(None),
            "https://api.github.com/repos/someone/site/contents/blog?ref=main"
        );
    }

    #[test]
    fn static_mode_strips_public_prefix() {
        let config = static_config("site/public/blog");
        assert_eq!(config.content_prefix(None), "/blog");
        assert_eq!(config.listing_url(None), "/blog");
    }

    #[test]
    fn static_mode_applies_root_and_collapses_slashes() {
        let config = static_config("/posts/");
        assert_eq!(config.content_prefix(Some("app")), "/app/posts/");
        assert_eq!(config.content_prefix(Some("")), "/posts/");
        assert_eq!(static_config("public").content_prefix(None), "/");
    }

    #[test]
    fn resolve_joins_onto_site_url() {
        let mut config = static_config("blog");
        assert_eq!(config.resolve("/blog/index.html").unwrap(), "/blog/index.html");

        config.site_url = Some("https://example.com/".to_string());
        assert_eq!(
            config.resolve("/blog/index.html").unwrap(),
            "https://example.com/blog/index.html"
        );
        assert_eq!(
            config.resolve("https://cdn.example.com/a.png").unwrap(),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn resolve_rejects_bad_site_url() {
        let mut config = static_config("blog");
        config.site_url = Some("not a url".to_string());
        assert!(matches!(config.resolve("/blog"), Err(BlogError::Url { .. })));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"basePath": "blog", "isRepo": false}}"#).unwrap();

        let transport = MockTransport::new();
        let config =
            BlogConfig::load_blocking(file.path().to_str().unwrap(), &transport).unwrap();
        assert!(config.is_html_mode());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn loads_from_url() {
        let transport = MockTransport::new()
            .with_body("https://example.com/repoblog.json", r#"{"user": "someone"}"#);
        let config = BlogConfig::load("https://example.com/repoblog.json", &transport)
            .await
            .unwrap();
        assert_eq!(config.user, "someone");
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let transport = MockTransport::new();
        let result = BlogConfig::load("/definitely/not/here.json", &transport).await;
        assert!(matches!(result, Err(BlogError::Io(_))));
    }
}
