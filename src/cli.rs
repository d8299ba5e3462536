// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Every command except `index` needs a blog config (a JSON file or URL) and
// takes an optional root override for static-mode sites mounted under a
// sub-path.
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "repoblog",
    version,
    about = "List and render markdown blog posts kept in a GitHub repository",
    long_about = "repoblog reads a blog config, lists the markdown posts it points at \
                  (through a GitHub-style contents API or a static index.html), pulls a \
                  title and cover image out of each post, and renders posts as sanitized HTML."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the blog config comes from.
#[derive(Args, Debug)]
pub struct Source {
    /// Path or http(s) URL of the blog config (JSON)
    #[arg(long, short)]
    pub config: String,

    /// Path prefix for static-mode sites mounted below the domain root
    #[arg(long)]
    pub root: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, sorted by the config's fileSortRegex
    ///
    /// Example: repoblog list --config repoblog.json
    List {
        #[command(flatten)]
        source: Source,

        /// Output the listing as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print one post as sanitized HTML
    ///
    /// Example: repoblog show --config repoblog.json 2024-01-01_hello.md
    Show {
        #[command(flatten)]
        source: Source,

        /// File name of the post, as shown by `list`
        name: String,
    },

    /// Render a standalone HTML page with every post behind a popover
    ///
    /// Example: repoblog page --config repoblog.json --output blog.html
    Page {
        #[command(flatten)]
        source: Source,

        /// Write here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Page heading and <title>
        #[arg(long, default_value = "Blog")]
        title: String,

        /// Stylesheet added after the built-in styles (overrides them)
        #[arg(long)]
        css: Option<PathBuf>,
    },

    /// (Re)write index.html for a local directory of posts
    ///
    /// Needed for static mode when the web server doesn't list directories.
    ///
    /// Example: repoblog index public/blog
    Index {
        /// Directory holding the markdown posts
        dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_root() {
        let cli = Cli::parse_from(["repoblog", "list", "-c", "blog.json", "--root", "app", "--json"]);
        match cli.command {
            Commands::List { source, json } => {
                assert_eq!(source.config, "blog.json");
                assert_eq!(source.root.as_deref(), Some("app"));
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn page_title_defaults() {
        let cli = Cli::parse_from(["repoblog", "page", "--config", "https://example.com/b.json"]);
        match cli.command {
            Commands::Page {
                title, output, css, ..
            } => {
                assert_eq!(title, "Blog");
                assert!(output.is_none());
                assert!(css.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn page_accepts_site_css() {
        let cli = Cli::parse_from(["repoblog", "page", "-c", "b.json", "--css", "site.css"]);
        match cli.command {
            Commands::Page { css, .. } => assert_eq!(css, Some(PathBuf::from("site.css"))),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn show_requires_name() {
        assert!(Cli::try_parse_from(["repoblog", "show", "--config", "b.json"]).is_err());
    }
}
