// src/main.rs
// =============================================================================
// Entry point of the repoblog CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the blog config and set up logging from its debug flag
// 3. Dispatch to the subcommand handler
// 4. Exit with proper code (0 = success, 1 = listing degraded, 2 = error)
//
// Logs go to stderr through tracing; stdout only carries the listing, the
// HTML, or the JSON the user asked for.
// =============================================================================

mod cli;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, Source};
use repoblog::render::render_page;
use repoblog::{
    BlogConfig, ContentView, DebugMode, Entry, Listing, RepoBlog, ReqwestTransport,
    SanitizedHtml, Selection,
};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { source, json } => handle_list(&source, json).await,
        Commands::Show { source, name } => handle_show(&source, &name).await,
        Commands::Page {
            source,
            output,
            title,
            css,
        } => handle_page(&source, output.as_deref(), &title, css.as_deref()).await,
        Commands::Index { dir } => {
            init_tracing(DebugMode::Off);
            handle_index(&dir)
        }
    }
}

// RUST_LOG wins; otherwise warnings only, or debug output from this crate
// when the config asks for it
fn init_tracing(debug: DebugMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug.enabled() {
            EnvFilter::new("warn,repoblog=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn open_blog(source: &Source) -> Result<RepoBlog<ReqwestTransport>> {
    let transport = ReqwestTransport::new()?;
    let config = BlogConfig::load(&source.config, &transport)
        .await
        .with_context(|| format!("could not load blog config from {}", source.config))?;

    // The subscriber depends on the config, so the load is only logged now
    init_tracing(config.debug);
    log_config_loaded(&source.config, &config);
    Ok(RepoBlog::new(config, source.root.as_deref(), transport))
}

fn log_config_loaded(source: &str, config: &BlogConfig) {
    debug!(source, html_mode = config.is_html_mode(), "loaded blog config");
}

// Handles the 'list' subcommand
async fn handle_list(source: &Source, json: bool) -> Result<i32> {
    let blog = open_blog(source).await?;
    let listing = blog.list().await;

    if json {
        println!("{}", serde_json::to_string_pretty(listing.entries())?);
    } else {
        print_table(listing.entries());
    }

    Ok(degraded_exit_code(&listing))
}

// Handles the 'show' subcommand
async fn handle_show(source: &Source, name: &str) -> Result<i32> {
    let blog = open_blog(source).await?;
    let listing = blog.list().await;

    let entry = match (listing.find(name), listing.error()) {
        (Some(entry), _) => entry,
        (None, Some(e)) => return Err(anyhow!("no listing to look up '{}' in: {}", name, e)),
        (None, None) => return Err(anyhow!("no post named '{}'", name)),
    };

    let mut view = PrintView::default();
    Selection::new(&blog).select(Some(entry), &mut view).await;

    if view.printed {
        Ok(0)
    } else {
        Err(anyhow!("could not load '{}'", name))
    }
}

// Handles the 'page' subcommand
async fn handle_page(
    source: &Source,
    output: Option<&Path>,
    title: &str,
    css: Option<&Path>,
) -> Result<i32> {
    let site_css = css
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("could not read stylesheet {}", path.display()))
        })
        .transpose()?;

    let blog = open_blog(source).await?;
    let listing = blog.list().await;
    let exit_code = degraded_exit_code(&listing);

    let posts = blog.posts(listing.into_entries()).await;
    let html = render_page(title, &posts, site_css.as_deref()).into_string();

    match output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("could not write {}", path.display()))?;
            eprintln!("📄 Wrote {} post(s) to {}", posts.len(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(exit_code)
}

// Handles the 'index' subcommand
fn handle_index(dir: &Path) -> Result<i32> {
    let path = repoblog::index::write_index(dir)
        .with_context(|| format!("could not index {}", dir.display()))?;
    println!("✅ Wrote {}", path.display());
    Ok(0)
}

fn degraded_exit_code(listing: &Listing) -> i32 {
    match listing.error() {
        Some(e) => {
            eprintln!("⚠️  Listing unavailable, showing nothing: {}", e);
            1
        }
        None => 0,
    }
}

// Prints the listing as a human-readable table
fn print_table(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No posts found");
        return;
    }

    println!("{:<40} {:<40} {}", "TITLE", "FILE", "IMAGE");
    println!("{}", "=".repeat(100));

    for entry in entries {
        println!(
            "{:<40} {:<40} {}",
            truncate(entry.display_title(), 40),
            truncate(&entry.name, 40),
            entry.header.image.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!("📋 Total: {}", entries.len());
}

// Shortens a string to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(4)).collect();
    format!("{}...", kept)
}

// Shows a post by printing it; there is nothing to hide on a terminal
#[derive(Default)]
struct PrintView {
    printed: bool,
}

impl ContentView for PrintView {
    fn show(&mut self, _anchor: &str, html: &SanitizedHtml) {
        println!("{}", html);
        self.printed = true;
    }

    fn hide(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_marks_cut() {
        let cut = truncate("a fairly long post title", 10);
        assert_eq!(cut, "a fair...");
        assert!(cut.chars().count() < 10);
    }

    #[test]
    fn failed_listing_exits_with_one() {
        let listing = Listing::Failed(repoblog::BlogError::NotFound("x".into()));
        assert_eq!(degraded_exit_code(&listing), 1);
        assert_eq!(degraded_exit_code(&Listing::Fetched(Vec::new())), 0);
    }

    #[test]
    fn config_load_is_logged_once_a_subscriber_exists() {
        #[derive(Clone, Default)]
        struct Buffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

        impl std::io::Write for Buffer {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let config = BlogConfig::default();
        tracing::subscriber::with_default(subscriber, || {
            log_config_loaded("blog.json", &config);
        });

        let log = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(log.contains("loaded blog config"));
        assert!(log.contains("blog.json"));
    }

    #[test]
    fn print_view_records_show() {
        let mut view = PrintView::default();
        view.show("a.md", &SanitizedHtml::default());
        assert!(view.printed);
    }
}
