//! Generated directory-listing pages.

use crate::config::Config;
use anyhow::Context;
use std::path::Path;
use tokio::task::JoinSet;

/// Renders the HTML listing page for a directory.
///
/// Children are enumerated in one pass, then each child is stat'ed
/// concurrently; the page renders only after every stat has completed.
/// Children whose stat fails are silently excluded. Both entry sets are
/// sorted lexicographically, so the page is deterministic for a given
/// directory state.
///
/// Enumeration failure is an error: the caller turns it into a 500 for
/// this request alone.
pub async fn render(dir: &Path, display_path: &str, cfg: &Config) -> anyhow::Result<String> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    // Fan out one stat per child, fan in via the join set.
    let mut stats = JoinSet::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to enumerate {}", dir.display()))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        stats.spawn(async move {
            let meta = tokio::fs::metadata(&path).await.ok()?;
            Some((name, meta.is_dir()))
        });
    }

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    while let Some(joined) = stats.join_next().await {
        match joined {
            Ok(Some((name, true))) => dirs.push(format!("{name}/")),
            Ok(Some((name, false))) => files.push(name),
            // Failed stats drop the entry from the page.
            _ => {}
        }
    }

    dirs.sort();
    files.sort();

    Ok(render_page(&dirs, &files, display_path, cfg))
}

const BODY_STYLE: &str = "margin-left: 25px; -webkit-font-smoothing: antialiased; \
    font-family: '-apple-system', 'system-ui', 'BlinkMacSystemFont', 'Segoe UI', \
    'Roboto', 'Helvetica Neue', 'Arial', 'sans-serif', 'Apple Color Emoji', \
    'Segoe UI Emoji', 'Segoe UI Symbol';";

fn render_page(dirs: &[String], files: &[String], display_path: &str, cfg: &Config) -> String {
    let mut items = String::new();
    for dir in dirs {
        items.push_str(&format!(
            "<li>\u{1F4C1} <a href=\"{display_path}{dir}\">{dir}</a></li>\n"
        ));
    }
    for file in files {
        items.push_str(&format!(
            "<li>\u{1F4C4} <a href=\"{display_path}{file}\">{file}</a></li>\n"
        ));
    }

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head>\
         <body style=\"{BODY_STYLE}\">\n\
         <h1>Index of <b>{display_path}</b></h1>\n\
         <ul style=\"list-style-type: none;\">\n{items}</ul>\n\
         <footer style=\"font-size:14px\"><i>rapide \u{203A} Serving \"{root}\" at \
         <a href=\"#\">{addr}</a></i></footer>\n\
         </body></html>",
        root = cfg.root.display(),
        addr = cfg.listen_addr(),
    )
}
