//! Request-target resolution against the served root.

use crate::config::Config;
use crate::http::mime;
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// What the server should do for a resolved request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Serve a plain file with the content type resolved from its
    /// extension. Also emitted when the metadata probe failed: the read
    /// decides, so a file created after the probe is still served.
    ServeFile {
        path: PathBuf,
        content_type: &'static str,
    },
    /// The target is a directory containing `index.html`; served as
    /// text/html regardless of the extension table.
    ServeIndex { path: PathBuf },
    /// The target is a directory without an index file; render a
    /// generated listing page.
    ListDirectory { path: PathBuf, display_path: String },
    /// The target escapes the root while confinement is on.
    NotFound,
}

/// Resolves a raw request target (as sent on the request line) to an
/// [`Action`].
///
/// Leading slashes are stripped, everything from the first `?` onward is
/// discarded, and the remainder is percent-decoded before being joined
/// onto the configured root. Each request resolves independently;
/// concurrent requests never block one another.
pub async fn resolve(raw_target: &str, cfg: &Config) -> Action {
    let relative = decode_target(raw_target);
    let candidate = cfg.root.join(&relative);

    if cfg.confine && escapes_root(&candidate, &cfg.root).await {
        return Action::NotFound;
    }

    match tokio::fs::metadata(&candidate).await {
        Ok(meta) if meta.is_dir() => {
            let index = candidate.join("index.html");
            match tokio::fs::metadata(&index).await {
                Ok(m) if m.is_file() => Action::ServeIndex { path: index },
                _ => Action::ListDirectory {
                    display_path: display_path(&relative),
                    path: candidate,
                },
            }
        }
        // Plain file, or the probe failed entirely. Either way the
        // subsequent read settles it: success serves the file, failure
        // converges to 404.
        _ => Action::ServeFile {
            content_type: mime::for_path(&candidate),
            path: candidate,
        },
    }
}

/// Extracts the decoded relative path from a raw request target.
fn decode_target(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('/');
    let without_query = match trimmed.find('?') {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };
    percent_decode_str(without_query)
        .decode_utf8_lossy()
        .into_owned()
}

/// Normalizes a relative path into the display form used for listing
/// hyperlinks: leading and trailing slash, runs of slashes collapsed.
fn display_path(relative: &str) -> String {
    let mut out = String::with_capacity(relative.len() + 2);
    out.push('/');
    for ch in relative.chars() {
        if ch == '/' && out.ends_with('/') {
            continue;
        }
        out.push(ch);
    }
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Checks whether a candidate path resolves outside the root. Only
/// consulted when confinement is enabled.
async fn escapes_root(candidate: &Path, root: &Path) -> bool {
    let root = match tokio::fs::canonicalize(root).await {
        Ok(p) => p,
        Err(_) => return true,
    };

    match tokio::fs::canonicalize(candidate).await {
        Ok(resolved) => !resolved.starts_with(&root),
        // Nonexistent targets fall through to the read, which fails on
        // its own terms.
        Err(_) => false,
    }
}
