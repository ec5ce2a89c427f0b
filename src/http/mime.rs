//! MIME type detection based on file extensions.

use std::path::Path;

/// Content type used when the extension is unknown or missing.
pub const FALLBACK: &str = "application/octet-stream";

/// Maps a lower-cased filename extension (including the leading dot) to
/// its MIME type. Total function: unknown extensions map to
/// [`FALLBACK`].
///
/// # Example
///
/// ```
/// # use rapide::http::mime::content_type;
/// assert_eq!(content_type(".png"), "image/png");
/// assert_eq!(content_type(".nope"), "application/octet-stream");
/// ```
pub fn content_type(extension: &str) -> &'static str {
    match extension {
        ".avi" => "video/avi",
        ".bmp" => "image/bmp",
        ".css" => "text/css",
        ".gif" => "image/gif",
        ".svg" => "image/svg+xml",
        ".htm" => "text/html",
        ".html" => "text/html",
        ".ico" => "image/x-icon",
        ".jpeg" => "image/jpeg",
        ".jpg" => "image/jpeg",
        ".js" => "text/javascript",
        ".json" => "application/json",
        ".mov" => "video/quicktime",
        ".mp3" => "audio/mpeg3",
        ".mpa" => "audio/mpeg",
        ".mpeg" => "video/mpeg",
        ".mpg" => "video/mpeg",
        ".oga" => "audio/ogg",
        ".ogg" => "application/ogg",
        ".ogv" => "video/ogg",
        ".pdf" => "application/pdf",
        ".png" => "image/png",
        ".tif" => "image/tiff",
        ".tiff" => "image/tiff",
        ".txt" => "text/plain",
        ".wav" => "audio/wav",
        ".xml" => "text/xml",
        _ => FALLBACK,
    }
}

/// Resolves the content type for a filesystem path from its extension,
/// case-insensitively.
pub fn for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => content_type(&format!(".{}", ext.to_ascii_lowercase())),
        None => FALLBACK,
    }
}
