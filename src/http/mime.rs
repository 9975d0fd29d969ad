//! MIME type detection
//!
//! Maps a resolved file path to the Content-Type it is served with.
//! Unknown extensions fall back to a generic octet stream.

use std::path::Path;

/// Content-Type for a file, derived from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    content_type(path.extension().and_then(|e| e.to_str()))
}

/// Content-Type for a bare extension (no leading dot).
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Markup and text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Application code and data
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Media
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        Some("pdf") => "application/pdf",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_spa_assets() {
        assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Some("js")), "application/javascript");
        assert_eq!(content_type(Some("map")), "application/json");
        assert_eq!(content_type(Some("css")), "text/css");
        assert_eq!(content_type(Some("woff2")), "font/woff2");
        assert_eq!(content_type(Some("svg")), "image/svg+xml");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type(None), "application/octet-stream");
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(
            content_type_for(Path::new("/srv/app/bundle.min.js")),
            "application/javascript"
        );
        assert_eq!(
            content_type_for(Path::new("/srv/app/LICENSE")),
            "application/octet-stream"
        );
    }
}
