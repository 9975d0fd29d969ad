//! Request path resolution
//!
//! Maps a URL path onto the working directory and classifies it as an
//! asset-looking path or an application route. The joined path is used
//! as-is: no canonicalization and no `..` rejection. This is a
//! development server; it serves whatever its working directory reaches,
//! and that contract is deliberate rather than an oversight.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// A request path mapped onto the filesystem.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Candidate location under the working directory.
    pub path: PathBuf,
    /// Substring of the URL path from its first `.`; empty when dotless.
    pub extension: String,
}

impl Resolved {
    /// Whether the request path looks like a static asset.
    ///
    /// A dot anywhere in the path counts, unless a `/` follows it: then
    /// the dot belonged to a directory name and the path is treated as
    /// an application route.
    pub fn is_asset(&self) -> bool {
        !self.extension.is_empty() && !self.extension.contains('/')
    }
}

/// Resolve a raw URL path (query string already stripped) against the
/// working directory.
pub fn resolve(raw_path: &str, root: &Path) -> Resolved {
    let decoded = percent_decode_str(raw_path)
        .decode_utf8()
        .map_or_else(|_| raw_path.to_string(), |d| d.into_owned());

    let extension = decoded
        .find('.')
        .map(|i| decoded[i..].to_string())
        .unwrap_or_default();

    let path = root.join(decoded.trim_start_matches('/'));

    Resolved { path, extension }
}
