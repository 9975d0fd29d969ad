//! HTTP-date formatting for the `Last-Modified` header.

use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// Format a filesystem timestamp as an RFC 7231 HTTP-date.
pub fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
