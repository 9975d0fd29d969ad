//! HTTP protocol layer module
//!
//! MIME lookup, HTTP-date formatting, and response builders, decoupled
//! from the dispatch logic.

pub mod date;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_500_response, build_entry_response, build_file_response,
};
