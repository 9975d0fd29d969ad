//! Request handling module
//!
//! Path resolution, client address derivation, and the dispatch logic
//! that routes every request to exactly one responder: file content,
//! Not Found, or the entry-point fallback.

pub mod client_ip;
pub mod dispatch;
pub mod resolve;
pub mod respond;

// Re-export main entry point
pub use dispatch::handle_request;
