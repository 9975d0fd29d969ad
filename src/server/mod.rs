// Server module entry point
// Listener construction, the accept loop, and per-connection serving.

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the file keeps the short name and the module
// gets an explicit path.
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::{create_listener, suggest_alternate_port};
pub use server_loop::run_accept_loop;
