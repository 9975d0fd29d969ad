//! Console logging
//!
//! Tagged, timestamp-free lines. Request lines carry the client
//! address, status code, path, and byte size on success or the error
//! text on failure.

use std::net::SocketAddr;

const TAG: &str = "[UKIYO]";

pub fn log_server_start(addr: &SocketAddr) {
    println!("{TAG} Server can be accessed at the following address:");
    println!("{TAG}   http://{addr}");
}

pub fn log_request_line(client: &str, status: u16, path: &str, size: Option<usize>) {
    match size {
        Some(size) => println!("{TAG} {client} {status} {path} {size} b"),
        None => println!("{TAG} {client} {status} {path}"),
    }
}

pub fn log_request_error(client: &str, status: u16, path: &str, err: &std::io::Error) {
    eprintln!("{TAG} {client} {status} {path} {err}");
}

pub fn log_entry_missing(entry_point: &str) {
    eprintln!("{TAG} Could not read entry file: {entry_point}");
    eprintln!("{TAG} Are you sure it exists?");
}

pub fn log_bind_failed(port: u16, suggested: u16, entry_point: &str, err: &std::io::Error) {
    eprintln!("{TAG} Unable to initialize server on port {port}: {err}");
    eprintln!("{TAG} How about a new port? PORT={suggested} ENTRY_POINT={entry_point} ukiyo");
}

pub fn log_accept_error(err: &std::io::Error) {
    eprintln!("{TAG} Failed to accept connection: {err}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("{TAG} Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("{TAG} {message}");
}
