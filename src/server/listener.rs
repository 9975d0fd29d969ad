// Listener construction
// Builds the nonblocking TCP listener the accept loop runs on.

use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a nonblocking `TcpListener` bound to `addr`.
///
/// `SO_REUSEADDR` is set so a quick restart can rebind while the old
/// socket sits in `TIME_WAIT`.
pub fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Tokio requires the socket in nonblocking mode.
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Pick a port to suggest after a failed bind: strictly above the
/// configured port, below `port + 1000`.
///
/// Near the top of the port range the sum saturates at 65535; for
/// `port = 65535` itself there is no strictly greater port to offer
/// and the configured port comes back unchanged.
pub fn suggest_alternate_port(port: u16) -> u16 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos());
    let offset = u16::try_from(nanos % 999).unwrap_or(0);
    port.saturating_add(offset + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_stays_in_range() {
        for _ in 0..64 {
            let suggested = suggest_alternate_port(8080);
            assert!(suggested > 8080);
            assert!(suggested < 9080);
        }
    }

    #[test]
    fn suggestion_saturates_at_port_range_top() {
        assert_eq!(suggest_alternate_port(65535), 65535);
        let near_top = suggest_alternate_port(65000);
        assert!(near_top > 65000);
    }
}
