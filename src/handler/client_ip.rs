//! Client address derivation
//!
//! Best-effort identification of the originating client for log lines.
//! Proxy headers are consulted in a fixed priority order before falling
//! back to the transport peer. Logging only, never access control.

use std::net::SocketAddr;

use hyper::HeaderMap;

/// Secondary proxy headers, checked after the two primary ones.
const LOOKUP_HEADERS: [&str; 5] = [
    "x-real-ip",
    "x-cluster-client-ip",
    "x-forwarded",
    "forwarded-for",
    "forwarded",
];

/// Derive the client address from proxy headers, else the peer address.
pub fn derive(headers: &HeaderMap, peer: SocketAddr) -> String {
    let raw = raw_address(headers).unwrap_or_else(|| peer.ip().to_string());
    unmap_ipv4(&raw)
}

fn raw_address(headers: &HeaderMap) -> Option<String> {
    if let Some(addr) = header_str(headers, "x-client-ip") {
        return Some(addr.to_string());
    }

    // X-Forwarded-For carries a comma list; the first hop is the client.
    if let Some(forwarded) = header_str(headers, "x-forwarded-for") {
        return forwarded.split(',').next().map(|s| s.trim().to_string());
    }

    LOOKUP_HEADERS
        .iter()
        .find_map(|name| header_str(headers, name).map(ToString::to_string))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Strip the `::ffff:` prefix from IPv4-mapped IPv6 addresses.
fn unmap_ipv4(address: &str) -> String {
    address
        .strip_prefix("::ffff:")
        .unwrap_or(address)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::{HeaderName, HeaderValue};

    fn peer() -> SocketAddr {
        "10.0.0.9:50000".parse().unwrap()
    }

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                name.parse::<HeaderName>().unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn prefers_x_client_ip() {
        let map = headers(&[("x-client-ip", "1.2.3.4"), ("x-forwarded-for", "5.6.7.8")]);
        assert_eq!(derive(&map, peer()), "1.2.3.4");
    }

    #[test]
    fn forwarded_for_takes_first_element() {
        let map = headers(&[("x-forwarded-for", "5.6.7.8, 9.9.9.9, 8.8.8.8")]);
        assert_eq!(derive(&map, peer()), "5.6.7.8");
    }

    #[test]
    fn falls_back_through_lookup_headers() {
        let map = headers(&[("x-real-ip", "7.7.7.7")]);
        assert_eq!(derive(&map, peer()), "7.7.7.7");

        let map = headers(&[("forwarded", "2.2.2.2")]);
        assert_eq!(derive(&map, peer()), "2.2.2.2");
    }

    #[test]
    fn peer_address_when_no_headers() {
        assert_eq!(derive(&HeaderMap::new(), peer()), "10.0.0.9");
    }

    #[test]
    fn unmaps_ipv4_in_ipv6() {
        let map = headers(&[("x-client-ip", "::ffff:192.168.0.1")]);
        assert_eq!(derive(&map, peer()), "192.168.0.1");

        let mapped_peer: SocketAddr = "[::ffff:10.1.2.3]:80".parse().unwrap();
        assert_eq!(derive(&HeaderMap::new(), mapped_peer), "10.1.2.3");
    }
}
