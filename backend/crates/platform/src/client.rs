//! Client identification utilities
//!
//! Resolves the network origin used as the rate-limit key.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Key used when no origin can be determined (e.g. in-process test requests)
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// Extract client IP address
///
/// When `trust_forwarded_for` is set, the first `X-Forwarded-For` entry wins
/// (only enable this behind a reverse proxy that overwrites the header).
/// Otherwise the direct connection address is used.
pub fn extract_client_ip(
    headers: &HeaderMap,
    direct_ip: Option<IpAddr>,
    trust_forwarded_for: bool,
) -> Option<IpAddr> {
    if trust_forwarded_for {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|xff| xff.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());
        if forwarded.is_some() {
            return forwarded;
        }
    }
    direct_ip
}

/// Rate-limit key for a resolved origin
pub fn origin_key(ip: Option<IpAddr>) -> String {
    ip.map(|ip| ip.to_string())
        .unwrap_or_else(|| UNKNOWN_ORIGIN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn xff_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("192.168.1.1, 10.0.0.1"),
        );
        headers
    }

    #[test]
    fn test_trusted_xff_wins() {
        let direct: IpAddr = "127.0.0.1".parse().unwrap();
        let ip = extract_client_ip(&xff_headers(), Some(direct), true);
        assert_eq!(ip, Some("192.168.1.1".parse().unwrap()));
    }

    #[test]
    fn test_untrusted_xff_ignored() {
        let direct: IpAddr = "127.0.0.1".parse().unwrap();
        let ip = extract_client_ip(&xff_headers(), Some(direct), false);
        assert_eq!(ip, Some(direct));
    }

    #[test]
    fn test_garbage_xff_falls_back() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("not-an-ip"));
        let direct: IpAddr = "10.1.2.3".parse().unwrap();
        assert_eq!(extract_client_ip(&headers, Some(direct), true), Some(direct));
    }

    #[test]
    fn test_origin_key() {
        assert_eq!(origin_key(None), UNKNOWN_ORIGIN);
        assert_eq!(origin_key(Some("::1".parse().unwrap())), "::1");
    }
}
