//! Client metadata extraction from edge proxy headers.

use axum::http::HeaderMap;

/// Header carrying the connecting client's IP, set by the edge proxy.
pub const CONNECTING_IP_HEADER: &str = "cf-connecting-ip";

/// Header carrying the geo-derived country code.
pub const GEO_COUNTRY_HEADER: &str = "cf-ipcountry";

/// Header carrying the geo-derived city name.
pub const GEO_CITY_HEADER: &str = "cf-ipcity";

/// Placeholder used when a header is absent or not valid UTF-8.
pub const UNKNOWN: &str = "unknown";

/// Geo and network metadata for the connecting client.
///
/// All fields fall back to `"unknown"`: the edge proxy only sets these
/// headers when the information is derivable, and a missing header must
/// never fail a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMeta {
    pub country: String,
    pub city: String,
    pub ip: String,
}

impl ClientMeta {
    /// Extracts client metadata from request headers.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut headers = HeaderMap::new();
    /// headers.insert("cf-ipcountry", "DE".parse().unwrap());
    ///
    /// let meta = ClientMeta::from_headers(&headers);
    /// assert_eq!(meta.country, "DE");
    /// assert_eq!(meta.city, "unknown");
    /// ```
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            country: header_or_unknown(headers, GEO_COUNTRY_HEADER),
            city: header_or_unknown(headers, GEO_CITY_HEADER),
            ip: header_or_unknown(headers, CONNECTING_IP_HEADER),
        }
    }
}

fn header_or_unknown(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(UNKNOWN)
        .to_string()
}
