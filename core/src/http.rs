//! HTTP requests and responses as plain data.
//!
//! # Design
//! `ListingClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; `ApiClient` (or a test) executes
//! the round-trip in between. This keeps routing and decoding deterministic
//! and testable without a listener.
//!
//! The endpoint is read-only, so `HttpMethod` carries only `Get`.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
///
/// Built by `ListingClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `ListingClient::parse_*` methods for decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
