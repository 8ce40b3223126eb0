//! Async transport layer and process-wide shared client.
//!
//! # Design
//! `ApiClient` pairs a reqwest transport (the connection pool) with the
//! deterministic `ListingClient` stages: `fetch_properties` executes the
//! built request, then hands the raw response to `parse_fetch_properties`.
//! `ApiClient::shared()` constructs one transport per process, on first
//! access, through a `OnceLock`; concurrent first callers all observe the
//! same instance and construction runs at most once. The transport is never
//! torn down and stays reusable after a failed call.
//!
//! No total-request timeout is set by default (reqwest's default); use
//! `with_timeout` to opt into one. Dropping the future returned by
//! `fetch_properties` aborts the in-flight request and releases the
//! connection.

use std::sync::OnceLock;
use std::time::Duration;

use crate::client::ListingClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpResponse};
use crate::types::Listing;

/// Production endpoint; override with the `REALESTATE_BASE_URL` env var.
pub const DEFAULT_BASE_URL: &str = "https://mars.udacity.com/";

const BASE_URL_ENV: &str = "REALESTATE_BASE_URL";

static SHARED: OnceLock<ApiClient> = OnceLock::new();

/// Async client for the listings API: a reqwest connection pool plus the
/// stateless request/parse stages.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: reqwest::Client,
    routes: ListingClient,
}

impl ApiClient {
    /// Client with reqwest's default transport configuration (in particular,
    /// no total-request timeout).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let transport = reqwest::Client::builder().build()?;
        Ok(Self {
            transport,
            routes: ListingClient::new(base_url),
        })
    }

    /// Client with a total-request timeout. The timeout is an option of the
    /// transport, not an invariant of the API.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let transport = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            transport,
            routes: ListingClient::new(base_url),
        })
    }

    /// The process-wide shared client, constructed on first access.
    ///
    /// Base URL comes from `REALESTATE_BASE_URL` if set, else
    /// [`DEFAULT_BASE_URL`]. Construction happens at most once even when
    /// racing first callers; every call returns the same instance.
    pub fn shared() -> &'static ApiClient {
        SHARED.get_or_init(|| {
            let base_url =
                std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
            ApiClient::new(&base_url).expect("failed to build shared HTTP transport")
        })
    }

    /// Fetch all listings from `GET /realestate`, in wire order.
    ///
    /// Suspends for the network round-trip; each call is independent and
    /// terminal on error (no retries, no partial results).
    pub async fn fetch_properties(&self) -> Result<Vec<Listing>, ApiError> {
        let req = self.routes.build_fetch_properties();
        let builder = match req.method {
            HttpMethod::Get => self.transport.get(&req.path),
        };
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        self.routes.parse_fetch_properties(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
