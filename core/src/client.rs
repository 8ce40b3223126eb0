//! Stateless request builder and response parser for the listings API.
//!
//! # Design
//! `ListingClient` holds only a `base_url` and carries no mutable state
//! between calls. The one operation is split into `build_fetch_properties`,
//! which produces an `HttpRequest`, and `parse_fetch_properties`, which
//! consumes an `HttpResponse`. The caller executes the actual HTTP
//! round-trip, keeping this layer deterministic and free of I/O.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Listing;

/// Stateless client for the listings API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `ApiClient` executes the HTTP round-trip between
/// the two stages.
#[derive(Debug, Clone)]
pub struct ListingClient {
    base_url: String,
}

impl ListingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `<base_url>/realestate` — no query parameters, no headers, no body.
    pub fn build_fetch_properties(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/realestate", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Decode the response body as a JSON array of listings, in wire order.
    ///
    /// An empty array yields an empty vec, not an error. Missing fields on
    /// individual listings default to empty strings (see `types`).
    pub fn parse_fetch_properties(&self, response: HttpResponse) -> Result<Vec<Listing>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            message: e.to_string(),
            body: response.body,
        })
    }
}

/// Map non-2xx status codes to `ApiError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
