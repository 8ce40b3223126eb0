//! Typed async client for the real-estate listings API.
//!
//! # Overview
//! One endpoint: `GET /realestate` returning a JSON array of listings. The
//! crate splits the work into a deterministic layer that builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network, and
//! a thin transport layer (`ApiClient`) that executes those requests over
//! reqwest and exposes a process-wide shared instance.
//!
//! # Design
//! - `ListingClient` is stateless — it holds only `base_url`.
//! - The fetch operation is split into `build_fetch_properties` (produces
//!   request) and `parse_fetch_properties` (consumes response), so routing
//!   and decoding stay independently testable.
//! - `ApiClient::shared()` lazily constructs one transport per process via
//!   `OnceLock`; every caller observes the same instance.
//! - Decoding is deliberately permissive: missing listing fields default to
//!   empty strings rather than failing the whole response.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use api::{ApiClient, DEFAULT_BASE_URL};
pub use client::ListingClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::Listing;
