//! Wire DTOs for the real-estate listings API.
//!
//! # Design
//! Field names on the wire (`id`, `img_src`, `price`, `type`) are an external
//! contract with the server and are preserved verbatim through serde rename
//! attributes. Every field defaults to an empty string when absent: the
//! upstream data contains partial records, and a single missing field must
//! not fail the whole response. This is a deliberately weak validation
//! contract, not an oversight — `price` stays textual because the source
//! data carries non-numeric placeholders.

use serde::{Deserialize, Serialize};

/// A single real-estate listing returned by the API.
///
/// Immutable once decoded; owned by the caller that issued the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    #[serde(default)]
    pub id: String,

    /// Raw image path or URL fragment.
    #[serde(rename = "img_src", default)]
    pub image_url: String,

    /// Kept as text: the source data may contain non-numeric placeholders.
    #[serde(default)]
    pub price: String,

    /// Listing type, e.g. `"rent"` or `"buy"`; drives display logic downstream.
    #[serde(rename = "type", default)]
    pub kind: String,
}
