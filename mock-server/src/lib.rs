use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// A real-estate listing in the wire shape the production API serves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub img_src: String,
    #[serde(default)]
    pub price: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

pub type Db = Arc<RwLock<Vec<Listing>>>;

/// Router serving an empty listing array.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-seeded with listings, served in the given order. The API is
/// read-only, so fixtures go in at construction time.
pub fn app_with(listings: Vec<Listing>) -> Router {
    let db: Db = Arc::new(RwLock::new(listings));
    Router::new().route("/realestate", get(list_properties)).with_state(db)
}

/// Router whose `/realestate` always fails with 500, for client error tests.
pub fn app_failing() -> Router {
    Router::new().route(
        "/realestate",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal error") }),
    )
}

pub async fn run(listener: TcpListener, listings: Vec<Listing>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(listings)).await
}

pub async fn run_failing(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app_failing()).await
}

async fn list_properties(State(db): State<Db>) -> Json<Vec<Listing>> {
    let listings = db.read().await;
    Json(listings.clone())
}

/// A handful of listings shaped like the production data set.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "424906".to_string(),
            img_src: "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000ML0044631300305227E03_DXXX.jpg".to_string(),
            price: "450000".to_string(),
            kind: "rent".to_string(),
        },
        Listing {
            id: "424907".to_string(),
            img_src: "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000ML0044631290305226E03_DXXX.jpg".to_string(),
            price: "8000000".to_string(),
            kind: "buy".to_string(),
        },
        Listing {
            id: "424908".to_string(),
            img_src: "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000ML0044631280305225E03_DXXX.jpg".to_string(),
            price: "3000000".to_string(),
            kind: "buy".to_string(),
        },
    ]
}
