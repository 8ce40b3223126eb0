//! Verify build/parse stages against JSON test vectors in `test-vectors/`.
//!
//! # Design
//! Each case describes the expected request, a simulated response, and either
//! the expected listings or the expected error class. Expected listings are
//! written in wire shape and deserialized through the same serde mapping the
//! client uses, so renames and defaults are exercised on both sides.

use realestate_core::{ApiError, HttpMethod, HttpResponse, Listing, ListingClient};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> ListingClient {
    ListingClient::new(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

#[test]
fn fetch_test_vectors() {
    let raw = include_str!("../../test-vectors/fetch.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_fetch_properties();
        assert_eq!(
            req.method,
            parse_method(expected_req["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(
            req.path,
            format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: path"
        );
        assert!(req.body.is_none(), "{name}: body must be empty");
        assert!(req.headers.is_empty(), "{name}: headers must be empty");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };

        match c.parse_fetch_properties(response) {
            Ok(listings) => {
                let expected: Vec<Listing> =
                    serde_json::from_value(case["expected_result"].clone())
                        .unwrap_or_else(|_| panic!("{name}: expected an error, got {listings:?}"));
                assert_eq!(listings, expected, "{name}: parsed result");
            }
            Err(err) => {
                let expected_err = case
                    .get("expected_error")
                    .unwrap_or_else(|| panic!("{name}: unexpected error {err}"));
                match expected_err["kind"].as_str().unwrap() {
                    "http_status" => {
                        let want = expected_err["status"].as_u64().unwrap() as u16;
                        match err {
                            ApiError::HttpStatus { status, .. } => {
                                assert_eq!(status, want, "{name}: status");
                            }
                            other => panic!("{name}: expected HttpStatus, got {other:?}"),
                        }
                    }
                    "decode" => {
                        assert!(
                            matches!(err, ApiError::Decode { .. }),
                            "{name}: expected Decode, got {err:?}"
                        );
                    }
                    other => panic!("{name}: unknown error kind {other}"),
                }
            }
        }
    }
}
