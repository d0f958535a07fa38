use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use yatra_api::app_config::MockConfig;
use yatra_api::{app, AppState};

fn test_app() -> axum::Router {
    app(AppState {
        mock: MockConfig { latency_ms: 0, seed: Some(7) },
    })
}

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(path: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn rupees(value: &Value) -> u64 {
    value
        .as_str()
        .expect("formatted price")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

#[tokio::test]
async fn test_round_trip_search_builds_sorted_cross_product() {
    let (status, body) = post_json(
        "/v1/flights/search",
        json!({
            "from": "Delhi",
            "to": "Mumbai",
            "departureDate": "2025-08-01",
            "returnDate": "2025-08-05",
            "tripType": "round-trip",
            "passengers": 2
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["apiStatus"], "mock");
    assert_eq!(body["tripType"], "round-trip");
    assert!(body.get("warnings").is_none());

    let outbound = body["outbound"].as_array().unwrap();
    let returns = body["return"].as_array().unwrap();
    let combinations = body["combinations"].as_array().unwrap();
    assert!(!outbound.is_empty());
    assert!(!returns.is_empty());
    assert_eq!(combinations.len(), outbound.len() * returns.len());
    assert_eq!(body["totalCombinations"], combinations.len());
    assert_eq!(body["total"], outbound.len() + returns.len());

    let totals: Vec<u64> = combinations.iter().map(|c| rupees(&c["totalPrice"])).collect();
    for pair in totals.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[tokio::test]
async fn test_empty_search_still_returns_offers() {
    let (status, body) = post_json("/v1/flights/search", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["tripType"], "one-way");
    assert!(!body["data"].as_array().unwrap().is_empty());
    assert!(body["return"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_same_day_return_downgrades_with_warning() {
    let (status, body) = post_json(
        "/v1/flights/search",
        json!({
            "departure": "Delhi",
            "destination": "Mumbai",
            "departureDate": "2025-08-01",
            "returnDate": "2025-08-01",
            "tripType": "round-trip"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["tripType"], "one-way");
    assert!(body["return"].as_array().unwrap().is_empty());
    assert!(!body["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_best_deals_lead_with_the_cheapest() {
    let (status, body) = post_json(
        "/v1/flights/deals",
        json!({
            "from": "Delhi",
            "to": "Mumbai",
            "departureDate": "2025-08-01",
            "returnDate": "2025-08-05"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let deals = body["data"].as_array().unwrap();
    assert!(deals.len() >= 2);
    assert_eq!(deals[0]["dealType"], "Best Price");
    let best = rupees(&deals[0]["totalPrice"]);
    for deal in deals {
        assert!(best <= rupees(&deal["totalPrice"]));
    }
}

#[tokio::test]
async fn test_best_deals_without_return_date_fail_soft() {
    let (status, body) = post_json(
        "/v1/flights/deals",
        json!({ "from": "Delhi", "to": "Mumbai", "departureDate": "2025-08-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["apiStatus"], "error");
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_hotel_search_sorted_by_rating() {
    let (status, body) = post_json(
        "/v1/hotels/search",
        json!({ "destination": "Goa", "checkIn": "2025-08-01", "checkOut": "2025-08-04" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let hotels = body["data"].as_array().unwrap();
    assert!((8..=12).contains(&hotels.len()));
    let ratings: Vec<f64> = hotels.iter().map(|h| h["rating"].as_f64().unwrap()).collect();
    for pair in ratings.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn test_train_search_sorted_with_classes() {
    let (status, body) = post_json(
        "/v1/trains/search",
        json!({ "from": "New Delhi", "to": "Mumbai Central", "date": "2025-08-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let trains = body["data"].as_array().unwrap();
    assert!(!trains.is_empty());
    let departures: Vec<&str> = trains
        .iter()
        .map(|t| t["departure_time"].as_str().unwrap())
        .collect();
    for pair in departures.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    for train in trains {
        assert!(train["classes"].as_object().unwrap().len() >= 2);
    }
}

#[tokio::test]
async fn test_insurance_quotes_within_band() {
    let (status, body) = post_json(
        "/v1/insurance/quotes",
        json!({ "destination": "Singapore, Asia", "travelers": 2 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let plans = body["data"].as_array().unwrap();
    assert!((6..=8).contains(&plans.len()));
    for plan in plans {
        assert!(rupees(&plan["premium"]) > 0);
    }
}

#[tokio::test]
async fn test_flight_booking_totals_scale_with_passengers() {
    let (_, search) = post_json(
        "/v1/flights/search",
        json!({ "from": "Delhi", "to": "Mumbai", "departureDate": "2025-08-01" }),
    )
    .await;
    let flight = search["data"][0].clone();
    let unit_price = rupees(&flight["price"]);

    let (status, body) = post_json(
        "/v1/bookings/flight",
        json!({
            "flight": flight,
            "passengers": [
                { "name": "Asha Rao", "age": 34 },
                { "name": "Vikram Rao", "age": 36 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let booking = &body["data"];
    assert_eq!(booking["status"], "confirmed");
    assert_eq!(booking["pnr"].as_str().unwrap().len(), 6);
    assert_eq!(rupees(&booking["totalAmount"]), unit_price * 2);
}

#[tokio::test]
async fn test_malformed_body_renders_failure_envelope() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/v1/flights/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["apiStatus"], "error");
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_catalogue_endpoints() {
    let (status, body) = get_json("/v1/flights/destinations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);

    let (status, body) = get_json("/v1/hotels/amenities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 20);

    let (status, body) = get_json("/v1/trains/stations/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);

    let (status, body) = get_json("/v1/trains/pnr/1234567890").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["pnr"], "1234567890");

    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
