//! Integration tests for the Mapbox clients (wiremock-based)

use domain::{Coordinate, TravelMode};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_mapbox::{
    DirectionsClient, GeocodingClient, MapboxConfig, MapboxDirectionsClient, MapboxError,
    MapboxGeocodingClient,
};

const fn sample_places_json() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "query": ["bidhan"],
        "features": [
            {"id": "place.101", "type": "Feature", "place_type": ["place"], "relevance": 1,
             "place_name": "Bidhannagar, West Bengal, India", "center": [88.4172, 22.5867]},
            {"id": "place.102", "type": "Feature", "place_type": ["place"], "relevance": 0.8,
             "place_name": "Bidhan Sarani, Kolkata, India", "center": [88.3700, 22.5900]}
        ]
    }"#
}

fn many_places_json(count: usize) -> String {
    let features: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id": "place.{i}", "place_name": "Place {i}, India", "center": [88.{i}, 22.5], "relevance": 0.5}}"#
            )
        })
        .collect();
    format!(
        r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
        features.join(",")
    )
}

const fn sample_directions_json() -> &'static str {
    r#"{
        "code": "Ok",
        "routes": [{
            "distance": 7412.3,
            "duration": 1139.9,
            "weight_name": "auto",
            "geometry": {"type": "LineString", "coordinates": [[88.4172, 22.5867], [88.3901, 22.5790], [88.3639, 22.5726]]},
            "legs": [{"steps": [
                {"maneuver": {"instruction": "Head west on Broadway"}},
                {"maneuver": {"instruction": "Turn left onto EM Bypass"}},
                {"maneuver": {"instruction": "You have arrived at your destination"}}
            ]}]
        }]
    }"#
}

fn bidhannagar() -> Coordinate {
    Coordinate::new(88.4172, 22.5867).unwrap()
}

#[tokio::test]
async fn test_suggest_sends_autocomplete_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v5/mapbox.places/bidhan.json"))
        .and(query_param("access_token", "pk.test-token"))
        .and(query_param("autocomplete", "true"))
        .and(query_param("types", "place"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_places_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let places = client.suggest("bidhan").await.unwrap();

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].place_name, "Bidhannagar, West Bengal, India");
    assert_eq!(places[0].center, bidhannagar());
}

#[tokio::test]
async fn test_suggest_truncates_to_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v5/mapbox.places/place.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(many_places_json(8)))
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let places = client.suggest("place").await.unwrap();

    assert_eq!(places.len(), 5);
    assert_eq!(places[0].id, "place.0");
    assert_eq!(places[4].id, "place.4");
}

#[tokio::test]
async fn test_forward_geocode_returns_best_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/geocoding/v5/mapbox.places/Bidhannagar,%20West%20Bengal,%20India.json",
        ))
        .and(query_param("limit", "1"))
        .and(query_param_is_missing("autocomplete"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_places_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let place = client
        .forward_geocode("Bidhannagar, West Bengal, India")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(place.id, "place.101");
}

#[tokio::test]
async fn test_forward_geocode_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v5/mapbox.places/zzzzqqqq.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"type": "FeatureCollection", "features": []}"#),
        )
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let place = client.forward_geocode("zzzzqqqq").await.unwrap();

    assert!(place.is_none());
}

#[tokio::test]
async fn test_geocoding_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message": "Not Authorized - Invalid Token"}"#),
        )
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let result = client.suggest("kolkata").await;

    assert!(matches!(result, Err(MapboxError::Unauthorized(_))));
}

#[tokio::test]
async fn test_geocoding_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "12"))
        .mount(&server)
        .await;

    let client = MapboxGeocodingClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let result = client.suggest("kolkata").await;

    assert!(matches!(
        result,
        Err(MapboxError::RateLimitExceeded {
            retry_after_secs: Some(12)
        })
    ));
}

#[tokio::test]
async fn test_geocoding_cache_avoids_second_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v5/mapbox.places/bidhan.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_places_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = MapboxConfig {
        cache_ttl_minutes: 5,
        ..MapboxConfig::for_testing(server.uri())
    };
    let client = MapboxGeocodingClient::new(&config).unwrap();

    let first = client.suggest("bidhan").await.unwrap();
    let second = client.suggest("Bidhan").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_directions_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/directions/v5/mapbox/driving/88.4172,22.5867;88.3639,22.5726",
        ))
        .and(query_param("steps", "true"))
        .and(query_param("geometries", "geojson"))
        .and(query_param("access_token", "pk.test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MapboxDirectionsClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let response = client
        .directions(TravelMode::Driving, bidhannagar(), Coordinate::kolkata())
        .await
        .unwrap();

    let route = &response.routes[0];
    assert!((route.duration - 1139.9).abs() < f64::EPSILON);
    assert_eq!(route.geometry.len(), 3);
    assert_eq!(route.instructions[0], "Head west on Broadway");
    assert_eq!(route.weight_name, "auto");
}

#[tokio::test]
async fn test_directions_uses_mode_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/directions/v5/mapbox/walking/88.4172,22.5867;88.3639,22.5726",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MapboxDirectionsClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let result = client
        .directions(TravelMode::Walking, bidhannagar(), Coordinate::kolkata())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_directions_no_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"code": "NoRoute", "message": "No route found", "routes": []}"#),
        )
        .mount(&server)
        .await;

    let client = MapboxDirectionsClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let response = client
        .directions(TravelMode::Cycling, bidhannagar(), Coordinate::kolkata())
        .await
        .unwrap();

    assert!(response.routes.is_empty());
}

#[tokio::test]
async fn test_directions_invalid_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(422).set_body_string(
            r#"{"message": "Route exceeds maximum distance limitation", "code": "InvalidInput"}"#,
        ))
        .mount(&server)
        .await;

    let client = MapboxDirectionsClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let result = client
        .directions(TravelMode::Walking, bidhannagar(), Coordinate::kolkata())
        .await;

    assert!(matches!(result, Err(MapboxError::InvalidInput(ref m)) if m.contains("maximum distance")));
}

#[tokio::test]
async fn test_directions_server_error_is_retryable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = MapboxDirectionsClient::new(&MapboxConfig::for_testing(server.uri())).unwrap();
    let err = client
        .directions(TravelMode::Driving, bidhannagar(), Coordinate::kolkata())
        .await
        .unwrap_err();

    assert!(err.is_retryable());
}
