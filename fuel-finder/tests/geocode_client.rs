//! Integration tests for `NominatimClient` using wiremock HTTP mocks.

use fuel_finder::domain::Position;
use fuel_finder::geocode::{GeocodeConfig, GeocodeError, LocationResolver, NominatimClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NominatimClient {
    let config = GeocodeConfig::new()
        .with_base_url(base_url)
        .with_user_agent("fuel-finder-tests")
        .with_timeout(5);
    NominatimClient::new(config).expect("client construction should not fail")
}

#[tokio::test]
async fn reverse_sends_coordinates_and_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "48.8566"))
        .and(query_param("lon", "2.3522"))
        .and(query_param("format", "json"))
        .and(header("user-agent", "fuel-finder-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "place_id": 88066702,
            "display_name": "Rue de Rivoli, Paris, France",
            "address": {
                "road": "Rue de Rivoli",
                "city": "Paris",
                "postcode": "75001",
                "country": "France"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client.reverse(48.8566, 2.3522).await.expect("should parse");

    let address = response.address.expect("address present");
    assert_eq!(address.road.as_deref(), Some("Rue de Rivoli"));
    assert_eq!(address.city.as_deref(), Some("Paris"));
    assert_eq!(
        response.display_name.as_deref(),
        Some("Rue de Rivoli, Paris, France")
    );
}

#[tokio::test]
async fn resolver_builds_origin_from_live_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": { "road": "Rue de Rivoli", "city": "Paris" }
        })))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(test_client(&server.uri()));
    let origin = resolver.resolve(Position::new(48.8566, 2.3522)).await;

    assert_eq!(origin, "Rue de Rivoli Paris");
}

#[tokio::test]
async fn unable_to_geocode_is_empty_origin() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": "Unable to geocode" })),
        )
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(test_client(&server.uri()));
    let origin = resolver.resolve(Position::new(0.0, -160.0)).await;

    assert_eq!(origin, "");
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.reverse(48.8566, 2.3522).await.unwrap_err();

    match err {
        GeocodeError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Too Many Requests");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    let resolver = LocationResolver::new(client);
    assert_eq!(resolver.resolve(Position::new(48.8566, 2.3522)).await, "");
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.reverse(48.8566, 2.3522).await.unwrap_err();

    assert!(matches!(err, GeocodeError::Json { .. }));
}

#[tokio::test]
async fn missing_coordinate_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(test_client(&server.uri()));
    let origin = resolver
        .resolve(Position {
            latitude: Some(48.8566),
            longitude: None,
        })
        .await;

    assert_eq!(origin, "");
}
