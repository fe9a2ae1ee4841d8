use std::time::Duration;

use standings_api::{Client, Credentials, Error, StandingsQuery};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn credentials() -> Credentials {
    Credentials {
        api_key: "test-key".to_string(),
        api_host: "v3.football.api-sports.io".to_string(),
    }
}

#[tokio::test]
async fn get_standings_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("standings.json");

    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2023"))
        .and(query_param("league", "39"))
        .and(header("x-rapidapi-key", "test-key"))
        .and(header("x-rapidapi-host", "v3.football.api-sports.io"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), credentials()).unwrap();
    let response = client
        .get_standings(&StandingsQuery::new(39, 2023))
        .await
        .unwrap();

    let leagues = response.as_array().unwrap();
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0]["league"]["name"], "Premier League");
    assert_eq!(
        leagues[0]["league"]["standings"][0].as_array().unwrap().len(),
        3
    );
}

#[tokio::test]
async fn get_standings_server_error_is_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), credentials()).unwrap();
    let err = client
        .get_standings(&StandingsQuery::new(39, 2023))
        .await
        .unwrap_err();

    match err {
        Error::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected Http, got {:?}", other),
    }
}

#[tokio::test]
async fn get_standings_forbidden_is_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(403).set_body_string("{\"message\":\"forbidden\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), credentials()).unwrap();
    let err = client
        .get_standings(&StandingsQuery::new(39, 2023))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http { status: 403, .. }));
    assert_eq!(err.kind(), "http");
}

#[tokio::test]
async fn get_standings_malformed_json_is_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), credentials()).unwrap();
    let err = client
        .get_standings(&StandingsQuery::new(39, 2023))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unexpected(_)));
}

#[tokio::test]
async fn get_standings_missing_response_field_is_unexpected() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("no_response.json");

    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), credentials()).unwrap();
    let err = client
        .get_standings(&StandingsQuery::new(39, 2023))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unexpected(_)));
}

#[tokio::test]
async fn get_standings_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("standings.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_timeout(
        &mock_server.uri(),
        credentials(),
        Duration::from_millis(200),
    )
    .unwrap();
    let err = client
        .get_standings(&StandingsQuery::new(39, 2023))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout), "got {:?}", err);
}

#[tokio::test]
async fn get_standings_connection_refused_is_network() {
    // Bind and immediately drop a server so the port is closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = Client::with_base_url(&uri, credentials()).unwrap();
    let err = client
        .get_standings(&StandingsQuery::new(39, 2023))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network(_)), "got {:?}", err);
}
