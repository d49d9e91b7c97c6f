use roomfinder_api::types::BookingStatus;
use roomfinder_api::{
    BookingQuery, Client, Error, ListQuery, PageMeta, PropertyQuery, Query, Session,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), Session::in_memory())
}

#[tokio::test]
async fn get_properties_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("properties.json");

    Mock::given(method("GET"))
        .and(path("/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.get_properties(&PropertyQuery::default()).await.unwrap();

    assert!(page.success);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "p1");
    assert_eq!(page.items[0].currency, "EUR");
    // Missing fields fall back to their defaults.
    assert_eq!(page.items[1].currency, "USD");
    assert_eq!(page.pagination, PageMeta::new(1, 4, 37, 10));
}

#[tokio::test]
async fn get_properties_transport_failure_serves_empty_page() {
    // Nothing listens on port 1; the listing degrades to an empty page
    // instead of surfacing the connection error.
    let client = Client::with_base_url("http://127.0.0.1:1", Session::in_memory());
    let page = client
        .get_properties(&PropertyQuery::default().with_limit(25))
        .await
        .unwrap();

    assert!(page.success);
    assert!(page.items.is_empty());
    assert_eq!(page.pagination, PageMeta::new(1, 1, 0, 25));
}

#[tokio::test]
async fn flat_legacy_bookings_normalize() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("bookings_flat.json");

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .get_guest_bookings(&BookingQuery::default().with_page(2))
        .await
        .unwrap();

    assert!(page.success);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "b1");
    assert_eq!(page.items[0].status, BookingStatus::Confirmed);
    assert_eq!(page.pagination, PageMeta::new(2, 5, 42, 10));
}

#[tokio::test]
async fn nested_legacy_reviews_normalize() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("reviews_nested.json");

    Mock::given(method("GET"))
        .and(path("/host/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.get_host_reviews(&ListQuery::default()).await.unwrap();

    assert!(page.success);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].response.as_deref(), Some("Thanks for the feedback!"));
    assert_eq!(page.pagination, PageMeta::new(1, 1, 2, 10));
}

#[tokio::test]
async fn server_error_surfaces_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"success":false,"message":"Host access only"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_guest_bookings(&BookingQuery::default())
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Host access only");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_hits_empty_response_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_guest_bookings(&BookingQuery::default())
        .await
        .unwrap_err();

    // The unparsable body degrades to an empty object, which then fails
    // the empty-response check; no parse error escapes.
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 200);
            assert_eq!(message, "Empty response from server");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_guest_bookings(&BookingQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { message, .. } if message == "Empty response from server"));
}

#[tokio::test]
async fn authenticated_requests_carry_bearer_token() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("bookings_flat.json");

    // The mock only matches when the Authorization header is present.
    Mock::given(method("GET"))
        .and(path("/bookings"))
        .and(header("authorization", "Bearer tok-abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.session().set_token(Some("tok-abc123"));
    let page = client.get_guest_bookings(&BookingQuery::default()).await.unwrap();
    assert!(page.success);
}

#[tokio::test]
async fn public_requests_omit_authorization() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("properties.json");

    Mock::given(method("GET"))
        .and(path("/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.session().set_token(Some("tok-abc123"));
    client.get_properties(&PropertyQuery::default()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn status_filter_and_page_are_forwarded() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("bookings_flat.json");

    Mock::given(method("GET"))
        .and(path("/host/bookings"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("status", "CONFIRMED"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.session().set_token(Some("tok-abc123"));
    let query = BookingQuery::default()
        .with_status(BookingStatus::Confirmed)
        .with_page(2)
        .with_limit(10);
    let page = client.get_host_bookings(&query).await.unwrap();
    assert!(page.success);
}

#[tokio::test]
async fn login_stores_token_in_session() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("login.json");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let login = client.login("host@example.com", "hunter2").await.unwrap();

    assert_eq!(login.token, "tok-abc123");
    assert_eq!(login.user.email, "host@example.com");
    assert_eq!(client.session().token(), Some("tok-abc123".to_string()));
}

#[tokio::test]
async fn logout_clears_token_even_when_backend_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.session().set_token(Some("tok-abc123"));
    client.logout().await.unwrap();
    assert_eq!(client.session().token(), None);
}

#[tokio::test]
async fn revenue_configs_list_normalizes() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("revenue_configs.json");

    Mock::given(method("GET"))
        .and(path("/admin/revenue-configs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.get_revenue_configs(&ListQuery::default()).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert!(page.items[0].is_active);
    assert_eq!(page.items[0].host_service_fee_max, Some(50.0));
    assert_eq!(page.items[0].guest_service_fee_max, None);
    assert!(!page.items[1].is_active);
}
