//! Header injection and signature correctness against a mock HTTP server.

use auth::{ApiCredentials, RequestSigner};
use coinbase_rest::{
    CoinbaseRestClient, ACCESS_KEY_HEADER, PASSPHRASE_HEADER, SIGNATURE_HEADER,
    TIMESTAMP_HEADER,
};
use serde_json::json;
use wiremock::http::HeaderName;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn test_credentials() -> ApiCredentials {
    // "c2VjcmV0" is base64 for "secret"
    ApiCredentials::new("test-key".into(), "c2VjcmV0".into(), "test-phrase".into())
}

fn header_value(request: &Request, name: &str) -> String {
    let name = HeaderName::from_string(name.to_string()).unwrap();
    request
        .headers
        .get(&name)
        .unwrap_or_else(|| panic!("missing header {}", name))
        .last()
        .as_str()
        .to_string()
}

/// Recompute the signature for a captured request and compare it to the
/// signature header the client actually sent.
fn assert_request_signed(request: &Request, body: Option<&str>) {
    let timestamp: i64 = header_value(request, TIMESTAMP_HEADER).parse().unwrap();
    let request_path = match request.url.query() {
        Some(q) => format!("{}?{}", request.url.path(), q),
        None => request.url.path().to_string(),
    };

    let credentials = test_credentials();
    let signer = RequestSigner::new(&credentials);
    let expected = signer
        .sign(timestamp, request.method.as_ref(), &request_path, body)
        .unwrap();

    assert_eq!(header_value(request, SIGNATURE_HEADER), expected);
}

#[tokio::test]
async fn get_carries_static_and_signed_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        CoinbaseRestClient::with_base_url(test_credentials(), &server.uri()).unwrap();
    let _: Vec<serde_json::Value> = client.get("/accounts", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(header_value(request, ACCESS_KEY_HEADER), "test-key");
    assert_eq!(header_value(request, PASSPHRASE_HEADER), "test-phrase");
    assert!(header_value(request, "content-type").starts_with("application/json"));
    assert_request_signed(request, None);
}

#[tokio::test]
async fn query_string_is_covered_by_the_signature() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        CoinbaseRestClient::with_base_url(test_credentials(), &server.uri()).unwrap();
    let _: Vec<serde_json::Value> =
        client.get("/fills", Some("product_id=BTC-USD")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_request_signed(&requests[0], None);
}

#[tokio::test]
async fn post_signs_the_exact_transmitted_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/conversions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        CoinbaseRestClient::with_base_url(test_credentials(), &server.uri()).unwrap();
    let body = json!({"from": "USD", "to": "USDC", "amount": "100.00"});
    let _: serde_json::Value = client.post("/conversions", &body).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];

    let sent_body = std::str::from_utf8(&request.body).unwrap().to_string();
    assert_eq!(sent_body, serde_json::to_string(&body).unwrap());
    assert_request_signed(request, Some(&sent_body));
}

#[tokio::test]
async fn repeated_calls_get_independent_signatures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    // Two calls through the same client: each request must carry its own
    // correctly computed timestamp/signature pair.
    let client =
        CoinbaseRestClient::with_base_url(test_credentials(), &server.uri()).unwrap();
    let _: Vec<serde_json::Value> = client.get("/accounts", None).await.unwrap();
    let _: Vec<serde_json::Value> = client.get("/accounts", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    for request in &requests {
        assert_request_signed(request, None);
    }
}

#[tokio::test]
async fn malformed_secret_fails_before_any_request_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let credentials =
        ApiCredentials::new("key".into(), "not base64!!!".into(), "phrase".into());
    let client = CoinbaseRestClient::with_base_url(credentials, &server.uri()).unwrap();

    let result: Result<Vec<serde_json::Value>, _> = client.get("/accounts", None).await;

    assert!(matches!(
        result,
        Err(coinbase_rest::CoinbaseRestError::Auth(
            auth::AuthError::MalformedSecret
        ))
    ));
}
