//! Search, graph and event builders against a mock Orchestrate server.

use orchestrate_client::{Body, Error, OrchestrateClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> OrchestrateClient {
    OrchestrateClient::builder()
        .token("test-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_builder_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/users"))
        .and(query_param("query", "location:NYC"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 10, "total_count": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .search_builder()
        .collection("users")
        .limit(10)
        .offset(20)
        .query("location:NYC")
        .await
        .unwrap();
    assert_eq!(response.body.as_json().unwrap()["total_count"], 42);
}

#[tokio::test]
async fn test_search_builder_omits_unset_paging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .mount(&server)
        .await;

    client(&server)
        .search_builder()
        .collection("users")
        .query("*")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("query=*"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Graph
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_graph_create() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/v0/users/byrd%40bowery.io/relation/friend/users/sjkaliski%40gmail.com",
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .graph_builder()
        .from("users", "byrd@bowery.io")
        .related("friend")
        .to("users", "sjkaliski@gmail.com")
        .create()
        .await
        .unwrap();
    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn test_graph_remove_purges() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(
            "/v0/users/byrd%40bowery.io/relation/friend/users/sjkaliski%40gmail.com",
        ))
        .and(query_param("purge", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .graph_builder()
        .from("users", "byrd@bowery.io")
        .related("friend")
        .to("users", "sjkaliski@gmail.com")
        .remove()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_graph_get_walks_kinds() {
    let server = MockServer::start().await;
    let results = json!({"count": 1, "results": [{"path": {"key": "sjkaliski@gmail.com"}}]});

    Mock::given(method("GET"))
        .and(path("/v0/users/byrd%40bowery.io/relations/friend/family"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&results))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .graph_reader()
        .from("users", "byrd@bowery.io")
        .related("friend")
        .related("family")
        .get()
        .await
        .unwrap();
    assert_eq!(response.body, Body::Json(results));
}

#[tokio::test]
async fn test_graph_mode_violation_sends_nothing() {
    let server = MockServer::start().await;

    let err = client(&server)
        .graph_reader()
        .from("users", "a")
        .related("friend")
        .to("users", "b")
        .remove()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidMode { action: "remove", .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_event_create_with_time() {
    let server = MockServer::start().await;
    let data = json!({"text": "Went skiing."});

    Mock::given(method("PUT"))
        .and(path("/v0/users/byrd%40bowery.io/event/activities/1384534722568"))
        .and(body_json(&data))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .event_builder()
        .from("users", "byrd@bowery.io")
        .event_type("activities")
        .time(1384534722568)
        .data(data)
        .create()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_event_create_without_time() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v0/users/byrd%40bowery.io/event/activities"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .event_builder()
        .from("users", "byrd@bowery.io")
        .event_type("activities")
        .data(json!({"text": "Went skiing."}))
        .create()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_event_get_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/users/byrd%40bowery.io/event/activities"))
        .and(query_param("start", "1384534722000"))
        .and(query_param("end", "1384534723000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .event_reader()
        .from("users", "byrd@bowery.io")
        .event_type("activities")
        .start(1384534722000)
        .end(1384534723000)
        .get()
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_event_get_without_range_has_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/users/byrd%40bowery.io/event/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .mount(&server)
        .await;

    client(&server)
        .event_reader()
        .from("users", "byrd@bowery.io")
        .event_type("activities")
        .get()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_builders_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    let first = client.search_builder().collection("users").limit(1).query("a");
    let second = client.search_builder().collection("users").query("b");
    let (a, b) = tokio::join!(first, second);
    a.unwrap();
    b.unwrap();

    let mut queries: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.query().unwrap_or_default().to_string())
        .collect();
    queries.sort();
    assert_eq!(queries, vec!["query=a&limit=1", "query=b"]);
}
