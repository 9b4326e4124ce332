use agentq_client::{GENERIC_ERROR_MESSAGE, QuerySession};
use agentq_core::{AgentKind, ClientConfig, ConversationId, SessionPhase};
use mockito::Matcher;
use serde_json::json;

fn test_session(server: &mockito::ServerGuard) -> QuerySession {
    let config = ClientConfig::with_endpoint(server.url()).expect("valid endpoint");
    QuerySession::with_conversation_id(&config, ConversationId::from_string("conv_test_1"))
}

#[tokio::test]
async fn test_empty_query_issues_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/query")
        .expect(0)
        .create_async()
        .await;

    let mut session = test_session(&server);
    session.submit("").await;
    session.submit("   \t\n").await;

    assert_eq!(*session.phase(), SessionPhase::Idle);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_sends_raw_query_and_conversation_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/query")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "query": "  What is the capital of France? ",
            "context": {},
            "conversation_id": "conv_test_1",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "response": "Paris is the capital.",
                "sources": [{"title": "Doc A", "page": 12, "relevance": 0.87}],
                "domain": "clinical",
                "confidence": 0.95,
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let mut session = test_session(&server);
    // The untrimmed text is sent as-is; trimming only gates submission.
    let phase = session.submit("  What is the capital of France? ").await;

    let result = phase.result().expect("phase should be Success");
    assert_eq!(result.response, "Paris is the capital.");
    assert_eq!(result.agent, AgentKind::Clinical);
    assert_eq!(result.agent.label(), "Clinical Agent");
    assert_eq!(result.sources.len(), 1);
    assert_eq!(
        result.sources[0].display_line(),
        "Doc A — Page: 12 — Relevance: 87%"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_domain_falls_back_to_default_label() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/query")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "response": "Hello.",
                "sources": [],
                "domain": "unknown_agent",
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut session = test_session(&server);
    let phase = session.submit("hi").await;

    let result = phase.result().expect("phase should be Success");
    assert_eq!(result.agent, AgentKind::Chat);
    assert_eq!(result.agent.label(), "Chat Agent");
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn test_server_error_yields_generic_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/query")
        .with_status(500)
        .with_body("internal failure with technical detail")
        .create_async()
        .await;

    let mut session = test_session(&server);
    let phase = session.submit("anything").await;

    assert_eq!(phase.error_message(), Some(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_malformed_body_yields_generic_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/query")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"unexpected\": true}")
        .create_async()
        .await;

    let mut session = test_session(&server);
    let phase = session.submit("anything").await;

    assert_eq!(phase.error_message(), Some(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_connection_failure_yields_generic_message() {
    // Endpoint nobody is listening on.
    let config = ClientConfig::with_endpoint("http://127.0.0.1:9").expect("valid endpoint");
    let mut session =
        QuerySession::with_conversation_id(&config, ConversationId::from_string("conv_test_1"));

    let phase = session.submit("anything").await;

    assert_eq!(phase.error_message(), Some(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_sequential_submits_share_conversation_id_without_stale_data() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("POST", "/query")
        .match_body(Matcher::Json(json!({
            "query": "first",
            "context": {},
            "conversation_id": "conv_test_1",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "response": "first answer",
                "sources": [{"title": "Doc A", "page": 1, "relevance": 0.9}],
                "domain": "clinical",
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/query")
        .match_body(Matcher::Json(json!({
            "query": "second",
            "context": {},
            "conversation_id": "conv_test_1",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "response": "second answer",
                "sources": [],
                "domain": "food_security",
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let mut session = test_session(&server);

    let phase = session.submit("first").await;
    assert_eq!(phase.result().unwrap().response, "first answer");

    let phase = session.submit("second").await;
    let result = phase.result().unwrap();
    assert_eq!(result.response, "second answer");
    assert_eq!(result.agent, AgentKind::FoodSecurity);
    // The second result fully replaces the first; nothing accumulates.
    assert!(result.sources.is_empty());

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_error_clears_prior_success() {
    let mut server = mockito::Server::new_async().await;
    let _good = server
        .mock("POST", "/query")
        .match_body(Matcher::Json(json!({
            "query": "good",
            "context": {},
            "conversation_id": "conv_test_1",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"response": "ok", "sources": [], "domain": "web"}).to_string(),
        )
        .create_async()
        .await;
    let _bad = server
        .mock("POST", "/query")
        .match_body(Matcher::Json(json!({
            "query": "bad",
            "context": {},
            "conversation_id": "conv_test_1",
        })))
        .with_status(503)
        .create_async()
        .await;

    let mut session = test_session(&server);

    let phase = session.submit("good").await;
    assert!(phase.result().is_some());

    // Once the next submission fails, the prior success is gone.
    let phase = session.submit("bad").await;
    assert!(phase.result().is_none());
    assert_eq!(phase.error_message(), Some(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_health_probe() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "healthy",
                "document_collections": ["clinical", "food_security"],
            })
            .to_string(),
        )
        .create_async()
        .await;

    let session = test_session(&server);
    let health = session.client().health().await.expect("health should parse");

    assert_eq!(health.status, "healthy");
    assert_eq!(health.document_collections.len(), 2);
}
