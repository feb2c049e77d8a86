// tests/openai_provider_test.rs
// OpenAiProvider against an in-process chat completions server

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use mindcare::companion::fallback::{DEFAULT_FALLBACK, HAPPY_FALLBACK};
use mindcare::companion::{ConversationTurn, EmotionClassifier, EmotionSignal, ResponseGenerator};
use mindcare::llm::{ChatMessage, CompletionRequest, LlmError, LlmProvider, OpenAiProvider};
use mindcare::CompanionConfig;

#[derive(Clone)]
enum Canned {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
}

struct MockServer {
    canned: Canned,
    bodies: Mutex<Vec<Value>>,
    auth: Mutex<Vec<String>>,
}

async fn chat_completions(
    State(server): State<Arc<MockServer>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    server.bodies.lock().unwrap().push(body);
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    server.auth.lock().unwrap().push(auth);

    match server.canned.clone() {
        Canned::Json(status, value) => (status, Json(value)).into_response(),
        Canned::Text(status, text) => (status, text).into_response(),
    }
}

async fn spawn_server(canned: Canned) -> (String, Arc<MockServer>) {
    let server = Arc::new(MockServer {
        canned,
        bodies: Mutex::new(Vec::new()),
        auth: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(server.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), server)
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn provider_for(base_url: &str) -> Arc<OpenAiProvider> {
    let config = CompanionConfig::from_lookup(|key| match key {
        "OPENAI_API_KEY" => Some("sk-test".to_string()),
        "OPENAI_BASE_URL" => Some(base_url.to_string()),
        _ => None,
    });
    Arc::new(OpenAiProvider::from_config(&config).unwrap())
}

#[tokio::test]
async fn test_reply_round_trip_over_http() {
    let (base_url, server) =
        spawn_server(Canned::Json(StatusCode::OK, completion("  Take a slow breath with me.  ")))
            .await;
    let generator = ResponseGenerator::new(provider_for(&base_url));

    let history = vec![
        ConversationTurn::user("I have an exam tomorrow"),
        ConversationTurn::assistant("That sounds like a lot of pressure."),
    ];
    let signal = EmotionSignal::new("stressed", 0.61);
    let outcome = generator
        .generate_outcome("I can't focus", Some(&signal), &history)
        .await;

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.into_value(), "Take a slow breath with me.");

    let bodies = server.bodies.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["max_tokens"], 800);
    assert_eq!(body["temperature"], 0.7);
    assert!(body.get("response_format").is_none());

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1], json!({"role": "user", "content": "I have an exam tomorrow"}));
    assert_eq!(messages[3], json!({"role": "user", "content": "I can't focus"}));
    assert!(messages[0]["content"]
        .as_str()
        .unwrap()
        .ends_with("Current emotion detected: stressed (confidence: 61%)"));

    assert_eq!(server.auth.lock().unwrap()[0], "Bearer sk-test");
}

#[tokio::test]
async fn test_classification_round_trip_over_http() {
    let analysis = r#"{"emotion":"sad","confidence":0.9,"intensity":"high","supportive_keywords":["hopeless"]}"#;
    let (base_url, server) = spawn_server(Canned::Json(StatusCode::OK, completion(analysis))).await;
    let classifier = EmotionClassifier::new(provider_for(&base_url));

    let outcome = classifier.classify_outcome("I feel hopeless and exhausted").await;
    assert!(!outcome.is_fallback());
    assert_eq!(outcome.value().emotion, "sad");

    let body = server.bodies.lock().unwrap()[0].clone();
    assert_eq!(body["response_format"]["type"], "json_schema");
    assert_eq!(body["response_format"]["json_schema"]["name"], "emotion_analysis");
    assert!(body.get("max_tokens").is_none());
}

#[tokio::test]
async fn test_http_error_status_surfaces_as_status_error() {
    let (base_url, _server) = spawn_server(Canned::Json(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "rate limited"}}),
    ))
    .await;
    let provider = provider_for(&base_url);

    let request = CompletionRequest::new(vec![ChatMessage::user("hi")]);
    match provider.complete(&request).await {
        Err(LlmError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert!(body.contains("rate limited"));
        }
        other => panic!("expected status error, got {:?}", other),
    }

    let generator = ResponseGenerator::new(provider);
    let happy = EmotionSignal::new("happy", 0.95);
    assert_eq!(generator.generate("hi", Some(&happy), &[]).await, HAPPY_FALLBACK);
}

#[tokio::test]
async fn test_malformed_and_empty_bodies_fall_back() {
    let (base_url, _server) = spawn_server(Canned::Text(StatusCode::OK, "<html>gateway</html>")).await;
    let provider = provider_for(&base_url);
    let request = CompletionRequest::new(vec![ChatMessage::user("hi")]);
    assert!(matches!(provider.complete(&request).await, Err(LlmError::Malformed(_))));

    let (base_url, _server) =
        spawn_server(Canned::Json(StatusCode::OK, json!({"choices": []}))).await;
    let generator = ResponseGenerator::new(provider_for(&base_url));
    let outcome = generator.generate_outcome("hi", None, &[]).await;
    assert_eq!(outcome.cause(), Some(&LlmError::EmptyResponse));
    assert_eq!(outcome.into_value(), DEFAULT_FALLBACK);
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = provider_for(&format!("http://{}", addr));
    let classifier = EmotionClassifier::new(provider);

    let outcome = classifier.classify_outcome("anything").await;
    assert!(matches!(outcome.cause(), Some(LlmError::Transport(_))));
    assert_eq!(outcome.value().emotion, "neutral");
}
