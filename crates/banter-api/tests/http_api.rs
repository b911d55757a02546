//! In-process tests for the HTTP API.
//!
//! Each test builds the real router over a JSON file log in a temp dir and a
//! scripted provider, then drives it with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use banter_api::http::router::build_router;
use banter_api::state::AppState;
use banter_core::chat::service::{ChatService, ChatSettings};
use banter_core::llm::box_provider::BoxLlmProvider;
use banter_core::llm::provider::LlmProvider;
use banter_infra::store::{JsonFileTurnStore, TurnStoreBackend};
use banter_types::config::BanterConfig;
use banter_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

#[derive(Clone)]
enum Script {
    Reply(&'static str),
    Empty,
    Unreachable,
    Panic,
}

struct ScriptedProvider(Script);

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let text = match &self.0 {
            Script::Reply(text) => Some(text.to_string()),
            Script::Empty => None,
            Script::Unreachable => {
                return Err(LlmError::Provider {
                    message: "HTTP request failed: connection refused".to_string(),
                })
            }
            Script::Panic => panic!("provider exploded"),
        };
        Ok(CompletionResponse {
            text,
            model: "scripted-model".to_string(),
            finish_reason: None,
            usage: Usage::default(),
        })
    }
}

struct TestApp {
    dir: TempDir,
    router: Router,
}

impl TestApp {
    fn new(script: Script) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = TurnStoreBackend::Json(JsonFileTurnStore::new(
            dir.path().join("chat_history.json"),
        ));
        let service = ChatService::new(
            store,
            BoxLlmProvider::new(ScriptedProvider(script)),
            ChatSettings::default(),
        );
        let state = AppState::from_parts(service, BanterConfig::default(), dir.path().to_path_buf());
        Self {
            router: build_router(state),
            dir,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post_raw(&self, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn chat(&self, body: Value) -> (StatusCode, Value) {
        self.post_raw(&body.to_string()).await
    }

    async fn history(&self) -> Vec<Value> {
        let (status, body) = self.get("/chat/history").await;
        assert_eq!(status, StatusCode::OK);
        body["chat_history"].as_array().unwrap().clone()
    }
}

#[tokio::test]
async fn index_reports_running() {
    let app = TestApp::new(Script::Reply("unused"));
    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Banter chatbot is running!" }));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new(Script::Reply("unused"));
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn chat_replies_and_records_turn() {
    let app = TestApp::new(Script::Reply("Hi there"));

    let (status, body) = app.chat(json!({ "message": "Hello" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "Hi there" }));

    let history = app.history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["user_input"], "Hello");
    assert_eq!(history[0]["bot_response"], "Hi there");
    let timestamp = history[0]["timestamp"].as_str().unwrap();
    assert!(banter_types::turn::parse_timestamp(timestamp).is_ok());
}

#[tokio::test]
async fn empty_message_is_rejected_and_not_recorded() {
    let app = TestApp::new(Script::Reply("unused"));
    app.chat(json!({ "message": "Hello" })).await;

    let (status, body) = app.chat(json!({ "message": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No message provided" }));

    assert_eq!(app.history().await.len(), 1);
}

#[tokio::test]
async fn missing_message_is_rejected() {
    let app = TestApp::new(Script::Reply("unused"));

    let (status, body) = app.chat(json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No message provided");

    let (status, _) = app.chat(json!({ "message": null })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(app.history().await.is_empty());
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = TestApp::new(Script::Reply("unused"));

    let (status, body) = app.post_raw("{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));

    let (status, _) = app.chat(json!({ "message": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(app.history().await.is_empty());
}

#[tokio::test]
async fn upstream_failure_still_answers_and_records() {
    let app = TestApp::new(Script::Unreachable);

    let (status, body) = app.chat(json!({ "message": "Hello" })).await;
    assert_eq!(status, StatusCode::OK);
    let reply = body["response"].as_str().unwrap();
    assert!(reply.starts_with("Error generating response: "), "{reply}");

    let history = app.history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["bot_response"], reply);
}

#[tokio::test]
async fn reply_without_text_uses_sentinel() {
    let app = TestApp::new(Script::Empty);

    let (status, body) = app.chat(json!({ "message": "Hello" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "No response from the model.");
}

#[tokio::test]
async fn handler_panic_becomes_internal_error() {
    let app = TestApp::new(Script::Panic);

    let (status, body) = app.chat(json!({ "message": "Hello" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Internal Server Error: "), "{error}");
    assert!(error.contains("provider exploded"), "{error}");
}

#[tokio::test]
async fn history_on_fresh_log_is_empty_and_creates_file() {
    let app = TestApp::new(Script::Reply("unused"));

    assert!(app.history().await.is_empty());
    let on_disk = std::fs::read_to_string(app.dir.path().join("chat_history.json")).unwrap();
    assert_eq!(on_disk, "[]");
}

#[tokio::test]
async fn history_keeps_submission_order() {
    let app = TestApp::new(Script::Reply("ack"));
    for message in ["one", "two", "three"] {
        let (status, _) = app.chat(json!({ "message": message })).await;
        assert_eq!(status, StatusCode::OK);
    }

    let inputs: Vec<String> = app
        .history()
        .await
        .iter()
        .map(|t| t["user_input"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(inputs, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::new(Script::Reply("unused"));
    let request = Request::get("/")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
