use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use question_service::{
    app,
    config::{AppState, EnvVars},
};
use question_store::{InMemoryStore, JsonFileStore, Question, QuestionStore};
use serde_json::{Value, json};
use tower::ServiceExt;

fn env_vars() -> EnvVars {
    EnvVars {
        data_file: "unused.json".into(),
        port: 0,
        request_body_size_limit: 1024 * 1024,
        request_timeout_in_ms: 5_000,
        sentry_dsn: None,
    }
}

fn test_app(store: Arc<dyn QuestionStore>) -> Router {
    app(AppState {
        store,
        env_vars: env_vars(),
    })
}

fn seeded_store() -> InMemoryStore {
    InMemoryStore::with_questions(vec![Question {
        id: "1700000000000".to_string(),
        question_text: "Capital of France?".to_string(),
        options: vec!["Paris".to_string(), "London".to_string()],
        correct_option_index: 0,
    }])
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn ping_is_ok() {
    let response = test_app(Arc::new(InMemoryStore::new()))
        .oneshot(Request::get("/status/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn lists_questions() {
    let response = test_app(Arc::new(seeded_store()))
        .oneshot(Request::get("/api/questions").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["questionText"], "Capital of France?");
    assert_eq!(body[0]["correctOptionIndex"], 0);
}

#[tokio::test]
async fn creates_question() {
    let store = InMemoryStore::new();
    let payload = json!({
        "questionText": "2 + 2?",
        "options": ["4", "5", "22"],
        "correctOptionIndex": 0
    });

    let response = test_app(Arc::new(store.clone()))
        .oneshot(post_json("/api/questions", payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["questionText"], "2 + 2?");
    assert!(!body["id"].as_str().unwrap().is_empty());

    let stored = store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, body["id"].as_str().unwrap());
}

#[tokio::test]
async fn missing_fields_are_bad_request() {
    let store = InMemoryStore::new();
    let payload = json!({ "questionText": "No options here" });

    let response = test_app(Arc::new(store.clone()))
        .oneshot(post_json("/api/questions", payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Missing required fields")
    );
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let response = test_app(Arc::new(InMemoryStore::new()))
        .oneshot(post_json("/api/questions", "{ nope".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn deletes_question() {
    let store = seeded_store();

    let response = test_app(Arc::new(store.clone()))
        .oneshot(
            Request::delete("/api/questions/1700000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Question deleted" })
    );
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_unknown_question_is_not_found() {
    let response = test_app(Arc::new(seeded_store()))
        .oneshot(Request::delete("/api/questions/42").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Question not found" })
    );
}

#[tokio::test]
async fn corrupt_data_file_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(&path, "not json").unwrap();

    let response = test_app(Arc::new(JsonFileStore::new(&path)))
        .oneshot(Request::get("/api/questions").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn file_backed_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    let app = test_app(Arc::new(JsonFileStore::new(&path)));

    let payload = json!({
        "questionText": "Largest planet?",
        "options": ["Mars", "Jupiter"],
        "correctOptionIndex": 1
    });
    let created = app
        .clone()
        .oneshot(post_json("/api/questions", payload.to_string()))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_json(created).await["id"].as_str().unwrap().to_string();

    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0]["id"], id.as_str());

    let deleted = app
        .oneshot(
            Request::delete(format!("/api/questions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, json!([]));
}
