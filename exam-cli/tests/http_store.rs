use std::sync::Arc;

use exam_cli::HttpQuestionStore;
use question_service::config::{AppState, EnvVars};
use question_store::{InMemoryStore, NewQuestion, QuestionStore, StoreError};

/// Serves the question API over an in-memory store on an ephemeral port.
async fn spawn_service() -> String {
    let app = question_service::app(AppState {
        store: Arc::new(InMemoryStore::new()),
        env_vars: EnvVars {
            data_file: "unused.json".into(),
            port: 0,
            request_body_size_limit: 1024 * 1024,
            request_timeout_in_ms: 5_000,
            sentry_dsn: None,
        },
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/questions")
}

#[tokio::test]
async fn create_list_delete_over_http() {
    let store = HttpQuestionStore::new(&spawn_service().await).unwrap();

    assert!(store.list().await.unwrap().is_empty());

    let created = store
        .create(NewQuestion::new(
            "Capital of France?",
            vec!["Paris".to_string(), "London".to_string()],
            0,
        ))
        .await
        .unwrap();
    assert_eq!(created.question_text, "Capital of France?");

    assert_eq!(store.list().await.unwrap(), vec![created.clone()]);

    store.delete_by_id(&created.id).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn service_errors_map_to_store_errors() {
    let store = HttpQuestionStore::new(&spawn_service().await).unwrap();

    let err = store
        .create(NewQuestion {
            question_text: Some("Missing the rest".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(msg) if msg.starts_with("Missing required fields")));

    let err = store.delete_by_id("404").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "404"));
}

#[tokio::test]
async fn unreachable_service_is_unavailable() {
    // Bind and drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = HttpQuestionStore::new(&format!("http://{addr}/api/questions")).unwrap();

    assert!(matches!(
        store.list().await,
        Err(StoreError::Unavailable(_))
    ));
}
