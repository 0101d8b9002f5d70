use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use question_store::{NewQuestion, Question};
use serde_json::{Value, json};
use tracing::info;

use crate::{config::AppState, error::Error};

pub async fn get_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>, Error> {
    let questions = state.store.list().await?;
    Ok(Json(questions))
}

pub async fn post_question(
    State(state): State<AppState>,
    new_question: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<(StatusCode, Json<Question>), Error> {
    let Json(new_question) =
        new_question.map_err(|e| Error::Server(StatusCode::BAD_REQUEST, e.body_text()))?;

    let question = state.store.create(new_question).await?;
    info!(id = %question.id, "question created");

    Ok((StatusCode::CREATED, Json(question)))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Error> {
    state.store.delete_by_id(&id).await?;
    info!(%id, "question deleted");

    Ok(Json(json!({ "message": "Question deleted" })))
}

pub async fn get_status_ping() -> impl IntoResponse {
    info!("Status");
    StatusCode::OK
}
