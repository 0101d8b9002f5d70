use async_trait::async_trait;
use question_store::{NewQuestion, Question, QuestionStore, StoreError};
use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Question store reached through the question service's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpQuestionStore {
    client: reqwest::Client,
    questions_url: Url,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpQuestionStore {
    /// `questions_url` is the collection endpoint, e.g. `http://localhost:5000/api/questions`.
    pub fn new(questions_url: &str) -> anyhow::Result<Self> {
        let questions_url = Url::parse(questions_url)?;
        if questions_url.cannot_be_a_base() {
            anyhow::bail!("{questions_url} cannot be used as an API base url");
        }

        Ok(HttpQuestionStore {
            client: reqwest::Client::new(),
            questions_url,
        })
    }

    fn question_url(&self, id: &str) -> Url {
        let mut url = self.questions_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }
}

fn unavailable(e: reqwest::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

/// Maps error statuses of the service onto store errors, keeping its `error` message.
async fn error_for_status(response: Response, id: Option<&str>) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };
    debug!(%status, %message, "question service returned an error");

    Err(match status {
        StatusCode::BAD_REQUEST => StoreError::Validation(message),
        StatusCode::NOT_FOUND => StoreError::NotFound(id.unwrap_or_default().to_string()),
        _ => StoreError::Unavailable(format!("{status}: {message}")),
    })
}

#[async_trait]
impl QuestionStore for HttpQuestionStore {
    #[instrument(skip_all, err(Debug))]
    async fn list(&self) -> Result<Vec<Question>, StoreError> {
        let response = self
            .client
            .get(self.questions_url.clone())
            .send()
            .await
            .map_err(unavailable)?;

        error_for_status(response, None)
            .await?
            .json()
            .await
            .map_err(unavailable)
    }

    #[instrument(skip_all, err(Debug))]
    async fn create(&self, new_question: NewQuestion) -> Result<Question, StoreError> {
        let response = self
            .client
            .post(self.questions_url.clone())
            .json(&new_question)
            .send()
            .await
            .map_err(unavailable)?;

        error_for_status(response, None)
            .await?
            .json()
            .await
            .map_err(unavailable)
    }

    #[instrument(skip(self), err(Debug))]
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.question_url(id))
            .send()
            .await
            .map_err(unavailable)?;

        error_for_status(response, Some(id)).await?;
        Ok(())
    }
}
