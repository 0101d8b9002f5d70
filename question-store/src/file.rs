use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::{
    NewQuestion, Question,
    store::{QuestionStore, StoreError, next_id},
};

/// Question store backed by a single JSON document holding an array of questions.
///
/// Every mutation reads the whole document, changes it in memory, and writes it
/// back through a temporary file. Mutations are serialized within this process
/// only; two processes writing the same file can lose updates.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_questions(&self) -> Result<Vec<Question>, StoreError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no question file yet");
                return Ok(vec![]);
            }
            Err(e) => {
                return Err(StoreError::Unavailable(format!(
                    "unable to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        if data.trim().is_empty() {
            return Ok(vec![]);
        }

        serde_json::from_str(&data).map_err(|e| {
            StoreError::Unavailable(format!("unable to parse {}: {e}", self.path.display()))
        })
    }

    async fn write_questions(&self, questions: &[Question]) -> Result<(), StoreError> {
        let unavailable = |e: io::Error| {
            StoreError::Unavailable(format!("unable to write {}: {e}", self.path.display()))
        };

        let json = serde_json::to_string_pretty(questions)
            .map_err(|e| StoreError::Unavailable(format!("unable to serialize questions: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(unavailable)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(unavailable)?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(unavailable)?;

        Ok(())
    }
}

#[async_trait]
impl QuestionStore for JsonFileStore {
    #[instrument(skip_all, err(Debug))]
    async fn list(&self) -> Result<Vec<Question>, StoreError> {
        self.read_questions().await
    }

    #[instrument(skip_all, err(Debug))]
    async fn create(&self, new_question: NewQuestion) -> Result<Question, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut questions = self.read_questions().await?;
        let question = new_question.into_question(next_id(&questions))?;
        questions.push(question.clone());
        self.write_questions(&questions).await?;

        debug!(id = %question.id, total = questions.len(), "question created");
        Ok(question)
    }

    #[instrument(skip(self), err(Debug))]
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut questions = self.read_questions().await?;
        let initial_len = questions.len();
        questions.retain(|q| q.id != id);

        if questions.len() == initial_len {
            return Err(StoreError::NotFound(id.to_string()));
        }

        self.write_questions(&questions).await?;
        debug!(total = questions.len(), "question deleted");
        Ok(())
    }
}
