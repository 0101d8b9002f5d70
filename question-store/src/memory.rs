use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    NewQuestion, Question,
    store::{QuestionStore, StoreError, next_id},
};

/// In-memory question store for tests and prototyping.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    questions: Arc<Mutex<Vec<Question>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `questions`, kept as given (ids are not reassigned).
    pub fn with_questions(questions: Vec<Question>) -> Self {
        InMemoryStore {
            questions: Arc::new(Mutex::new(questions)),
        }
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Question>, StoreError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question, StoreError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let question = new_question.into_question(next_id(&guard))?;
        guard.push(question.clone());
        Ok(question)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let initial_len = guard.len();
        guard.retain(|q| q.id != id);
        if guard.len() == initial_len {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
