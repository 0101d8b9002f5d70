use async_trait::async_trait;
use chrono::Utc;

use crate::{NewQuestion, Question};

/// Errors surfaced by question stores.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Validation(String),
    #[error("question {0} not found")]
    NotFound(String),
}

/// Durable list of questions.
///
/// Implementations read and replace the whole list on every mutation; there is
/// no partial update.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, in insertion order.
    async fn list(&self) -> Result<Vec<Question>, StoreError>;

    /// Validates `new_question`, assigns it a fresh id and appends it.
    async fn create(&self, new_question: NewQuestion) -> Result<Question, StoreError>;

    /// Removes the question with `id`.
    ///
    /// Returns `StoreError::NotFound` if no question has that id.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

/// Millisecond timestamp id, bumped until it is unused in `existing`.
pub(crate) fn next_id(existing: &[Question]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|q| q.id == id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_skips_taken_ids() {
        let first = next_id(&[]);
        let taken = Question {
            id: first.clone(),
            question_text: "q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_option_index: 0,
        };
        let second = next_id(std::slice::from_ref(&taken));
        assert_ne!(first, second);
        assert!(second.parse::<i64>().unwrap() >= first.parse::<i64>().unwrap());
    }
}
