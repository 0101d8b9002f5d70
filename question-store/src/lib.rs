//! Question records and the stores that hold them.
//!
//! ## Current API
//!
//! - `Question` / `NewQuestion` records, serialized with the camelCase field names of the JSON document
//! - `QuestionStore`: list, create, delete by id
//! - `JsonFileStore`: whole-document JSON file backing
//! - `InMemoryStore`: backing for tests and prototyping
//!
use serde::{Deserialize, Serialize};

pub mod file;
pub mod memory;
mod store;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use store::{QuestionStore, StoreError};

/// A stored multiple-choice question with exactly one correct option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "questionText")]
    pub question_text: String,
    /// Canonical option order. `correct_option_index` points into this list.
    pub options: Vec<String>,
    #[serde(rename = "correctOptionIndex")]
    pub correct_option_index: usize,
}

impl Question {
    /// Text of the correct option, in the original (unshuffled) option list.
    pub fn correct_option_text(&self) -> Option<&str> {
        self.options
            .get(self.correct_option_index)
            .map(String::as_str)
    }
}

/// Payload for creating a question.
///
/// Fields are optional so a missing field is reported as a validation error
/// rather than a deserialization failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    #[serde(rename = "questionText", skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(
        rename = "correctOptionIndex",
        skip_serializing_if = "Option::is_none"
    )]
    pub correct_option_index: Option<usize>,
}

impl NewQuestion {
    pub fn new(
        question_text: impl Into<String>,
        options: Vec<String>,
        correct_option_index: usize,
    ) -> Self {
        NewQuestion {
            question_text: Some(question_text.into()),
            options: Some(options),
            correct_option_index: Some(correct_option_index),
        }
    }

    /// Builds the stored record under `id`, validating the payload.
    pub fn into_question(self, id: String) -> Result<Question, StoreError> {
        let mut missing = vec![];
        if self
            .question_text
            .as_deref()
            .is_none_or(|t| t.trim().is_empty())
        {
            missing.push("questionText");
        }
        if self.options.is_none() {
            missing.push("options");
        }
        if self.correct_option_index.is_none() {
            missing.push("correctOptionIndex");
        }

        let question = match (self.question_text, self.options, self.correct_option_index) {
            (Some(question_text), Some(options), Some(correct_option_index))
                if missing.is_empty() =>
            {
                Question {
                    id,
                    question_text,
                    options,
                    correct_option_index,
                }
            }
            _ => {
                return Err(StoreError::Validation(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )));
            }
        };
        validate_question(&question)
            .and_then(|()| validate_contents(&question))
            .map_err(StoreError::Validation)?;

        Ok(question)
    }
}

/// Validate Question:
/// - at least two `options`
/// - `correct_option_index` points into `options`
///
/// Blank texts are allowed here. Records written by older tooling may hold
/// them and must still be usable in an exam.
pub fn validate_question(question: &Question) -> Result<(), String> {
    if question.options.len() < 2 {
        return Err(format!(
            "Question {:?} needs at least 2 options. Available: {}",
            question.id,
            question.options.len()
        ));
    }

    if question.correct_option_index >= question.options.len() {
        return Err(format!(
            "Question {:?} has correct option index {} out of range for {} options",
            question.id,
            question.correct_option_index,
            question.options.len()
        ));
    }

    Ok(())
}

/// Checks applied to new questions on top of `validate_question`: no blank
/// question text or option text.
fn validate_contents(question: &Question) -> Result<(), String> {
    if question.question_text.trim().is_empty() {
        return Err(format!("Question {:?} has empty text", question.id));
    }

    if let Some(position) = question.options.iter().position(|o| o.trim().is_empty()) {
        return Err(format!(
            "Option {} in question {:?} has empty text",
            position, question.id
        ));
    }

    Ok(())
}
