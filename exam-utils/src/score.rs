use std::fmt;

use serde::Serialize;

use crate::{attempt::ExamSession, error::Error};

/// The answer recorded for a question, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserAnswer {
    Answered(String),
    Skipped,
}

impl UserAnswer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            UserAnswer::Answered(text) => Some(text.as_str()),
            UserAnswer::Skipped => None,
        }
    }
}

impl fmt::Display for UserAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAnswer::Answered(text) => f.write_str(text),
            UserAnswer::Skipped => f.write_str("Skipped"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionReview {
    #[serde(rename = "questionId")]
    pub question_id: String,
    #[serde(rename = "questionText")]
    pub question_text: String,
    #[serde(rename = "userAnswer")]
    pub user_answer: UserAnswer,
    #[serde(rename = "correctAnswerText")]
    pub correct_answer_text: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExamResult {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    /// In session order
    #[serde(rename = "perQuestion")]
    pub per_question: Vec<QuestionReview>,
}

/// Calculates the score of a finished session.
///
/// A question counts as correct when the recorded text equals the text of the
/// correct option in the original option list. Missing answers are `Skipped`
/// and never correct.
///
/// Fails with `Error::InvalidSessionState` for a session without questions or
/// one that is not finished.
pub fn calculate_result(session: &ExamSession) -> Result<ExamResult, Error> {
    let questions = session.ordered_questions();
    let total = questions.len();

    if total == 0 {
        return Err(Error::InvalidSessionState(
            "cannot score a session without questions".to_string(),
        ));
    }
    if !session.is_finished() {
        return Err(Error::InvalidSessionState(format!(
            "cannot score an unfinished session (at question {} of {total})",
            session.current_index() + 1
        )));
    }

    let mut per_question = Vec::with_capacity(total);
    for session_question in questions {
        let question = &session_question.question;
        let correct_answer_text = question.correct_option_text().ok_or_else(|| {
            Error::InvalidSessionState(format!(
                "question {} has no option at correct index {}",
                question.id, question.correct_option_index
            ))
        })?;

        let user_answer = match session.selected_option(&question.id) {
            Some(text) => UserAnswer::Answered(text.to_string()),
            None => UserAnswer::Skipped,
        };
        let is_correct = user_answer.as_text() == Some(correct_answer_text);

        per_question.push(QuestionReview {
            question_id: question.id.clone(),
            question_text: question.question_text.clone(),
            user_answer,
            correct_answer_text: correct_answer_text.to_string(),
            is_correct,
        });
    }

    let score = per_question.iter().filter(|r| r.is_correct).count();
    let percentage = percentage(score, total).ok_or_else(|| {
        Error::InvalidSessionState("cannot score a session without questions".to_string())
    })?;

    Ok(ExamResult {
        score,
        total,
        percentage,
        per_question,
    })
}

/// `round(part / whole * 100)` with halves rounded up. `None` when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    let rounded = (part * 200 + whole) / (2 * whole);
    u32::try_from(rounded).ok()
}
