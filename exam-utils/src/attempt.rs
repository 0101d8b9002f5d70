use std::collections::HashMap;

use question_store::Question;
use serde::Serialize;

use crate::{
    error::Error,
    score::{self, ExamResult},
};

/// One option of a session question, in presentation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExamOption {
    pub text: String,
    /// Position in `Question::options`
    #[serde(rename = "originalIndex")]
    pub original_index: usize,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

/// A question plus the option order shown for it during this session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionQuestion {
    #[serde(flatten)]
    pub question: Question,
    #[serde(rename = "shuffledOptions")]
    pub shuffled_options: Vec<ExamOption>,
}

impl SessionQuestion {
    pub fn id(&self) -> &str {
        &self.question.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based position of the current question
    pub position: usize,
    pub total: usize,
    pub percent: u32,
}

/// One exam attempt: the randomized question order and the answers recorded so far.
///
/// Built by `generation::start_exam`. The session moves forward only; a retry
/// builds a new session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamSession {
    ordered_questions: Vec<SessionQuestion>,
    current_index: usize,
    /// question id -> selected option text
    answers: HashMap<String, String>,
    finished: bool,
}

impl ExamSession {
    pub(crate) fn new(ordered_questions: Vec<SessionQuestion>) -> Self {
        ExamSession {
            ordered_questions,
            current_index: 0,
            answers: HashMap::new(),
            finished: false,
        }
    }

    pub fn ordered_questions(&self) -> &[SessionQuestion] {
        &self.ordered_questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.ordered_questions.get(self.current_index)
    }

    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.ordered_questions.len()
    }

    /// Records `option_text` as the answer for `question_id`, replacing any earlier answer.
    ///
    /// Neither the id nor the text is checked against the session. Answers are
    /// keyed by option text, so two options with identical text on one question
    /// cannot be told apart, neither when scoring nor when showing the selection.
    pub fn select_option(&mut self, question_id: impl Into<String>, option_text: impl Into<String>) {
        self.answers.insert(question_id.into(), option_text.into());
    }

    /// Text recorded for `question_id`, if any.
    pub fn selected_option(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Whether the question under the cursor has a recorded answer.
    pub fn is_current_answered(&self) -> bool {
        self.current_question()
            .is_some_and(|sq| self.answers.contains_key(sq.id()))
    }

    /// Moves to the next question, or finishes the exam on the last one.
    ///
    /// An unanswered question is left out of `answers`. Advancing a finished
    /// session changes nothing.
    pub fn advance(&mut self) {
        if self.current_index + 1 < self.ordered_questions.len() {
            self.current_index += 1;
        } else {
            self.finished = true;
        }
    }

    pub fn progress(&self) -> Progress {
        let total = self.ordered_questions.len();
        let position = self.current_index + 1;
        Progress {
            position,
            total,
            percent: score::percentage(position, total).unwrap_or(0),
        }
    }

    /// Score and review of a finished session. See `score::calculate_result`.
    pub fn result(&self) -> Result<ExamResult, Error> {
        score::calculate_result(self)
    }
}
