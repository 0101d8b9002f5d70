#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No questions to build an exam from. Callers show a "no questions" state instead.
    #[error("no questions available to start an exam")]
    EmptyQuestionSet,
    #[error("{0}")]
    InvalidQuestion(String),
    /// Caller bug: result requested for an empty or unfinished session.
    #[error("{0}")]
    InvalidSessionState(String),
}
