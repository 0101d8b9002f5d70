//! Exam Session Utility Functions
//!
//! ## Current API
//!
//! - Start a randomized exam from a snapshot of questions
//! - Record answers and advance through the exam
//! - Calculate the exam result and per-question review
//!
pub mod attempt;
pub mod error;
pub mod generation;
pub mod score;

pub use attempt::{ExamOption, ExamSession, Progress, SessionQuestion};
pub use error::Error;
pub use generation::{start_exam, start_exam_with_rng};
pub use score::{ExamResult, QuestionReview, UserAnswer};
