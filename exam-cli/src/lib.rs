//! Terminal front-end for the question service: take randomized exams and manage questions.
pub mod admin;
pub mod client;
pub mod exam;
pub mod prompt;

pub use client::HttpQuestionStore;
