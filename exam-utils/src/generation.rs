use question_store::{Question, validate_question};
use rand::{Rng, seq::SliceRandom};
use tracing::trace;

use crate::{
    attempt::{ExamOption, ExamSession, SessionQuestion},
    error::Error,
};

/// Starts an exam from a snapshot of questions, using the thread-local rng.
///
/// Question order, and the option order of every question, are shuffled once here.
pub fn start_exam(questions: Vec<Question>) -> Result<ExamSession, Error> {
    let mut rng = rand::rng();
    start_exam_with_rng(questions, &mut rng)
}

/// Same as `start_exam`, with the randomness supplied by the caller.
///
/// Shuffles use `SliceRandom::shuffle`, a Fisher-Yates shuffle: for `i` from the
/// last index down to 1, swap with a uniform index in `[0, i]`. Every ordering is
/// equally likely.
pub fn start_exam_with_rng<R>(questions: Vec<Question>, rng: &mut R) -> Result<ExamSession, Error>
where
    R: Rng + ?Sized,
{
    if questions.is_empty() {
        return Err(Error::EmptyQuestionSet);
    }

    for question in &questions {
        validate_question(question).map_err(Error::InvalidQuestion)?;
    }

    let mut ordered_questions: Vec<SessionQuestion> = questions
        .into_iter()
        .map(|question| prepare_question(question, rng))
        .collect();
    ordered_questions.shuffle(rng);

    trace!(
        number_of_questions = ordered_questions.len(),
        "exam session generated"
    );

    Ok(ExamSession::new(ordered_questions))
}

/// Tags every option with its original index and correctness, then shuffles them.
fn prepare_question<R>(question: Question, rng: &mut R) -> SessionQuestion
where
    R: Rng + ?Sized,
{
    let mut shuffled_options: Vec<ExamOption> = question
        .options
        .iter()
        .enumerate()
        .map(|(original_index, text)| ExamOption {
            text: text.clone(),
            original_index,
            is_correct: original_index == question.correct_option_index,
        })
        .collect();
    shuffled_options.shuffle(rng);

    SessionQuestion {
        question,
        shuffled_options,
    }
}
