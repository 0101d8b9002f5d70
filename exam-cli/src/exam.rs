use std::io::{BufRead, Write};

use anyhow::Context;
use exam_utils::{Error, ExamResult, ExamSession, start_exam};
use question_store::QuestionStore;
use tracing::debug;

use crate::prompt::{confirm, read_line};

pub const NO_QUESTIONS: &str = "No questions found. Please add some with `exam-cli add`.";

/// Runs exams until the user declines a retry.
///
/// Questions and prompts go to `prompts`, results to `report`. Every attempt
/// (including a retry) starts from a fresh snapshot of the store. With `json`
/// a single attempt is run and `report` receives exactly one JSON document.
/// Returns the last result, or `None` when the store has no questions.
pub async fn take_exam<R, P, W>(
    store: &dyn QuestionStore,
    input: &mut R,
    prompts: &mut P,
    report: &mut W,
    json: bool,
) -> anyhow::Result<Option<ExamResult>>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    loop {
        let questions = store.list().await.context("unable to fetch questions")?;

        let mut session = match start_exam(questions) {
            Ok(session) => session,
            Err(Error::EmptyQuestionSet) => {
                writeln!(prompts, "{NO_QUESTIONS}")?;
                return Ok(None);
            }
            Err(e) => return Err(e).context("unable to start exam"),
        };
        debug!(
            number_of_questions = session.ordered_questions().len(),
            "exam started"
        );

        run_session(&mut session, input, prompts)?;

        let result = session.result()?;
        if json {
            writeln!(report, "{}", serde_json::to_string_pretty(&result)?)?;
            return Ok(Some(result));
        }
        write_result(&result, report)?;
        report.flush()?;

        if !confirm(input, prompts, "Take Exam Again?")? {
            return Ok(Some(result));
        }
    }
}

/// Shows the current question until the session is finished.
///
/// A line holding an option number (or the exact option text) selects it; an
/// empty line moves on, but only once the current question has an answer.
pub fn run_session<R, W>(session: &mut ExamSession, input: &mut R, output: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    while !session.is_finished() {
        let Some(current) = session.current_question() else {
            break;
        };
        let progress = session.progress();
        let selected = session.selected_option(current.id());

        writeln!(output)?;
        writeln!(
            output,
            "Question {} of {} ({}%)",
            progress.position, progress.total, progress.percent
        )?;
        writeln!(output, "{}", current.question.question_text)?;
        for (i, option) in current.shuffled_options.iter().enumerate() {
            let marker = if selected == Some(option.text.as_str()) {
                "(*)"
            } else {
                "( )"
            };
            writeln!(output, "  {marker} {}. {}", i + 1, option.text)?;
        }

        let next_label = if session.is_last_question() {
            "Finish Exam"
        } else {
            "Next Question"
        };
        write!(
            output,
            "Select 1-{}, or press Enter for \"{next_label}\": ",
            current.shuffled_options.len()
        )?;
        output.flush()?;

        let line = read_line(input)?.context("input closed before the exam was finished")?;
        let choice = line.trim();

        if choice.is_empty() {
            if session.is_current_answered() {
                session.advance();
            } else {
                writeln!(output, "Select an option before continuing.")?;
            }
            continue;
        }

        let option_text = match choice.parse::<usize>() {
            Ok(n) if n >= 1 => current.shuffled_options.get(n - 1),
            Ok(_) => None,
            Err(_) => current.shuffled_options.iter().find(|o| o.text == choice),
        }
        .map(|o| o.text.clone());

        match option_text {
            Some(text) => {
                let id = current.id().to_string();
                session.select_option(id, text);
            }
            None => writeln!(output, "Invalid choice: {choice}")?,
        }
    }

    Ok(())
}

pub fn write_result<W: Write>(result: &ExamResult, output: &mut W) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Exam Results")?;
    writeln!(output, "You scored {} out of {}", result.score, result.total)?;
    writeln!(output, "{}%", result.percentage)?;
    writeln!(output)?;
    writeln!(output, "Detailed Review")?;

    for review in &result.per_question {
        let mark = if review.is_correct { "[correct]" } else { "[wrong]" };
        writeln!(output, "{mark} {}", review.question_text)?;
        writeln!(output, "    Your Answer: {}", review.user_answer)?;
        if !review.is_correct {
            writeln!(output, "    Correct Answer: {}", review.correct_answer_text)?;
        }
    }

    Ok(())
}
