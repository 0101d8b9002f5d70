use std::io::{BufRead, Write};

use anyhow::Context;
use question_store::{NewQuestion, Question, QuestionStore};

use crate::prompt::confirm;

pub async fn list_questions<W: Write>(store: &dyn QuestionStore, output: &mut W) -> anyhow::Result<()> {
    let questions = store.list().await.context("unable to fetch questions")?;

    writeln!(output, "Existing Questions ({})", questions.len())?;
    for question in &questions {
        writeln!(output)?;
        writeln!(output, "[{}] {}", question.id, question.question_text)?;
        for (i, option) in question.options.iter().enumerate() {
            if i == question.correct_option_index {
                writeln!(output, "  - {option} (Correct)")?;
            } else {
                writeln!(output, "  - {option}")?;
            }
        }
    }

    Ok(())
}

pub async fn add_question<W: Write>(
    store: &dyn QuestionStore,
    new_question: NewQuestion,
    output: &mut W,
) -> anyhow::Result<Question> {
    let question = store
        .create(new_question)
        .await
        .context("unable to save question")?;
    writeln!(output, "Saved question {}", question.id)?;

    Ok(question)
}

/// Deletes `id`, asking first unless `confirmed`. Returns whether it was deleted.
pub async fn delete_question<R, W>(
    store: &dyn QuestionStore,
    id: &str,
    confirmed: bool,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<bool>
where
    R: BufRead,
    W: Write,
{
    if !confirmed && !confirm(input, output, "Are you sure you want to delete this question?")? {
        writeln!(output, "Cancelled")?;
        return Ok(false);
    }

    store
        .delete_by_id(id)
        .await
        .with_context(|| format!("unable to delete question {id}"))?;
    writeln!(output, "Question deleted")?;

    Ok(true)
}
