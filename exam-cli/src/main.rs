//! CLI entrypoint for `exam-cli`.
//!
//! The exam logic lives in `exam-utils`; storage is either the question service
//! (`--api-url`) or a local JSON file (`--data-file`).

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use exam_cli::{HttpQuestionStore, admin, exam};
use question_store::{JsonFileStore, NewQuestion, QuestionStore};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "exam-cli",
    version,
    about = "Take randomized multiple-choice exams and manage the question list"
)]
struct Cli {
    /// Question collection endpoint of the question service.
    #[arg(
        long,
        global = true,
        env = "QUIZ_API_URL",
        default_value = "http://localhost:5000/api/questions"
    )]
    api_url: String,
    /// Read and write a local JSON question file instead of the service. Takes precedence over `--api-url`.
    #[arg(long, global = true, env = "QUIZ_DATA_FILE")]
    data_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take an exam with shuffled questions and options.
    Take {
        /// Print the result of a single attempt as JSON on stdout; prompts go to stderr.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List existing questions, marking the correct option.
    List,
    /// Add a question.
    Add {
        #[arg(long)]
        question: String,
        /// Option text; repeat for each option, in order.
        #[arg(long = "option", required = true)]
        options: Vec<String>,
        /// 0-based index of the correct option.
        #[arg(long)]
        correct: usize,
    },
    /// Delete a question by id.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        // Log to stderr, stdout is the exam itself
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let store: Box<dyn QuestionStore> = match cli.data_file {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(HttpQuestionStore::new(&cli.api_url)?),
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    match cli.command {
        Commands::Take { json } => {
            // Keep stdout parseable in json mode
            let mut prompts: Box<dyn Write> = if json {
                Box::new(io::stderr())
            } else {
                Box::new(io::stdout())
            };
            exam::take_exam(store.as_ref(), &mut input, &mut prompts, &mut output, json).await?;
        }
        Commands::List => admin::list_questions(store.as_ref(), &mut output).await?,
        Commands::Add {
            question,
            options,
            correct,
        } => {
            admin::add_question(
                store.as_ref(),
                NewQuestion::new(question, options, correct),
                &mut output,
            )
            .await?;
        }
        Commands::Delete { id, yes } => {
            admin::delete_question(store.as_ref(), &id, yes, &mut input, &mut output).await?;
        }
    }

    Ok(())
}
