use std::{path::PathBuf, sync::Arc};

use question_store::QuestionStore;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuestionStore>,
    pub env_vars: EnvVars,
}

#[derive(Debug, Clone)]
pub struct EnvVars {
    pub data_file: PathBuf,
    pub port: u16,
    pub request_body_size_limit: usize,
    pub request_timeout_in_ms: u64,
    pub sentry_dsn: Option<String>,
}

impl EnvVars {
    pub fn new() -> Self {
        let default_data_file = PathBuf::from("data/questions.json");
        let data_file = match std::env::var("DATA_FILE") {
            Ok(s) if !s.is_empty() => PathBuf::from(s),
            _ => {
                warn!(
                    "DATA_FILE not set. Defaulting to {}",
                    default_data_file.display()
                );
                default_data_file
            }
        };

        let port = match std::env::var("PORT") {
            Ok(port_string) => port_string.parse().expect("PORT to be parseable as u16"),
            Err(_e) => {
                let default_port = 5000;
                warn!("PORT not set. Defaulting to {default_port}");
                default_port
            }
        };

        let request_timeout_in_ms = match std::env::var("REQUEST_TIMEOUT_IN_MS") {
            Ok(s) => s
                .parse()
                .expect("REQUEST_TIMEOUT_IN_MS to be valid unsigned integer"),
            Err(_e) => {
                let default_request_timeout = 30_000;
                warn!("REQUEST_TIMEOUT_IN_MS not set. Defaulting to {default_request_timeout}");
                default_request_timeout
            }
        };

        let request_body_size_limit = match std::env::var("REQUEST_BODY_SIZE_LIMIT") {
            Ok(s) => s
                .parse()
                .expect("REQUEST_BODY_SIZE_LIMIT to be valid unsigned integer"),
            Err(_e) => {
                let default_request_body_size_limit = 1024 * 1024;
                warn!(
                    "REQUEST_BODY_SIZE_LIMIT not set. Defaulting to {default_request_body_size_limit}"
                );
                default_request_body_size_limit
            }
        };

        let sentry_dsn = match std::env::var("SENTRY_DSN") {
            Ok(dsn) if !dsn.is_empty() => Some(dsn),
            _ => {
                warn!("SENTRY_DSN not set.");
                None
            }
        };

        EnvVars {
            data_file,
            port,
            request_body_size_limit,
            request_timeout_in_ms,
            sentry_dsn,
        }
    }
}
