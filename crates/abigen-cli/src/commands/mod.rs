pub mod name;
pub mod names;
pub mod render;
pub mod time;

#[cfg(test)]
mod name_tests;

use std::io::{self, Write};

use abigen_core::RecordError;

/// Failure of a command after argument parsing succeeded.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write rendered output to stdout, or report the error and exit.
pub fn finish(result: Result<String, CommandError>) {
    match result {
        Ok(output) => {
            if let Err(e) = io::stdout().write_all(output.as_bytes()) {
                // Closed pipe (`| head`) is not worth reporting.
                if e.kind() != io::ErrorKind::BrokenPipe {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
