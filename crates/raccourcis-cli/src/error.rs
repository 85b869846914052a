use std::io;

use raccourcis_core::ContentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("unknown sheet `{0}` (run `raccourcis-cli list` to see available sheets)")]
    UnknownSheet(String),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
