//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture case '{case}': {reason}")]
    InvalidCase { case: String, reason: String },
    #[error("no fixture JSON files found in {}", path.display())]
    NoFixtures { path: PathBuf },
}
