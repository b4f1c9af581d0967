//! Error types for feature engines

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a feature engine while computing features or matching.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Image error for {path:?}: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("Feature extraction error: {0}")]
    Extraction(String),

    #[error("Matching error: {0}")]
    Matching(String),

    #[error("Engine internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
