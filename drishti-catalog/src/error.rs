//! Error types for drishti-catalog

use drishti_core::{EngineError, ObjectId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Object with ID {id} does not exist in the catalog")]
    UnknownObject { id: ObjectId },

    #[error("Object id space exhausted")]
    IdSpaceExhausted,

    #[error("Feature engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
