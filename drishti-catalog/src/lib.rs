//! drishti-catalog: object catalog for visual object recognition
//!
//! Assigns stable identities to real-world objects, accumulates training
//! views per object and perspective, and dispatches recognition queries to an
//! injected `FeatureEngine`.

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::ObjectCatalog;
pub use config::{CatalogConfig, IdPolicy};
pub use error::{CatalogError, ConfigError, Result};

pub use drishti_core::{
    EngineError, FeatureEngine, FeatureSet, ObjectId, Perspective, SearchResult, ViewRecord,
    WorldObject,
};
