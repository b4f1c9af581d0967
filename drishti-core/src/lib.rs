//! drishti-core: data model for the drishti object catalog
//!
//! Holds the identity, perspective and view types shared by the catalog and
//! by feature engines, the `WorldObject` record that owns per-perspective
//! training state, and the `FeatureEngine` trait that external recognition
//! backends implement.

pub mod engine;
pub mod error;
pub mod types;
pub mod world_object;

pub use engine::FeatureEngine;
pub use error::{EngineError, Result};
pub use types::{FeatureSet, ObjectId, Perspective, SearchResult, ViewRecord};
pub use world_object::WorldObject;
