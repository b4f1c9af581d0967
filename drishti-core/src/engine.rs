//! Feature engine interface
//!
//! The catalog never looks inside images or feature payloads. Descriptor
//! extraction and image-to-object matching are delegated to an implementation
//! of [`FeatureEngine`], injected into the catalog at construction time.

use crate::error::Result;
use crate::types::{FeatureSet, SearchResult, ViewRecord};
use crate::world_object::WorldObject;
use async_trait::async_trait;
use std::path::Path;

/// External recognition backend.
///
/// Both calls may be long-running (image decoding, descriptor extraction) and
/// are the only points at which catalog operations suspend.
#[async_trait]
pub trait FeatureEngine: Send + Sync {
    /// Compute the feature set for one perspective.
    ///
    /// `views` holds every view of that perspective in insertion order and is
    /// never empty.
    async fn compute_features(&self, views: &[ViewRecord]) -> Result<FeatureSet>;

    /// Search `query_image` for occurrences of `target`.
    ///
    /// Ordering and scoring of the returned results belong to the engine.
    async fn search_image_for_objects(
        &self,
        target: &WorldObject,
        query_image: &Path,
    ) -> Result<Vec<SearchResult>>;
}
