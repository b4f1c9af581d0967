//! Per-object training state

use crate::engine::FeatureEngine;
use crate::error::Result;
use crate::types::{FeatureSet, ObjectId, Perspective, ViewRecord};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// An identified real-world object: its training views and the features
/// learned from them, keyed by perspective.
#[derive(Debug, Clone)]
pub struct WorldObject {
    id: ObjectId,
    views: Vec<ViewRecord>,
    features: BTreeMap<Perspective, FeatureSet>,
}

impl WorldObject {
    /// Create an object with no views and no features
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            views: Vec::new(),
            features: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// All views in the order they were added
    pub fn views(&self) -> &[ViewRecord] {
        &self.views
    }

    pub fn views_for(&self, perspective: Perspective) -> impl Iterator<Item = &ViewRecord> + '_ {
        self.views
            .iter()
            .filter(move |v| v.perspective() == perspective)
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Stored features for `perspective`, if it has been trained
    pub fn features(&self, perspective: Perspective) -> Option<&FeatureSet> {
        self.features.get(&perspective)
    }

    pub fn is_trained(&self, perspective: Perspective) -> bool {
        self.features.contains_key(&perspective)
    }

    pub fn trained_perspectives(&self) -> Vec<Perspective> {
        self.features.keys().copied().collect()
    }

    /// Record a training view and recompute the features for its perspective.
    ///
    /// The engine sees every view of `perspective`, including the new one. The
    /// view and the new features are committed together: when the engine
    /// fails the object is left exactly as it was.
    pub async fn add_view(
        &mut self,
        engine: &dyn FeatureEngine,
        image: PathBuf,
        perspective: Perspective,
    ) -> Result<()> {
        let view = ViewRecord::new(image, perspective);

        let mut batch: Vec<ViewRecord> = self.views_for(perspective).cloned().collect();
        batch.push(view.clone());

        let features = match engine.compute_features(&batch).await {
            Ok(features) => features,
            Err(e) => {
                warn!(
                    "Feature computation failed for object {} ({}): {}",
                    self.id, perspective, e
                );
                return Err(e);
            }
        };

        self.views.push(view);
        self.features.insert(perspective, features);

        debug!(
            "Object {} trained on {} view(s) for {}",
            self.id,
            batch.len(),
            perspective
        );
        Ok(())
    }
}
