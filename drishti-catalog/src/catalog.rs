//! Object catalog: identity assignment, training and search routing
//!
//! Locking is two-level. A single `parking_lot::RwLock` guards the id map and
//! the counter and is only ever held for map bookkeeping. Each object sits
//! behind its own async mutex, held while the feature engine works on it, so
//! training or searching one object never blocks the rest of the catalog.

use crate::config::{CatalogConfig, IdPolicy};
use crate::error::{CatalogError, Result};
use drishti_core::{FeatureEngine, FeatureSet, ObjectId, Perspective, SearchResult, WorldObject};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

type ObjectHandle = Arc<Mutex<WorldObject>>;

struct CatalogState {
    objects: HashMap<ObjectId, ObjectHandle>,
    // None once the counter has moved past u64::MAX
    next_id: Option<u64>,
}

/// Owns every `WorldObject`, issues identities and routes training and
/// search requests to the feature engine.
pub struct ObjectCatalog {
    config: CatalogConfig,
    engine: Arc<dyn FeatureEngine>,
    state: RwLock<CatalogState>,
}

impl ObjectCatalog {
    /// Create an empty catalog with default configuration
    pub fn new(engine: Arc<dyn FeatureEngine>) -> Self {
        Self::build(CatalogConfig::default(), engine)
    }

    /// Create an empty catalog after validating `config`
    pub fn with_config(config: CatalogConfig, engine: Arc<dyn FeatureEngine>) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, engine))
    }

    fn build(config: CatalogConfig, engine: Arc<dyn FeatureEngine>) -> Self {
        let objects = HashMap::with_capacity(config.initial_capacity);
        info!("Object catalog created (id policy: {})", config.id_policy);
        Self {
            config,
            engine,
            state: RwLock::new(CatalogState {
                objects,
                next_id: Some(0),
            }),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Allocate the next unused identity and register an empty object under it.
    ///
    /// Ids already taken by caller-supplied training are stepped over, so the
    /// returned ids are strictly increasing and never clobber an object. Fails
    /// with `IdSpaceExhausted` once no id above every issued one remains.
    pub fn create_empty_object(&self) -> Result<ObjectId> {
        let mut state = self.state.write();

        let start = state.next_id.ok_or(CatalogError::IdSpaceExhausted)?;
        let mut candidate = start;
        while state.objects.contains_key(&ObjectId(candidate)) {
            candidate = match candidate.checked_add(1) {
                Some(next) => next,
                None => {
                    warn!("Ids {}..={} all in use, id space exhausted", start, candidate);
                    state.next_id = None;
                    return Err(CatalogError::IdSpaceExhausted);
                }
            };
        }
        if candidate != start {
            debug!("Ids {}..{} already in use, skipping to {}", start, candidate, candidate);
        }
        state.next_id = candidate.checked_add(1);

        let id = ObjectId(candidate);
        state
            .objects
            .insert(id, Arc::new(Mutex::new(WorldObject::new(id))));

        info!("Created empty object {}", id);
        Ok(id)
    }

    /// Train `object_id` with one image taken from `perspective`.
    ///
    /// An unknown id registers a new object under exactly that id. Whether the
    /// counter moves past it depends on the configured `IdPolicy`.
    pub async fn train(
        &self,
        object_id: ObjectId,
        image: impl Into<PathBuf>,
        perspective: Perspective,
    ) -> Result<()> {
        let image = image.into();
        debug!("Training object {} with {:?} ({})", object_id, image, perspective);

        let handle = self.resolve_or_create(object_id);
        let mut object = handle.lock().await;
        object
            .add_view(self.engine.as_ref(), image, perspective)
            .await?;
        Ok(())
    }

    /// Search `image` for the object registered as `object_id`.
    pub async fn search(
        &self,
        image: impl AsRef<Path>,
        object_id: ObjectId,
    ) -> Result<Vec<SearchResult>> {
        let handle = self
            .handle(object_id)
            .ok_or(CatalogError::UnknownObject { id: object_id })?;

        let image = image.as_ref();
        let object = handle.lock().await;
        let results = self
            .engine
            .search_image_for_objects(&object, image)
            .await
            .map_err(|e| {
                warn!("Search for object {} in {:?} failed: {}", object_id, image, e);
                e
            })?;

        debug!(
            "Search for object {} in {:?} returned {} result(s)",
            object_id,
            image,
            results.len()
        );
        Ok(results)
    }

    /// Features stored for `object_id` under `perspective`.
    ///
    /// `None` both when the object is unknown and when the perspective has not
    /// been trained; use [`ObjectCatalog::contains`] to tell them apart.
    pub async fn get_features(
        &self,
        object_id: ObjectId,
        perspective: Perspective,
    ) -> Option<FeatureSet> {
        let handle = self.handle(object_id)?;
        let object = handle.lock().await;
        object.features(perspective).cloned()
    }

    /// Snapshot of one object's views and features
    pub async fn object(&self, object_id: ObjectId) -> Option<WorldObject> {
        let handle = self.handle(object_id)?;
        let object = handle.lock().await;
        Some(object.clone())
    }

    pub fn contains(&self, object_id: ObjectId) -> bool {
        self.state.read().objects.contains_key(&object_id)
    }

    pub fn len(&self) -> usize {
        self.state.read().objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().objects.is_empty()
    }

    /// All registered ids in ascending order
    pub fn ids(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self.state.read().objects.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The id the counter would try next, `None` once the id space is used up
    pub fn next_id(&self) -> Option<ObjectId> {
        self.state.read().next_id.map(ObjectId)
    }

    fn handle(&self, object_id: ObjectId) -> Option<ObjectHandle> {
        self.state.read().objects.get(&object_id).cloned()
    }

    fn resolve_or_create(&self, object_id: ObjectId) -> ObjectHandle {
        if let Some(handle) = self.handle(object_id) {
            return handle;
        }

        let mut state = self.state.write();
        // another task may have registered it between the two lock acquisitions
        if let Some(handle) = state.objects.get(&object_id) {
            return handle.clone();
        }

        if self.config.id_policy == IdPolicy::Reconcile {
            if let Some(next) = state.next_id {
                if object_id.0 >= next {
                    state.next_id = object_id.0.checked_add(1);
                }
            }
        }

        let handle = Arc::new(Mutex::new(WorldObject::new(object_id)));
        state.objects.insert(object_id, handle.clone());
        info!("Created object {} from training request", object_id);
        handle
    }
}
