//! Shared fake feature engine for catalog integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use drishti_catalog::{EngineError, FeatureEngine, FeatureSet, SearchResult, ViewRecord, WorldObject};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Records every compute call and fails on images whose path contains "corrupt".
///
/// The feature payload is the concatenation of the view paths, so tests can
/// check which views a feature set was derived from.
#[derive(Default)]
pub struct RecordingEngine {
    pub compute_calls: Mutex<Vec<Vec<PathBuf>>>,
    pub search_calls: Mutex<Vec<PathBuf>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute_count(&self) -> usize {
        self.compute_calls.lock().len()
    }
}

fn is_corrupt(path: &Path) -> bool {
    path.to_string_lossy().contains("corrupt")
}

#[async_trait]
impl FeatureEngine for RecordingEngine {
    async fn compute_features(&self, views: &[ViewRecord]) -> drishti_core::Result<FeatureSet> {
        let paths: Vec<PathBuf> = views.iter().map(|v| v.image().to_path_buf()).collect();
        self.compute_calls.lock().push(paths.clone());

        if let Some(bad) = paths.iter().find(|p| is_corrupt(p)) {
            return Err(EngineError::Image {
                path: bad.clone(),
                reason: "decode failed".to_string(),
            });
        }

        let payload = paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("|");
        Ok(FeatureSet::new(views.len(), payload.into_bytes()))
    }

    async fn search_image_for_objects(
        &self,
        target: &WorldObject,
        query_image: &Path,
    ) -> drishti_core::Result<Vec<SearchResult>> {
        self.search_calls.lock().push(query_image.to_path_buf());

        if is_corrupt(query_image) {
            return Err(EngineError::Image {
                path: query_image.to_path_buf(),
                reason: "decode failed".to_string(),
            });
        }

        // one hit per trained perspective, best first
        let mut results: Vec<SearchResult> = target
            .trained_perspectives()
            .into_iter()
            .map(|p| SearchResult {
                object_id: target.id(),
                bbox: (0.0, 0.0, 32.0, 32.0),
                score: target.features(p).map(|f| f.source_views() as f32).unwrap_or(0.0),
                perspective: Some(p),
            })
            .collect();
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(results)
    }
}
