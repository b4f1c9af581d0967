//! Identity, perspective, view and feature types

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Identity of one real-world object within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl ObjectId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ObjectId {
    fn from(id: u64) -> Self {
        ObjectId(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Camera angle under which a training image was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Perspective {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Perspective {
    pub const ALL: [Perspective; 6] = [
        Perspective::Front,
        Perspective::Back,
        Perspective::Left,
        Perspective::Right,
        Perspective::Top,
        Perspective::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Perspective::Front => "front",
            Perspective::Back => "back",
            Perspective::Left => "left",
            Perspective::Right => "right",
            Perspective::Top => "top",
            Perspective::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Perspective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Perspective::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| format!("Unknown perspective: '{}'", s))
    }
}

/// One training image tagged with the perspective it was taken from.
///
/// Immutable once created; owned by exactly one `WorldObject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecord {
    image: PathBuf,
    perspective: Perspective,
    recorded_at: DateTime<Utc>,
}

impl ViewRecord {
    pub fn new(image: impl Into<PathBuf>, perspective: Perspective) -> Self {
        Self {
            image: image.into(),
            perspective,
            recorded_at: Utc::now(),
        }
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Learned representation for one (object, perspective) pair.
///
/// The payload is produced and interpreted only by the feature engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    source_views: usize,
    descriptors: Bytes,
}

impl FeatureSet {
    pub fn new(source_views: usize, descriptors: impl Into<Bytes>) -> Self {
        Self {
            source_views,
            descriptors: descriptors.into(),
        }
    }

    /// Number of views the engine derived this set from
    pub fn source_views(&self) -> usize {
        self.source_views
    }

    pub fn descriptors(&self) -> &Bytes {
        &self.descriptors
    }
}

/// Candidate match returned by a feature engine search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub object_id: ObjectId,
    pub bbox: (f32, f32, f32, f32), // x, y, width, height
    pub score: f32,
    pub perspective: Option<Perspective>,
}
