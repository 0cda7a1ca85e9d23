//! Model Registry - Owns the loaded ONNX sessions for the process lifetime
//!
//! Explicitly constructed and handed by reference to whoever needs inference;
//! there is no implicit global cache. Each artifact is loaded at most once
//! and never reloaded, so after population the registry is effectively
//! read-only apart from the `&mut Session` runs require.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use ort::session::Session;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

use super::inference::{self, ClassificationResult, ClusterAssignment, InferenceError};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// The two model artifacts the workflow knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Phishing URL classifier (mandatory)
    Classifier,
    /// Threat actor profiler / clustering model (optional)
    Profiler,
}

impl ModelKind {
    pub fn artifact_file(&self) -> &'static str {
        match self {
            ModelKind::Classifier => constants::CLASSIFIER_FILE,
            ModelKind::Profiler => constants::PROFILER_FILE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Classifier => "classifier",
            ModelKind::Profiler => "profiler",
        }
    }
}

/// Outcome of a load attempt. A missing artifact is an expected state,
/// not an error; the caller decides whether it is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    NotFound,
}

/// Metadata recorded when an artifact is loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub kind: String,
    pub feature_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Registry status for display/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryStatus {
    pub classifier_loaded: bool,
    pub profiler_loaded: bool,
    pub model_dir: String,
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

// ============================================================================
// REGISTRY
// ============================================================================

pub struct ModelRegistry {
    model_dir: PathBuf,
    classifier: RwLock<Option<Session>>,
    profiler: RwLock<Option<Session>>,
    classifier_meta: RwLock<Option<ModelMetadata>>,
    profiler_meta: RwLock<Option<ModelMetadata>>,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl ModelRegistry {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            classifier: RwLock::new(None),
            profiler: RwLock::new(None),
            classifier_meta: RwLock::new(None),
            profiler_meta: RwLock::new(None),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    /// Expected artifact path for a model kind
    pub fn artifact_path(&self, kind: ModelKind) -> PathBuf {
        self.model_dir.join(kind.artifact_file())
    }

    fn slot(&self, kind: ModelKind) -> &RwLock<Option<Session>> {
        match kind {
            ModelKind::Classifier => &self.classifier,
            ModelKind::Profiler => &self.profiler,
        }
    }

    fn meta_slot(&self, kind: ModelKind) -> &RwLock<Option<ModelMetadata>> {
        match kind {
            ModelKind::Classifier => &self.classifier_meta,
            ModelKind::Profiler => &self.profiler_meta,
        }
    }

    /// Load a model artifact at most once. Repeated calls for an already
    /// loaded kind return `Loaded` without touching the filesystem; there is
    /// no reload-on-change.
    pub fn load(&self, kind: ModelKind) -> Result<LoadOutcome, InferenceError> {
        // Hold the write lock across check and load so two racing callers
        // cannot both observe an empty slot and load the artifact twice
        let mut slot = self.slot(kind).write();
        if slot.is_some() {
            return Ok(LoadOutcome::Loaded);
        }

        let path = self.artifact_path(kind);
        if !Path::new(&path).exists() {
            log::debug!("{} artifact not found at {}", kind.as_str(), path.display());
            return Ok(LoadOutcome::NotFound);
        }

        let session = inference::load_session(&path)?;
        *slot = Some(session);
        *self.meta_slot(kind).write() = Some(ModelMetadata {
            model_path: path.display().to_string(),
            kind: kind.as_str().to_string(),
            feature_count: FEATURE_COUNT,
            loaded_at: Utc::now(),
        });

        log::info!("{} model cached for process lifetime", kind.as_str());
        Ok(LoadOutcome::Loaded)
    }

    pub fn is_loaded(&self, kind: ModelKind) -> bool {
        self.slot(kind).read().is_some()
    }

    pub fn classifier_loaded(&self) -> bool {
        self.is_loaded(ModelKind::Classifier)
    }

    pub fn profiler_loaded(&self) -> bool {
        self.is_loaded(ModelKind::Profiler)
    }

    pub fn metadata(&self, kind: ModelKind) -> Option<ModelMetadata> {
        self.meta_slot(kind).read().clone()
    }

    /// Run the classifier on one feature row
    pub fn classify(&self, vector: &FeatureVector) -> Result<ClassificationResult, InferenceError> {
        self.load(ModelKind::Classifier)?;

        let start = std::time::Instant::now();
        let mut guard = self.classifier.write();
        let session = guard
            .as_mut()
            .ok_or_else(|| InferenceError("classification model not available".to_string()))?;

        let result = inference::classify(session, vector)?;
        self.track_latency(start.elapsed().as_micros() as u64);
        Ok(result)
    }

    /// Run the clustering model on one feature row
    pub fn assign_cluster(
        &self,
        vector: &FeatureVector,
    ) -> Result<ClusterAssignment, InferenceError> {
        self.load(ModelKind::Profiler)?;

        let start = std::time::Instant::now();
        let mut guard = self.profiler.write();
        let session = guard
            .as_mut()
            .ok_or_else(|| InferenceError("clustering model not available".to_string()))?;

        let result = inference::assign_cluster(session, vector)?;
        self.track_latency(start.elapsed().as_micros() as u64);
        Ok(result)
    }

    fn track_latency(&self, elapsed_us: u64) {
        self.latency_sum_us.fetch_add(elapsed_us, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn status(&self) -> RegistryStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        RegistryStatus {
            classifier_loaded: self.classifier_loaded(),
            profiler_loaded: self.profiler_loaded(),
            model_dir: self.model_dir.display().to_string(),
            inference_count: count,
            avg_latency_ms: avg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::Preset;

    #[test]
    fn missing_artifacts_are_a_sentinel_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ModelRegistry::new(dir.path());

        assert_eq!(
            registry.load(ModelKind::Classifier).unwrap(),
            LoadOutcome::NotFound
        );
        assert_eq!(
            registry.load(ModelKind::Profiler).unwrap(),
            LoadOutcome::NotFound
        );
        assert!(!registry.classifier_loaded());
        assert!(!registry.profiler_loaded());
        assert!(registry.metadata(ModelKind::Classifier).is_none());
    }

    #[test]
    fn concurrent_loads_agree_on_one_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ModelRegistry::new(dir.path());

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    assert_eq!(
                        registry.load(ModelKind::Classifier).unwrap(),
                        LoadOutcome::NotFound
                    );
                    assert_eq!(
                        registry.load(ModelKind::Profiler).unwrap(),
                        LoadOutcome::NotFound
                    );
                });
            }
        });

        assert!(!registry.classifier_loaded());
        assert!(!registry.profiler_loaded());
    }

    #[test]
    fn classify_without_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ModelRegistry::new(dir.path());

        let vector = Preset::Benign.profile().encode();
        assert!(registry.classify(&vector).is_err());
    }

    #[test]
    fn status_reflects_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ModelRegistry::new(dir.path());

        let status = registry.status();
        assert!(!status.classifier_loaded);
        assert!(!status.profiler_loaded);
        assert_eq!(status.inference_count, 0);
        assert_eq!(status.avg_latency_ms, 0.0);
    }

    #[test]
    fn artifact_paths_use_fixed_filenames() {
        let registry = ModelRegistry::new("models");
        assert!(registry
            .artifact_path(ModelKind::Classifier)
            .ends_with("phishing_url_detector.onnx"));
        assert!(registry
            .artifact_path(ModelKind::Profiler)
            .ends_with("threat_actor_profiler.onnx"));
    }
}
