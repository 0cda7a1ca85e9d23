//! Inference - ONNX Runtime Integration
//!
//! Load and run the ONNX artifacts. Kept separate from the registry so the
//! session plumbing can be swapped without touching caching policy.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use serde::{Deserialize, Serialize};

use crate::logic::features::{FeatureVector, FEATURE_COUNT};

/// Class labels of the trained classifier, in lexicographic order
/// (scikit-learn sorts target classes before fitting)
pub const CLASS_LABELS: &[&str] = &["benign", "cybercrime", "hacktivist", "state_sponsored"];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Classifier output for one feature row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    /// Confidence of the predicted label, 0.0 - 1.0
    pub score: f32,
}

/// Clustering output for one feature row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    pub cluster_id: i64,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// SESSION LOADING
// ============================================================================

/// Load an ONNX session from file
pub fn load_session(model_path: &std::path::Path) -> Result<Session, InferenceError> {
    log::info!("Loading ONNX model from: {}", model_path.display());

    let session = Session::builder()
        .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
        .commit_from_file(model_path)
        .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

    log::info!("ONNX model loaded successfully");
    Ok(session)
}

// ============================================================================
// INFERENCE
// ============================================================================

/// Build the single-row input array. Exactly one row per call, never a
/// batch; schema drift is surfaced here, before the session runs.
fn build_input(vector: &FeatureVector) -> Result<Array2<f32>, InferenceError> {
    vector
        .validate()
        .map_err(|e| InferenceError(e.to_string()))?;

    Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), vector.values.to_vec())
        .map_err(|e| InferenceError(format!("Array error: {}", e)))
}

/// Classify one feature row: argmax over the probability tensor
pub fn classify(
    session: &mut Session,
    vector: &FeatureVector,
) -> Result<ClassificationResult, InferenceError> {
    let output_names: Vec<String> = session.outputs().iter().map(|o| o.name().to_string()).collect();
    let input_array = build_input(vector)?;
    let input_tensor = Value::from_array(input_array)
        .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

    let outputs = session
        .run(ort::inputs![input_tensor])
        .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

    // The exported classifier carries a label output and a probability
    // output; the probability tensor is the f32 one
    for name in &output_names {
        let output = match outputs.get(name) {
            Some(o) => o,
            None => continue,
        };
        let tensor = match output.try_extract_tensor::<f32>() {
            Ok(t) => t,
            Err(_) => continue,
        };
        let data = tensor.1;
        if data.is_empty() {
            continue;
        }

        let mut best_idx = 0usize;
        let mut best_score = data[0];
        for (i, &p) in data.iter().enumerate() {
            if p > best_score {
                best_idx = i;
                best_score = p;
            }
        }

        let label = CLASS_LABELS
            .get(best_idx)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("class_{}", best_idx));

        return Ok(ClassificationResult {
            label,
            score: best_score.clamp(0.0, 1.0),
        });
    }

    Err(InferenceError(
        "classifier produced no probability output".to_string(),
    ))
}

/// Assign one feature row to a cluster: first i64 label tensor wins
pub fn assign_cluster(
    session: &mut Session,
    vector: &FeatureVector,
) -> Result<ClusterAssignment, InferenceError> {
    let output_names: Vec<String> = session.outputs().iter().map(|o| o.name().to_string()).collect();
    let input_array = build_input(vector)?;
    let input_tensor = Value::from_array(input_array)
        .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

    let outputs = session
        .run(ort::inputs![input_tensor])
        .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

    for name in &output_names {
        let output = match outputs.get(name) {
            Some(o) => o,
            None => continue,
        };
        let tensor = match output.try_extract_tensor::<i64>() {
            Ok(t) => t,
            Err(_) => continue,
        };
        if let Some(&cluster_id) = tensor.1.first() {
            return Ok(ClusterAssignment { cluster_id });
        }
    }

    Err(InferenceError(
        "clustering model produced no label output".to_string(),
    ))
}
