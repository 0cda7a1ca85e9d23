//! Model Module - ONNX Inference Engine
//!
//! Registry owns the sessions; inference runs them. Callers never touch a
//! raw session handle.

pub mod inference;
pub mod registry;

// Re-export common types
pub use inference::{ClassificationResult, ClusterAssignment, InferenceError, CLASS_LABELS};
pub use registry::{LoadOutcome, ModelKind, ModelMetadata, ModelRegistry, RegistryStatus};
