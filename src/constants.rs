//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change default model or output locations, only edit this file.

/// Default directory containing the ONNX model artifacts
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Classification model artifact filename
pub const CLASSIFIER_FILE: &str = "phishing_url_detector.onnx";

/// Clustering model artifact filename
pub const PROFILER_FILE: &str = "threat_actor_profiler.onnx";

/// Default directory for persisted prediction rows
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Filename prefix for persisted predictions
pub const PREDICTION_PREFIX: &str = "prediction_";

/// Second-granularity timestamp format used in prediction filenames
pub const PREDICTION_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Phishing-SOAR Core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model directory from environment or use default
pub fn get_model_dir() -> String {
    std::env::var("SOAR_MODEL_DIR")
        .unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string())
}

/// Get output directory from environment or use default
pub fn get_output_dir() -> String {
    std::env::var("SOAR_OUTPUT_DIR")
        .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string())
}

/// Check if prediction rows should be saved to CSV
pub fn save_enabled() -> bool {
    std::env::var("SOAR_SAVE_PREDICTIONS")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}
