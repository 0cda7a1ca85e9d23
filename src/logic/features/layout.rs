//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The two model artifacts were trained against exactly these 13 columns in
//! exactly this order. The layout is the contract between the Feature Encoder
//! and the inference session.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector.
/// This is the SINGLE SOURCE OF TRUTH for feature layout and matches the
/// column order of the training data.
pub const FEATURE_LAYOUT: &[&str] = &[
    "having_IP_Address",        // 0: URL uses a raw IP address       {1, -1}
    "URL_Length",               // 1: Short=1, Normal=0, Long=-1
    "Shortining_Service",       // 2: URL shortener in use            {1, -1}
    "having_At_Symbol",         // 3: '@' present in URL              {1, -1}
    "double_slash_redirecting", // 4: '//' after the protocol         {1, -1}
    "Prefix_Suffix",            // 5: '-' prefix/suffix in domain     {1, -1}
    "having_Sub_Domain",        // 6: None=1, One=0, Many=-1
    "SSLfinal_State",           // 7: Trusted=1, Suspicious=0, None=-1
    "URL_of_Anchor",            // 8: Trusted=1, Neutral=0, Suspicious=-1
    "Links_in_tags",            // 9: Trusted=1, Neutral=0, Suspicious=-1
    "SFH",                      // 10: Trusted=1, Neutral=0, Suspicious=-1
    "Abnormal_URL",             // 11: URL does not match domain      {1, -1}
    "has_political_keyword",    // 12: political keyword present      {1, 0}
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 13;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches at runtime
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[FEATURE_VERSION]);

    // Hash all feature names in order
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

/// Look up the vector index of a feature by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Layout mismatch between a serialized vector and the current schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub actual_version: u8,
    pub expected_hash: u32,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "feature layout mismatch: expected v{} (hash {:#010x}), got v{} (hash {:#010x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate a vector's version/hash against the current layout
pub fn validate_layout(version: u8, hash: u32) -> Result<(), LayoutMismatchError> {
    let expected_hash = layout_hash();
    if version != FEATURE_VERSION || hash != expected_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            actual_version: version,
            expected_hash,
            actual_hash: hash,
        });
    }
    Ok(())
}
