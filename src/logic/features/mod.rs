//! Features Module - Feature Encoding Engine
//!
//! Maps a human-readable URL description (typed fields or a named preset)
//! into the fixed 13-column numeric row both model artifacts expect.

pub mod layout;
pub mod presets;
pub mod row;
pub mod vector;


// Re-export common types
pub use layout::{feature_index, layout_hash, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use presets::Preset;
pub use row::{FeatureRow, SslState, SubDomainComplexity, TagBehavior, UrlLength};
pub use vector::FeatureVector;
