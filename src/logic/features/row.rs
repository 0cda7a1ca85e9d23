//! Feature Row - Typed description of one URL's characteristics
//!
//! The loosely-typed form dictionary becomes a record with named, strongly
//! typed fields. Construction is total: a `FeatureRow` cannot exist with a
//! missing field, so schema validation happens at the type level.

use serde::{Deserialize, Serialize};

use super::layout::FEATURE_COUNT;
use super::vector::FeatureVector;

// ============================================================================
// FIELD DOMAINS
// ============================================================================

/// URL length bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlLength {
    Short,
    Normal,
    Long,
}

/// SSL certificate status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SslState {
    Trusted,
    Suspicious,
    None,
}

/// Sub-domain complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubDomainComplexity {
    None,
    One,
    Many,
}

/// Behavior bucket shared by anchor tags, links-in-tags and the server
/// form handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagBehavior {
    Trusted,
    Neutral,
    Suspicious,
}

impl UrlLength {
    fn encode(self) -> f32 {
        match self {
            UrlLength::Short => 1.0,
            UrlLength::Normal => 0.0,
            UrlLength::Long => -1.0,
        }
    }
}

impl SslState {
    fn encode(self) -> f32 {
        match self {
            SslState::Trusted => 1.0,
            SslState::Suspicious => 0.0,
            SslState::None => -1.0,
        }
    }
}

impl SubDomainComplexity {
    fn encode(self) -> f32 {
        match self {
            SubDomainComplexity::None => 1.0,
            SubDomainComplexity::One => 0.0,
            SubDomainComplexity::Many => -1.0,
        }
    }
}

impl TagBehavior {
    fn encode(self) -> f32 {
        match self {
            TagBehavior::Trusted => 1.0,
            TagBehavior::Neutral => 0.0,
            TagBehavior::Suspicious => -1.0,
        }
    }
}

/// Boolean columns were trained on the {1, -1} domain
fn encode_bool(value: bool) -> f32 {
    if value {
        1.0
    } else {
        -1.0
    }
}

// ============================================================================
// FEATURE ROW
// ============================================================================

/// One URL's characteristics, every model column present by construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub url_length: UrlLength,
    pub ssl_state: SslState,
    pub sub_domain: SubDomainComplexity,
    pub prefix_suffix: bool,
    pub has_ip: bool,
    pub short_service: bool,
    pub at_symbol: bool,
    pub double_slash: bool,
    pub anchor: TagBehavior,
    pub links_in_tags: TagBehavior,
    pub sfh: TagBehavior,
    pub abnormal_url: bool,
    pub political_keyword: bool,
}

impl FeatureRow {
    /// Encode into the numeric domain the models were trained on, in
    /// FEATURE_LAYOUT column order
    pub fn encode(&self) -> FeatureVector {
        let values: [f32; FEATURE_COUNT] = [
            encode_bool(self.has_ip),            // having_IP_Address
            self.url_length.encode(),            // URL_Length
            encode_bool(self.short_service),     // Shortining_Service
            encode_bool(self.at_symbol),         // having_At_Symbol
            encode_bool(self.double_slash),      // double_slash_redirecting
            encode_bool(self.prefix_suffix),     // Prefix_Suffix
            self.sub_domain.encode(),            // having_Sub_Domain
            self.ssl_state.encode(),             // SSLfinal_State
            self.anchor.encode(),                // URL_of_Anchor
            self.links_in_tags.encode(),         // Links_in_tags
            self.sfh.encode(),                   // SFH
            encode_bool(self.abnormal_url),      // Abnormal_URL
            // political keyword was trained on {1, 0}, not {1, -1}
            if self.political_keyword { 1.0 } else { 0.0 },
        ];

        FeatureVector::from_values(values)
    }

    /// Short human-readable summary for display/logging
    pub fn summary(&self) -> String {
        format!(
            "length={:?} ssl={:?} subdomains={:?} ip={} shortened={} political={}",
            self.url_length,
            self.ssl_state,
            self.sub_domain,
            self.has_ip,
            self.short_service,
            self.political_keyword
        )
    }
}
