//! Preset Profiles - Canned URL descriptions for the four known scenarios
//!
//! Each preset is a compile-time constant `FeatureRow`; selecting an
//! undefined preset is impossible by construction.

use serde::{Deserialize, Serialize};

use super::row::{FeatureRow, SslState, SubDomainComplexity, TagBehavior, UrlLength};

/// The fixed set of loadable test cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Benign,
    Cybercrime,
    StateSponsored,
    Hacktivist,
}

impl Preset {
    /// All presets, in display order
    pub const ALL: [Preset; 4] = [
        Preset::Benign,
        Preset::Cybercrime,
        Preset::StateSponsored,
        Preset::Hacktivist,
    ];

    /// The canned feature profile for this preset
    pub fn profile(&self) -> FeatureRow {
        match self {
            Preset::Benign => FeatureRow {
                url_length: UrlLength::Normal,
                ssl_state: SslState::Trusted,
                sub_domain: SubDomainComplexity::One,
                prefix_suffix: false,
                has_ip: false,
                short_service: false,
                at_symbol: false,
                double_slash: false,
                anchor: TagBehavior::Trusted,
                links_in_tags: TagBehavior::Trusted,
                sfh: TagBehavior::Trusted,
                abnormal_url: false,
                political_keyword: false,
            },
            Preset::Cybercrime => FeatureRow {
                url_length: UrlLength::Long,
                ssl_state: SslState::None,
                sub_domain: SubDomainComplexity::Many,
                prefix_suffix: true,
                has_ip: true,
                short_service: true,
                at_symbol: true,
                double_slash: true,
                anchor: TagBehavior::Suspicious,
                links_in_tags: TagBehavior::Suspicious,
                sfh: TagBehavior::Suspicious,
                abnormal_url: true,
                political_keyword: false,
            },
            Preset::StateSponsored => FeatureRow {
                url_length: UrlLength::Normal,
                ssl_state: SslState::Trusted,
                sub_domain: SubDomainComplexity::One,
                prefix_suffix: true,
                has_ip: false,
                short_service: false,
                at_symbol: false,
                double_slash: false,
                anchor: TagBehavior::Neutral,
                links_in_tags: TagBehavior::Neutral,
                sfh: TagBehavior::Neutral,
                abnormal_url: false,
                political_keyword: false,
            },
            Preset::Hacktivist => FeatureRow {
                url_length: UrlLength::Long,
                ssl_state: SslState::Suspicious,
                sub_domain: SubDomainComplexity::Many,
                prefix_suffix: true,
                has_ip: true,
                short_service: false,
                at_symbol: true,
                double_slash: true,
                anchor: TagBehavior::Suspicious,
                links_in_tags: TagBehavior::Neutral,
                sfh: TagBehavior::Suspicious,
                abnormal_url: true,
                political_keyword: true,
            },
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Preset::Benign => "Benign",
            Preset::Cybercrime => "Cybercrime",
            Preset::StateSponsored => "State-Sponsored",
            Preset::Hacktivist => "Hacktivist",
        };
        write!(f, "{}", name)
    }
}
