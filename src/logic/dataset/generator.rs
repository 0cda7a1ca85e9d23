//! Synthetic Sample Generator - toy threat-actor training data
//!
//! Draws per-profile weighted values for the columns that distinguish the
//! actor profiles and uniform values for the rest, matching the domains the
//! models were trained on.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::logic::features::{FEATURE_COUNT, FEATURE_LAYOUT};

// ============================================================================
// PROFILES
// ============================================================================

/// Weighted distribution spec for one actor profile
pub struct ProfileSpec {
    pub label: &'static str,
    /// (value, probability) for having_IP_Address
    pub ip_weights: [(i8, f32); 2],
    /// (value, probability) for SSLfinal_State
    pub ssl_weights: [(i8, f32); 3],
    /// Fixed has_political_keyword value
    pub political: i8,
}

/// The four generated actor profiles
pub const PROFILES: [ProfileSpec; 4] = [
    ProfileSpec {
        label: "state_sponsored",
        ip_weights: [(1, 0.6), (-1, 0.4)],
        ssl_weights: [(-1, 0.7), (0, 0.2), (1, 0.1)],
        political: 0,
    },
    ProfileSpec {
        label: "cybercrime",
        ip_weights: [(1, 0.3), (-1, 0.7)],
        ssl_weights: [(-1, 0.5), (0, 0.3), (1, 0.2)],
        political: 0,
    },
    ProfileSpec {
        label: "hacktivist",
        ip_weights: [(1, 0.4), (-1, 0.6)],
        ssl_weights: [(-1, 0.6), (0, 0.3), (1, 0.1)],
        political: 1,
    },
    ProfileSpec {
        label: "benign",
        ip_weights: [(1, 0.05), (-1, 0.95)],
        ssl_weights: [(-1, 0.05), (0, 0.15), (1, 0.8)],
        political: 0,
    },
];

// ============================================================================
// SAMPLES
// ============================================================================

/// One generated row: feature values in FEATURE_LAYOUT order plus the
/// profile label used as classification target
#[derive(Debug, Clone, Serialize)]
pub struct SyntheticSample {
    pub values: [i8; FEATURE_COUNT],
    pub actor_profile: &'static str,
}

fn weighted_pick<R: Rng>(rng: &mut R, choices: &[(i8, f32)]) -> i8 {
    let roll: f32 = rng.gen();
    let mut acc = 0.0;
    for &(value, weight) in choices {
        acc += weight;
        if roll < acc {
            return value;
        }
    }
    choices[choices.len() - 1].0
}

fn uniform<R: Rng>(rng: &mut R, domain: &[i8]) -> i8 {
    domain.choose(rng).copied().unwrap_or(-1)
}

fn sample<R: Rng>(rng: &mut R, profile: &ProfileSpec) -> SyntheticSample {
    let binary: [i8; 2] = [1, -1];
    let ternary: [i8; 3] = [1, 0, -1];

    let values: [i8; FEATURE_COUNT] = [
        weighted_pick(rng, &profile.ip_weights), // having_IP_Address
        uniform(rng, &ternary),                  // URL_Length
        uniform(rng, &binary),                   // Shortining_Service
        uniform(rng, &binary),                   // having_At_Symbol
        uniform(rng, &binary),                   // double_slash_redirecting
        uniform(rng, &binary),                   // Prefix_Suffix
        uniform(rng, &ternary),                  // having_Sub_Domain
        weighted_pick(rng, &profile.ssl_weights), // SSLfinal_State
        uniform(rng, &ternary),                  // URL_of_Anchor
        uniform(rng, &ternary),                  // Links_in_tags
        uniform(rng, &ternary),                  // SFH
        uniform(rng, &binary),                   // Abnormal_URL
        profile.political,                       // has_political_keyword
    ];

    SyntheticSample {
        values,
        actor_profile: profile.label,
    }
}

/// Generate `num_samples` rows split evenly across the four profiles,
/// shuffled into a single dataset
pub fn generate(num_samples: usize) -> Vec<SyntheticSample> {
    log::info!("Generating synthetic dataset ({} samples)...", num_samples);

    let mut rng = rand::thread_rng();
    let per_profile = num_samples / PROFILES.len();
    let mut samples = Vec::with_capacity(per_profile * PROFILES.len());

    for profile in &PROFILES {
        for _ in 0..per_profile {
            samples.push(sample(&mut rng, profile));
        }
        log::info!("  {}: {} samples", profile.label, per_profile);
    }

    samples.shuffle(&mut rng);
    samples
}

/// CSV header line: 13 feature columns plus the target column
pub fn csv_header() -> String {
    let mut header = FEATURE_LAYOUT.join(",");
    header.push_str(",actor_profile");
    header
}
