//! Attribution Types - Actor mapping and the combined evaluation record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ACTOR TYPE
// ============================================================================

/// Human-meaningful label for a cluster index.
///
/// The clustering model is unsupervised: nothing guarantees that cluster 1 of
/// a retrained artifact still lines up with "Cybercrime". The mapping below
/// is an analyst convention tied to the shipped artifact; retraining requires
/// re-validating it against known campaign metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorType {
    Benign,
    Cybercrime,
    StateSponsored,
    Hacktivist,
    Unknown,
}

impl ActorType {
    /// Total mapping from cluster index to actor type; any index outside
    /// the known table falls through to `Unknown`
    pub fn from_cluster_id(cluster_id: i64) -> Self {
        match cluster_id {
            0 => ActorType::Benign,
            1 => ActorType::Cybercrime,
            2 => ActorType::StateSponsored,
            3 => ActorType::Hacktivist,
            _ => ActorType::Unknown,
        }
    }

    /// One-line analyst-facing profile description
    pub fn description(&self) -> &'static str {
        match self {
            ActorType::Benign => "Low-risk, trusted indicators",
            ActorType::Cybercrime => "High-risk, evasive patterns",
            ActorType::StateSponsored => "Neutral but strategic indicators",
            ActorType::Hacktivist => "Politically charged and disruptive traits",
            ActorType::Unknown => "No known actor profile for this cluster",
        }
    }
}

impl std::fmt::Display for ActorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActorType::Benign => "Benign",
            ActorType::Cybercrime => "Cybercrime",
            ActorType::StateSponsored => "State-Sponsored",
            ActorType::Hacktivist => "Hacktivist",
            ActorType::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// ATTRIBUTION RECORD
// ============================================================================

/// Combined output of classification and (optional) clustering for one
/// feature row. Created per evaluation, optionally persisted, otherwise
/// discarded when the request ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionRecord {
    pub predicted_label: String,
    /// Confidence of the predicted label, 0.0 - 1.0
    pub confidence_score: f32,
    /// Cluster index, absent when running classification-only
    pub cluster_id: Option<i64>,
    /// Actor type resolved from the cluster index, absent alongside it
    pub actor_type: Option<ActorType>,
    pub evaluated_at: DateTime<Utc>,
}

impl AttributionRecord {
    /// Whether the attribution (clustering) section is populated
    pub fn has_attribution(&self) -> bool {
        self.cluster_id.is_some()
    }

    /// Serialize as one JSON line for structured logging
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
