//! Inference Coordinator - classification first, clustering when available
//!
//! One feature row in, one attribution record out. Classification is
//! mandatory and its errors propagate; a missing clustering model silently
//! degrades to a classification-only record.

use chrono::Utc;

use crate::logic::features::FeatureRow;
use crate::logic::model::{
    ClassificationResult, ClusterAssignment, InferenceError, LoadOutcome, ModelKind,
    ModelRegistry,
};

use super::types::{ActorType, AttributionRecord};

/// Evaluate one feature row against the cached models
pub fn infer(
    row: &FeatureRow,
    registry: &ModelRegistry,
) -> Result<AttributionRecord, InferenceError> {
    let vector = row.encode();

    // Classification is mandatory; any failure aborts this evaluation
    // without producing a partial record
    let classification = registry.classify(&vector)?;
    log::debug!(
        "classified row ({}) as {} ({:.2})",
        row.summary(),
        classification.label,
        classification.score
    );

    // Clustering is best-effort by availability, not by error: a missing
    // artifact degrades, a failing run still propagates
    let cluster = match registry.load(ModelKind::Profiler)? {
        LoadOutcome::Loaded => Some(registry.assign_cluster(&vector)?),
        LoadOutcome::NotFound => None,
    };

    let record = assemble(classification, cluster);
    log::debug!("attribution record: {}", record.to_jsonl());
    Ok(record)
}

/// Assemble the record from whichever inference calls ran
pub fn assemble(
    classification: ClassificationResult,
    cluster: Option<ClusterAssignment>,
) -> AttributionRecord {
    let cluster_id = cluster.map(|c| c.cluster_id);
    let actor_type = cluster_id.map(ActorType::from_cluster_id);

    AttributionRecord {
        predicted_label: classification.label,
        confidence_score: classification.score,
        cluster_id,
        actor_type,
        evaluated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::Preset;

    fn classification() -> ClassificationResult {
        ClassificationResult {
            label: "cybercrime".to_string(),
            score: 0.93,
        }
    }

    #[test]
    fn assemble_with_cluster_resolves_actor_type() {
        let record = assemble(classification(), Some(ClusterAssignment { cluster_id: 1 }));

        assert_eq!(record.predicted_label, "cybercrime");
        assert_eq!(record.confidence_score, 0.93);
        assert_eq!(record.cluster_id, Some(1));
        assert_eq!(record.actor_type, Some(ActorType::Cybercrime));
        assert!(record.has_attribution());
    }

    #[test]
    fn assemble_without_cluster_leaves_attribution_empty() {
        let record = assemble(classification(), None);

        assert_eq!(record.cluster_id, None);
        assert_eq!(record.actor_type, None);
        assert!(!record.has_attribution());
    }

    #[test]
    fn record_serializes_to_one_json_line() {
        let record = assemble(classification(), Some(ClusterAssignment { cluster_id: 1 }));
        let line = record.to_jsonl();

        assert!(!line.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["predicted_label"], "cybercrime");
        assert_eq!(parsed["cluster_id"], 1);
        assert_eq!(parsed["actor_type"], "Cybercrime");
    }

    #[test]
    fn unmapped_cluster_resolves_to_unknown() {
        let record = assemble(classification(), Some(ClusterAssignment { cluster_id: 7 }));
        assert_eq!(record.actor_type, Some(ActorType::Unknown));
    }

    #[test]
    fn infer_without_classifier_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ModelRegistry::new(dir.path());

        let row = Preset::Cybercrime.profile();
        assert!(infer(&row, &registry).is_err());
    }
}
