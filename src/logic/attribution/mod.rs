//! Attribution Module - Dual-model evaluation and actor mapping

pub mod engine;
pub mod types;

pub use engine::infer;
pub use types::{ActorType, AttributionRecord};

#[cfg(test)]
mod tests {
    use super::types::ActorType;

    #[test]
    fn actor_mapping_is_total() {
        assert_eq!(ActorType::from_cluster_id(0), ActorType::Benign);
        assert_eq!(ActorType::from_cluster_id(1), ActorType::Cybercrime);
        assert_eq!(ActorType::from_cluster_id(2), ActorType::StateSponsored);
        assert_eq!(ActorType::from_cluster_id(3), ActorType::Hacktivist);

        for id in [-1, 4, 42, i64::MAX, i64::MIN] {
            assert_eq!(ActorType::from_cluster_id(id), ActorType::Unknown);
        }
    }

    #[test]
    fn actor_display_matches_table_labels() {
        assert_eq!(ActorType::Benign.to_string(), "Benign");
        assert_eq!(ActorType::Cybercrime.to_string(), "Cybercrime");
        assert_eq!(ActorType::StateSponsored.to_string(), "State-Sponsored");
        assert_eq!(ActorType::Hacktivist.to_string(), "Hacktivist");
        assert_eq!(ActorType::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn every_actor_has_a_description() {
        for actor in [
            ActorType::Benign,
            ActorType::Cybercrime,
            ActorType::StateSponsored,
            ActorType::Hacktivist,
            ActorType::Unknown,
        ] {
            assert!(!actor.description().is_empty());
        }
    }
}
