//! Phishing SOAR Core - Main Entry Point
//!
//! Loads the classification/clustering pair once, evaluates the four preset
//! URL profiles through the attribution workflow and prints the results.
//! Evaluations run strictly one after another; there is no background work.

mod logic;
pub mod constants;

use logic::attribution::{self, AttributionRecord};
use logic::export;
use logic::features::Preset;
use logic::model::{LoadOutcome, ModelKind, ModelRegistry};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let registry = ModelRegistry::new(constants::get_model_dir());

    // Classifier is mandatory: nothing useful can run without it
    match registry.load(ModelKind::Classifier) {
        Ok(LoadOutcome::Loaded) => {}
        Ok(LoadOutcome::NotFound) => {
            log::error!(
                "Classification model not found at {}. Run training first or check the model directory.",
                registry.artifact_path(ModelKind::Classifier).display()
            );
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("Failed to load classification model: {}", e);
            std::process::exit(1);
        }
    }

    // Profiler is optional: absence degrades to classification-only output
    match registry.load(ModelKind::Profiler) {
        Ok(LoadOutcome::Loaded) => log::info!("Clustering model loaded - attribution enabled"),
        Ok(LoadOutcome::NotFound) => {
            log::warn!("Clustering model not found - classification-only mode")
        }
        Err(e) => {
            log::error!("Failed to load clustering model: {}", e);
            std::process::exit(1);
        }
    }

    for preset in Preset::ALL {
        log::info!("Evaluating preset: {}", preset);
        let row = preset.profile();

        match attribution::infer(&row, &registry) {
            Ok(record) => {
                display(preset, &record);

                if constants::save_enabled() {
                    // A failed save never invalidates the displayed record
                    if let Err(e) = export::persist(&record) {
                        log::error!("Failed to save prediction: {}", e);
                    }
                }
            }
            Err(e) => {
                log::error!("Evaluation failed for preset {}: {}", preset, e);
                std::process::exit(1);
            }
        }
    }

    let status = registry.status();
    log::info!(
        "Done: {} inference calls, avg latency {:.2} ms",
        status.inference_count,
        status.avg_latency_ms
    );
}

fn display(preset: Preset, record: &AttributionRecord) {
    println!();
    println!("=== Phishing Classification Result ({}) ===", preset);
    println!("  Predicted Label:   {}", record.predicted_label);
    println!("  Confidence Score:  {:.2}", record.confidence_score);

    if let (Some(cluster_id), Some(actor)) = (record.cluster_id, record.actor_type) {
        println!("=== Threat Actor Attribution ===");
        println!("  Assigned Cluster:  {}", cluster_id);
        println!("  Likely Actor Type: {} - {}", actor, actor.description());
        println!(
            "  Attribution is based on clustering of behavioral URL features; \
             validate against known threat actor profiles and campaign metadata."
        );
    }
}
