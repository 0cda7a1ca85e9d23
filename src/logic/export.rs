//! Result Sink - Persist one attribution record as a timestamped CSV row
//!
//! Only invoked when the caller explicitly opts in. An I/O failure here is
//! isolated to the save step; the record that was already computed and
//! displayed stays valid.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::constants::{PREDICTION_PREFIX, PREDICTION_TIMESTAMP_FORMAT};
use crate::logic::attribution::AttributionRecord;

/// Column header matching the original export format
const CSV_HEADER: &str = "Predicted Label,Confidence Score,Assigned Cluster,Actor Type";

/// Filename for a prediction persisted at `timestamp` (second granularity)
pub fn output_filename(timestamp: DateTime<Local>) -> String {
    format!(
        "{}{}.csv",
        PREDICTION_PREFIX,
        timestamp.format(PREDICTION_TIMESTAMP_FORMAT)
    )
}

/// Persist a record to the configured output directory, stamped with the
/// current wall clock
pub fn persist(record: &AttributionRecord) -> io::Result<PathBuf> {
    persist_to(
        record,
        Path::new(&crate::constants::get_output_dir()),
        Local::now(),
    )
}

/// Persist a record to `dir` with an explicit timestamp (split out so tests
/// can pin the clock)
pub fn persist_to(
    record: &AttributionRecord,
    dir: &Path,
    timestamp: DateTime<Local>,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(output_filename(timestamp));
    let mut file = File::create(&path)?;

    writeln!(file, "{}", CSV_HEADER)?;

    let cluster = record
        .cluster_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    let actor = record
        .actor_type
        .map(|a| a.to_string())
        .unwrap_or_default();

    writeln!(
        file,
        "{},{},{},{}",
        record.predicted_label, record.confidence_score, cluster, actor
    )?;
    file.flush()?;

    log::info!("Prediction saved as {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::attribution::ActorType;
    use chrono::TimeZone;

    fn record() -> AttributionRecord {
        AttributionRecord {
            predicted_label: "cybercrime".to_string(),
            confidence_score: 0.91,
            cluster_id: Some(1),
            actor_type: Some(ActorType::Cybercrime),
            evaluated_at: chrono::Utc::now(),
        }
    }

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
    }

    #[test]
    fn filename_has_second_granularity_timestamp() {
        let name = output_filename(fixed_timestamp());
        assert_eq!(name, "prediction_20250314_150926.csv");
    }

    #[test]
    fn persist_writes_exactly_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = persist_to(&record(), dir.path(), fixed_timestamp()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Predicted Label,Confidence Score,Assigned Cluster,Actor Type"
        );
        assert_eq!(lines[1], "cybercrime,0.91,1,Cybercrime");
    }

    #[test]
    fn persist_without_attribution_leaves_cells_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = record();
        rec.cluster_id = None;
        rec.actor_type = None;

        let path = persist_to(&rec, dir.path(), fixed_timestamp()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().nth(1).unwrap(), "cybercrime,0.91,,");
    }

    #[test]
    fn persist_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("outputs");
        assert!(!nested.exists());

        let path = persist_to(&record(), &nested, fixed_timestamp()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn persist_to_unwritable_location_fails_without_touching_record() {
        let rec = record();
        let result = persist_to(
            &rec,
            Path::new("/proc/no-such-dir/outputs"),
            fixed_timestamp(),
        );
        assert!(result.is_err());
        // The record itself is untouched and still displayable
        assert_eq!(rec.predicted_label, "cybercrime");
    }
}
