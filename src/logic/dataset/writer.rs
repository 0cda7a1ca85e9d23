//! Dataset Writer - save generated samples as a timestamped CSV

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::generator::{csv_header, SyntheticSample};

/// Minute-granularity timestamp used in dataset filenames
pub const DATASET_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Filename for a dataset saved at `timestamp`
pub fn dataset_filename(timestamp: DateTime<Local>) -> String {
    format!(
        "synthetic_threat_data_{}.csv",
        timestamp.format(DATASET_TIMESTAMP_FORMAT)
    )
}

/// Save samples to `dir`, stamped with the current wall clock
pub fn save_csv(samples: &[SyntheticSample], dir: &Path) -> io::Result<PathBuf> {
    save_csv_to(samples, dir, Local::now())
}

/// Save samples with an explicit timestamp (split out so tests can pin
/// the clock)
pub fn save_csv_to(
    samples: &[SyntheticSample],
    dir: &Path,
    timestamp: DateTime<Local>,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(dataset_filename(timestamp));
    let mut file = File::create(&path)?;

    writeln!(file, "{}", csv_header())?;

    for sample in samples {
        let row: Vec<String> = sample.values.iter().map(|v| v.to_string()).collect();
        writeln!(file, "{},{}", row.join(","), sample.actor_profile)?;
    }
    file.flush()?;

    log::info!(
        "Synthetic dataset saved to '{}' ({} rows)",
        path.display(),
        samples.len()
    );
    Ok(path)
}
