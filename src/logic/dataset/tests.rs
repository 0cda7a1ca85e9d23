//! Tests for the synthetic dataset generator and writer

use chrono::TimeZone;

use super::generator::{self, generate, PROFILES};
use super::writer;
use crate::logic::features::{FEATURE_COUNT, FEATURE_LAYOUT};

#[test]
fn generates_equal_blocks_per_profile() {
    let samples = generate(600);
    assert_eq!(samples.len(), 600);

    for profile in &PROFILES {
        let count = samples
            .iter()
            .filter(|s| s.actor_profile == profile.label)
            .count();
        assert_eq!(count, 150, "profile {} block size", profile.label);
    }
}

#[test]
fn political_keyword_is_fixed_per_profile() {
    let samples = generate(400);
    let political_index = crate::logic::features::feature_index("has_political_keyword").unwrap();

    for sample in &samples {
        let expected = if sample.actor_profile == "hacktivist" { 1 } else { 0 };
        assert_eq!(sample.values[political_index], expected);
    }
}

#[test]
fn values_stay_in_trained_domains() {
    let samples = generate(200);
    for sample in &samples {
        for (i, &v) in sample.values.iter().enumerate() {
            assert!(
                (-1..=1).contains(&v),
                "column {} out of domain: {}",
                FEATURE_LAYOUT[i],
                v
            );
        }
    }
}

#[test]
fn csv_header_lists_all_columns() {
    let header = generator::csv_header();
    let columns: Vec<&str> = header.split(',').collect();
    assert_eq!(columns.len(), FEATURE_COUNT + 1);
    assert_eq!(columns[0], "having_IP_Address");
    assert_eq!(columns[FEATURE_COUNT], "actor_profile");
}

#[test]
fn save_csv_stamps_current_wall_clock() {
    let dir = tempfile::tempdir().unwrap();
    let samples = generate(8);

    let path = writer::save_csv(&samples, dir.path()).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();

    // synthetic_threat_data_YYYYMMDD_HHMM.csv
    assert!(name.starts_with("synthetic_threat_data_"));
    assert!(name.ends_with(".csv"));
    let stamp = &name["synthetic_threat_data_".len()..name.len() - ".csv".len()];
    assert_eq!(stamp.len(), 13);
    assert!(stamp.chars().all(|c| c.is_ascii_digit() || c == '_'));
}

#[test]
fn saved_csv_has_header_and_all_rows() {
    let dir = tempfile::tempdir().unwrap();
    let samples = generate(40);
    let timestamp = chrono::Local.with_ymd_and_hms(2025, 3, 14, 15, 9, 0).unwrap();

    let path = writer::save_csv_to(&samples, dir.path(), timestamp).unwrap();
    assert!(path.ends_with("synthetic_threat_data_20250314_1509.csv"));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 41);
    assert_eq!(lines[0], generator::csv_header());

    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), FEATURE_COUNT + 1);
    }
}
