//! JSON stats report writer.
//!
//! Writes StatsReport structs to JSON files with proper formatting.
//! Schema is versioned to allow future evolution.

use crate::model::Deck;
use crate::stats::DeckStats;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::ReportError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Deck the statistics were computed for
    pub deck_id: String,

    /// Deck display name
    pub deck_name: String,

    /// Deck play format
    pub format: String,

    /// Timestamp when the report was generated (ISO 8601)
    pub generated_at: String,

    /// The statistics snapshot
    pub stats: DeckStats,
}

/// Build a report from a deck and its freshly computed statistics
///
/// **Public** - called by the stats command before writing
pub fn to_report(deck: &Deck, stats: &DeckStats) -> StatsReport {
    StatsReport {
        version: SCHEMA_VERSION.to_string(),
        deck_id: deck.id.clone(),
        deck_name: deck.name.clone(),
        format: deck.format.clone(),
        generated_at: Utc::now().to_rfc3339(),
        stats: stats.clone(),
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `ReportError::WriteFailed` - I/O error during write
/// * `ReportError::SerializationFailed` - JSON serialization error
/// * `ReportError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &StatsReport, output_path: impl AsRef<Path>) -> Result<(), ReportError> {
    let output_path = output_path.as_ref();

    info!("Writing stats report to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                ReportError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(ReportError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(ReportError::SerializationFailed)?;

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - used by the validate command and tests
pub fn read_report(input_path: impl AsRef<Path>) -> Result<StatsReport, ReportError> {
    let input_path = input_path.as_ref();

    debug!("Reading stats report from: {}", input_path.display());

    let file = File::open(input_path).map_err(ReportError::ReadFailed)?;
    let report: StatsReport = serde_json::from_reader(file).map_err(ReportError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, deck {}",
        report.version, report.deck_id
    );

    Ok(report)
}

/// Validate that the output path is usable
fn validate_output_path(path: &Path) -> Result<(), ReportError> {
    if path.as_os_str().is_empty() {
        return Err(ReportError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(ReportError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Deck;
    use crate::stats::compute_stats;
    use tempfile::NamedTempFile;

    fn sample_report() -> StatsReport {
        let deck = Deck::new("burn-1", "Burn", Some("Modern"), None);
        let stats = compute_stats(&deck.cards);
        to_report(&deck, &stats)
    }

    #[test]
    fn test_write_and_read_report() {
        let report = sample_report();
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.deck_id, "burn-1");
        assert_eq!(loaded.stats, report.stats);
    }

    #[test]
    fn test_read_missing_report_reports_a_read_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = read_report(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::utils::error::ReportError::ReadFailed(_)));
        assert!(err.to_string().starts_with("Failed to read file"));
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        write_report(&sample_report(), &nested_path).unwrap();
        assert!(nested_path.exists());
    }
}
