//! Append-only audit journal (`journal_tournoi.log`).
//!
//! One line per draw. This is a product artifact, independent of the
//! developer tracing configured in [`crate::logging`].

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::debug;

use crate::core::types::MatchRecord;

pub const JOURNAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for per-draw audit lines.
pub trait MatchRecorder {
    /// Record one drawn match. Errors are fatal to the caller.
    fn record(&mut self, record: &MatchRecord) -> Result<()>;
}

/// Recorder appending to a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MatchRecorder for FileJournal {
    fn record(&mut self, record: &MatchRecord) -> Result<()> {
        let line = journal_line(record);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open journal {}", self.path.display()))?;
        writeln!(file, "{line}")
            .with_context(|| format!("append journal {}", self.path.display()))?;
        debug!(path = %self.path.display(), "journal line appended");
        Ok(())
    }
}

/// Format one journal line (without trailing newline).
///
/// The line carries the record's own timestamp at second precision, so the
/// journal and the state history agree on when a match was drawn. A timestamp
/// that does not parse is written as stored.
pub fn journal_line(record: &MatchRecord) -> String {
    let at = NaiveDateTime::parse_from_str(&record.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|at| at.format(JOURNAL_TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|_| record.timestamp.clone());
    format!(
        "{} - INFO: Match {} : {} ({}) vs {} ({})",
        at,
        record.match_type,
        record.city1,
        record.region1,
        record.city2,
        record.region2
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MatchType;
    use crate::test_support::record;

    #[test]
    fn journal_line_format_is_stable() {
        let mut entry = record(MatchType::Kpessekou, "Kpalimé", "Plateaux", "Dapaong", "Savanes");
        entry.timestamp = "2025-01-31T09:04:00.987654".to_string();
        assert_eq!(
            journal_line(&entry),
            "2025-01-31 09:04:00 - INFO: Match Kpessekou : Kpalimé (Plateaux) vs Dapaong (Savanes)"
        );
    }

    #[test]
    fn unparsable_timestamp_is_written_as_stored() {
        let mut entry = record(MatchType::Zobibi, "Bassar", "Kara", "Blitta", "Centrale");
        entry.timestamp = "yesterday".to_string();
        assert_eq!(
            journal_line(&entry),
            "yesterday - INFO: Match Zobibi : Bassar (Kara) vs Blitta (Centrale)"
        );
    }

    #[test]
    fn file_journal_appends_one_line_per_record() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("logs").join("journal_tournoi.log");
        let mut journal = FileJournal::new(&path);

        journal
            .record(&record(MatchType::Kpessekou, "Lomé", "Maritime", "Kara", "Kara"))
            .expect("first");
        journal
            .record(&record(MatchType::Zobibi, "Mango", "Savanes", "Notsé", "Plateaux"))
            .expect("second");

        let contents = fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2024-06-01 12:00:00 - "));
        assert!(lines[0].ends_with("INFO: Match Kpessekou : Lomé (Maritime) vs Kara (Kara)"));
        assert!(lines[1].ends_with("INFO: Match Zobibi : Mango (Savanes) vs Notsé (Plateaux)"));
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        // A directory cannot be opened for appending.
        let mut journal = FileJournal::new(temp.path());
        let err = journal
            .record(&record(MatchType::Kpessekou, "Lomé", "Maritime", "Kara", "Kara"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("open journal"));
    }
}
