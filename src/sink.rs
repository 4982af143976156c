use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data_models::RankRecord;

/// Where matched rows end up. The pipeline only ever talks to this trait,
/// so tests can swap the CSV file for an in-memory collector.
pub trait RecordSink {
    fn append(&mut self, records: &[RankRecord]) -> Result<usize>;
}

/// What a run did to the sink. Zero matches is an explicit outcome, never an
/// accidental crash on a missing first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOutcome {
    /// Nothing matched; the sink was not touched.
    NoMatches,
    /// This many rows were appended.
    Appended(usize),
}

/// Persist the run's records. When nothing matched, the sink is left alone
/// entirely (no file created, no header written).
pub fn persist<S: RecordSink>(sink: &mut S, records: &[RankRecord]) -> Result<SinkOutcome> {
    if records.is_empty() {
        return Ok(SinkOutcome::NoMatches);
    }
    let written = sink.append(records)?;
    Ok(SinkOutcome::Appended(written))
}

/// Append-only CSV file. The header row is written once per file lifetime,
/// decided by an existence/size check before opening for append. No dedup
/// across runs: re-running identical inputs appends duplicate rows.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> CsvSink {
        CsvSink { path: path.into() }
    }

    fn needs_header(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }
}

impl RecordSink for CsvSink {
    fn append(&mut self, records: &[RankRecord]) -> Result<usize> {
        let needs_header = self.needs_header();
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {} for append", self.path.display()))?;

        // Writer owns the handle; dropping it at the end of this scope
        // closes the file on every exit path.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        let mut written = 0;
        for record in records {
            writer
                .serialize(record)
                .with_context(|| format!("failed to write row to {}", self.path.display()))?;
            written += 1;
        }
        writer
            .flush()
            .with_context(|| format!("failed to flush {}", self.path.display()))?;

        Ok(written)
    }
}
