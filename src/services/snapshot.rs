// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot loading and writing.
//!
//! A snapshot is one CSV export of the athlete's activities. Exports are
//! comma-delimited, use `|` as the quote character and only quote fields
//! that need it.

use crate::error::{AppError, Result};
use crate::models::{ActivityId, ActivityRecord, CsvRow, EXPORT_COLUMNS};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const DELIMITER: u8 = b',';
const QUOTE: u8 = b'|';

/// Ordered activity records, in file row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Vec<ActivityRecord>,
}

impl Snapshot {
    pub fn from_records(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }

    /// Load a snapshot from a CSV file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let snapshot = Self::from_reader(file)?;
        tracing::debug!(
            path = %path.display(),
            count = snapshot.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Load a snapshot from any CSV reader.
    ///
    /// Columns are matched by header name. Rows are neither reordered nor
    /// deduplicated.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .quote(QUOTE)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in EXPORT_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(AppError::Parse(format!(
                    "missing required column '{}'",
                    column
                )));
            }
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let row: CsvRow = row
                .deserialize(Some(&headers))
                .map_err(|e| AppError::Parse(format!("line {}: {}", line, e)))?;
            records.push(row.into_record(line)?);
        }

        Ok(Self { records })
    }

    /// Write the snapshot as CSV, header first.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = SnapshotWriter::new(writer)?;
        for record in &self.records {
            writer.write(record)?;
        }
        writer.flush()
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActivityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index records by ID. When an ID repeats, the first row wins.
    pub fn index_by_id(&self) -> HashMap<&ActivityId, &ActivityRecord> {
        let mut index = HashMap::with_capacity(self.records.len());
        for record in &self.records {
            index.entry(&record.id).or_insert(record);
        }
        index
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a ActivityRecord;
    type IntoIter = std::slice::Iter<'a, ActivityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Streaming CSV writer in the export format.
pub struct SnapshotWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> SnapshotWriter<W> {
    /// Create a writer and emit the header row.
    pub fn new(writer: W) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote(QUOTE)
            .quote_style(csv::QuoteStyle::Necessary)
            .has_headers(false)
            .from_writer(writer);
        inner.write_record(EXPORT_COLUMNS)?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, record: &ActivityRecord) -> Result<()> {
        self.inner.serialize(CsvRow::from(record))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
