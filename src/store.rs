use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::AppResult;
use crate::models::{ReviewRecord, ReviewRow};

/// In-memory table of annotated reviews
///
/// Loaded once at process start and shared read-only for the process
/// lifetime; requests never mutate it.
#[derive(Debug, Default)]
pub struct ReviewStore {
    records: Vec<ReviewRecord>,
}

impl ReviewStore {
    /// Creates a store from already-built records
    pub fn from_records(records: Vec<ReviewRecord>) -> Self {
        Self { records }
    }

    /// Loads the store from a CSV file
    ///
    /// An unreadable file or a row that fails schema deserialization is a
    /// load error; callers treat that as fatal at startup. Rows whose
    /// aspect/sentiment cardinality does not match are kept as-is and
    /// excluded later during pair expansion.
    pub fn from_csv_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Loads the store from any CSV byte source
    pub fn from_csv_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<ReviewRow>() {
            records.push(ReviewRecord::from(row?));
        }

        tracing::debug!(records = records.len(), "Review dataset parsed");

        Ok(Self { records })
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records for one location, in dataset order
    pub fn records_for_location(&self, location_id: i64) -> Vec<&ReviewRecord> {
        self.records
            .iter()
            .filter(|record| record.location_id == location_id)
            .collect()
    }
}
