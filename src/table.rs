//! The recommendation lookup table.
//!
//! Loads a CSV of member-to-formations records once at startup and answers
//! point lookups by member id. The table is immutable for the life of the
//! process; there is no reload path, a restart is required to retry a failed
//! load.

use std::path::Path;

use serde::Serialize;

/// CSV column holding the member identifier.
pub const MEMBER_ID_COLUMN: &str = "ID_Membre";

/// CSV column holding the recommended formations string.
pub const FORMATIONS_COLUMN: &str = "Formations";

/// One row of the recommendation table.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    #[serde(rename = "memberId")]
    pub member_id: i64,
    pub formations: String,
}

/// In-memory, read-only collection of member-to-recommendation records.
///
/// Rows keep their file order. Member ids are not required to be unique;
/// `lookup` resolves duplicates by returning the earliest-loaded row.
#[derive(Debug)]
pub struct RecommendationTable {
    rows: Vec<Record>,
}

/// Errors that prevent the table from loading at all.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("missing required columns in {path}: {columns:?}")]
    MissingColumns { path: String, columns: Vec<String> },

    #[error("failed to read {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Outcome of the startup load, fixed for the process lifetime.
///
/// In `Degraded` every query operation short-circuits with a
/// service-unavailable condition carrying the original load error message.
#[derive(Debug)]
pub enum TableState {
    Available(RecommendationTable),
    Degraded(String),
}

impl RecommendationTable {
    /// Load the table from a CSV file.
    ///
    /// The header must contain both `ID_Membre` and `Formations` columns;
    /// extra columns are ignored. Rows whose member-id cell does not parse as
    /// an integer are dropped, with the dropped count logged.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let display_path = path.display().to_string();

        if !path.is_file() {
            return Err(LoadError::FileNotFound(display_path));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| LoadError::Csv {
                path: display_path.clone(),
                source,
            })?;

        let headers = reader
            .headers()
            .map_err(|source| LoadError::Csv {
                path: display_path.clone(),
                source,
            })?
            .clone();

        let member_idx = headers.iter().position(|h| h == MEMBER_ID_COLUMN);
        let formations_idx = headers.iter().position(|h| h == FORMATIONS_COLUMN);
        let (member_idx, formations_idx) = match (member_idx, formations_idx) {
            (Some(member), Some(formations)) => (member, formations),
            (member, formations) => {
                let mut columns = Vec::new();
                if member.is_none() {
                    columns.push(MEMBER_ID_COLUMN.to_string());
                }
                if formations.is_none() {
                    columns.push(FORMATIONS_COLUMN.to_string());
                }
                return Err(LoadError::MissingColumns {
                    path: display_path,
                    columns,
                });
            }
        };

        let mut rows = Vec::new();
        let mut dropped = 0usize;
        for result in reader.records() {
            let record = result.map_err(|source| LoadError::Csv {
                path: display_path.clone(),
                source,
            })?;

            let raw_id = record.get(member_idx).unwrap_or_default();
            let Ok(member_id) = raw_id.parse::<i64>() else {
                dropped += 1;
                continue;
            };

            rows.push(Record {
                member_id,
                formations: record.get(formations_idx).unwrap_or_default().to_string(),
            });
        }

        if dropped > 0 {
            tracing::warn!(
                dropped,
                path = %display_path,
                "Dropped rows with non-integer member ids"
            );
        }

        Ok(Self { rows })
    }

    /// Look up the recommendation for a member.
    ///
    /// Returns the first row in load order whose member id matches.
    pub fn lookup(&self, member_id: i64) -> Option<&Record> {
        self.rows.iter().find(|row| row.member_id == member_id)
    }

    /// Number of loaded rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Up to `count` rows from the head of the table, in load order.
    pub fn sample(&self, count: usize) -> &[Record] {
        &self.rows[..count.min(self.rows.len())]
    }
}
