//! Raw directory records and their conversion into students.
//!
//! The directory returns a JSON array. Each element is parsed on its own and
//! elements that do not fit the student shape are dropped.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{SearchResult, Student, StudentId};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::rank::Rank;

/// Rank as sent by the directory: numeric code or label.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRank {
    Code(i64),
    Label(String),
}

impl RawRank {
    /// Unrecognized ranks fall back instead of dropping the record.
    pub fn resolve(&self, fallback: Rank) -> Rank {
        let resolved = match self {
            RawRank::Code(code) => Rank::from_code(*code),
            RawRank::Label(label) => label.parse().ok(),
        };
        resolved.unwrap_or_else(|| {
            debug!(raw = ?self, %fallback, "unknown rank, using fallback");
            fallback
        })
    }
}

/// One family member as sent by the directory.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub rank: RawRank,
    pub children: Vec<StudentId>,
    pub parents: Vec<StudentId>,
    #[serde(rename = "promo")]
    pub promotion: String,
}

impl StudentRecord {
    pub fn into_student(self, fallback: Rank) -> Student {
        Student {
            id: self.id,
            name: self.name,
            promotion: self.promotion,
            rank: self.rank.resolve(fallback),
            parents: self.parents,
            children: self.children,
        }
    }
}

/// One roster entry as sent by the directory.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterRecord {
    pub id: StudentId,
    pub name: String,
    #[serde(default)]
    pub rank: Option<RawRank>,
    #[serde(default, rename = "promo")]
    pub promotion: Option<String>,
}

impl RosterRecord {
    pub fn into_search_result(self, fallback: Rank) -> SearchResult {
        SearchResult {
            id: self.id,
            name: self.name,
            rank: self.rank.map(|r| r.resolve(fallback)),
            promotion: self.promotion,
        }
    }
}

/// Parse a family payload into students, skipping malformed records.
pub fn parse_records(payload: &str, fallback: Rank) -> DomainResult<Vec<Student>> {
    let students = parse_array::<StudentRecord>(payload)?
        .into_iter()
        .map(|record| record.into_student(fallback))
        .collect();
    Ok(students)
}

/// Parse a roster payload into search results, skipping malformed entries.
pub fn parse_search_results(payload: &str, fallback: Rank) -> DomainResult<Vec<SearchResult>> {
    let results = parse_array::<RosterRecord>(payload)?
        .into_iter()
        .map(|record| record.into_search_result(fallback))
        .collect();
    Ok(results)
}

fn parse_array<T: for<'de> Deserialize<'de>>(payload: &str) -> DomainResult<Vec<T>> {
    let value: Value = serde_json::from_str(payload).map_err(|e| DomainError::InvalidPayload {
        message: e.to_string(),
    })?;
    let Value::Array(items) = value else {
        return Err(DomainError::InvalidPayload {
            message: "expected a JSON array of records".to_string(),
        });
    };

    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(index, error = %e, "dropping malformed record");
                None
            }
        })
        .collect();
    debug!(total, kept = parsed.len(), "parsed directory payload");
    Ok(parsed)
}
