//! Genealogy service
//!
//! Fetches a family dataset from the student directory, turns it into ordered
//! generations and resolves the queried student.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{
    build_tree, parse_records, parse_search_results, resolve_highlight, Generations, Rank,
    SearchResult, Student, StudentId,
};
use crate::infrastructure::traits::StudentDirectory;

/// Family of a queried student, ready for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    pub generations: Generations,
    /// Highlighted student, None when the query is not part of the dataset
    pub query: Option<Student>,
}

/// Service for building family trees from directory data.
pub struct GenealogyService {
    directory: Arc<dyn StudentDirectory>,
    fallback_rank: Rank,
}

impl GenealogyService {
    /// Create a new genealogy service.
    pub fn new(directory: Arc<dyn StudentDirectory>, fallback_rank: Rank) -> Self {
        Self {
            directory,
            fallback_rank,
        }
    }

    /// Fetch and arrange the family of a student.
    ///
    /// Records the directory sends in the wrong shape are skipped; the build
    /// itself cannot fail.
    #[instrument(level = "debug", skip(self))]
    pub fn family(&self, id: StudentId) -> ApplicationResult<Family> {
        let payload = self
            .directory
            .family(id)
            .with_context(|| format!("fetch family of student {id}"))?;
        let students = parse_records(&payload, self.fallback_rank)?;
        debug!("family: {} members", students.len());

        let query = resolve_highlight(&students, id).cloned();
        if query.is_none() {
            debug!("family: student {} not in dataset, no highlight", id);
        }

        Ok(Family {
            generations: build_tree(students),
            query,
        })
    }

    /// Search the roster by name (case-insensitive substring).
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, name: &str) -> ApplicationResult<Vec<SearchResult>> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let payload = self
            .directory
            .roster()
            .with_context(|| "read student roster".to_string())?;
        let results = parse_search_results(&payload, self.fallback_rank)?
            .into_iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>();
        debug!("search: {} matches for {:?}", results.len(), needle);
        Ok(results)
    }
}
