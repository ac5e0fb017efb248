//! Tree builder: rebuilds generations from a flat list of students.
//!
//! Two phases:
//! 1. Partition students by rank, most senior first.
//! 2. Align each generation under the one above by biasing the order of the
//!    junior row towards each parent's children in turn.
//!
//! Phase 2 is one sequential pass: every parent with children re-sorts the
//! row below in place, so the last such parent of a row decides the final
//! order. Existing rendered trees depend on this; changing it to a combined
//! multi-key sort reorders any family where several parents of one rank have
//! children.

use itertools::Itertools;
use tracing::{instrument, trace};

use crate::domain::entities::{Student, StudentId};
use crate::domain::generations::{Generation, Generations};

/// Build ordered generations from an unordered collection of students.
///
/// Total over any input: empty input gives empty generations, dangling
/// parent/child ids are never matched.
#[instrument(level = "debug", skip_all, fields(students = tracing::field::Empty))]
pub fn build_tree(students: impl IntoIterator<Item = Student>) -> Generations {
    let students: Vec<Student> = students.into_iter().collect();
    tracing::Span::current().record("students", students.len());

    let mut rows = partition_by_rank(students);
    align_generations(&mut rows);
    Generations::new(rows)
}

/// Find the student to highlight. Not found means no highlight.
pub fn resolve_highlight<'a>(
    students: impl IntoIterator<Item = &'a Student>,
    id: StudentId,
) -> Option<&'a Student> {
    students.into_iter().find(|s| s.id == id)
}

fn partition_by_rank(mut students: Vec<Student>) -> Vec<Generation> {
    // stable: equal ranks keep input order
    students.sort_by_key(|s| s.rank);

    let runs = students.into_iter().chunk_by(|s| s.rank);
    let rows: Vec<Generation> = runs
        .into_iter()
        .map(|(rank, group)| Generation {
            rank,
            students: group.collect(),
        })
        .collect();
    rows
}

fn align_generations(rows: &mut [Generation]) {
    for index in 1..rows.len() {
        let (upper, lower) = rows.split_at_mut(index);
        let current = &upper[index - 1].students;
        let next = &mut lower[0].students;

        for parent in current.iter().filter(|s| !s.children.is_empty()) {
            // children of this parent first
            next.sort_by_key(|s| !parent.is_parent_of(s));

            // two parents with one child each, crossed
            if next.len() == 2
                && !next[0].first_parent_is(current.first())
                && !next[1].first_parent_is(current.get(1))
            {
                trace!(parent = %parent.id, "crossed pair, inverting bias");
                next.sort_by_key(|s| parent.is_parent_of(s));
            }
        }
    }
}
