//! Ordered generations: the layered family tree handed to presentation.

use crate::domain::entities::{Student, StudentId};
use crate::domain::rank::Rank;

/// All students sharing one rank, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub rank: Rank,
    pub students: Vec<Student>,
}

impl Generation {
    /// Promotion shown in the row header (taken from the first student).
    pub fn promotion(&self) -> Option<&str> {
        self.students.first().map(|s| s.promotion.as_str())
    }

    pub fn ids(&self) -> Vec<StudentId> {
        self.students.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Connector between a student at `parent` column in one row and a student at
/// `child` column in the row below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub parent: usize,
    pub child: usize,
}

/// Layered family tree, most senior generation first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generations {
    rows: Vec<Generation>,
}

impl Generations {
    pub fn new(rows: Vec<Generation>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Generation] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Generation> {
        self.rows.iter()
    }

    pub fn get(&self, row: usize) -> Option<&Generation> {
        self.rows.get(row)
    }

    /// Number of generations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of students across all generations.
    pub fn student_count(&self) -> usize {
        self.rows.iter().map(Generation::len).sum()
    }

    /// `(row, column)` of a student.
    pub fn position_of(&self, id: StudentId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, generation)| {
            generation
                .students
                .iter()
                .position(|s| s.id == id)
                .map(|col| (row, col))
        })
    }

    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.position_of(id)
            .map(|(row, col)| &self.rows[row].students[col])
    }

    /// Connectors from row `row` to row `row + 1`, ordered by parent column
    /// then by child column. Children ids missing from the next row yield no link.
    pub fn links(&self, row: usize) -> Vec<Link> {
        let (Some(upper), Some(lower)) = (self.rows.get(row), self.rows.get(row + 1)) else {
            return Vec::new();
        };
        let mut links = Vec::new();
        for (parent, student) in upper.students.iter().enumerate() {
            for (child, candidate) in lower.students.iter().enumerate() {
                if student.is_parent_of(candidate) {
                    links.push(Link { parent, child });
                }
            }
        }
        links
    }

    /// Students of row `row + 1` that `parent` mentors, in display order.
    pub fn children_of<'a>(&'a self, row: usize, parent: &'a Student) -> impl Iterator<Item = &'a Student> + 'a {
        self.rows
            .get(row + 1)
            .into_iter()
            .flat_map(|g| g.students.iter())
            .filter(move |s| parent.is_parent_of(s))
    }
}

impl<'a> IntoIterator for &'a Generations {
    type Item = &'a Generation;
    type IntoIter = std::slice::Iter<'a, Generation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Generations {
        Generations::new(vec![
            Generation {
                rank: Rank::I3,
                students: vec![
                    Student::new(1, "A", Rank::I3)
                        .with_promotion("2019")
                        .with_children([4, 99]),
                    Student::new(2, "B", Rank::I3).with_children([3, 4]),
                ],
            },
            Generation {
                rank: Rank::I2,
                students: vec![
                    Student::new(3, "C", Rank::I2).with_parents([2]),
                    Student::new(4, "D", Rank::I2).with_parents([1, 2]),
                ],
            },
        ])
    }

    #[test]
    fn given_rows_when_locating_student_then_returns_row_and_column() {
        let tree = sample();
        assert_eq!(tree.position_of(StudentId(4)), Some((1, 1)));
        assert_eq!(tree.position_of(StudentId(99)), None);
        assert_eq!(tree.student_count(), 4);
    }

    #[test]
    fn given_dangling_child_when_computing_links_then_ignored() {
        let tree = sample();
        let links = tree.links(0);
        assert_eq!(
            links,
            vec![
                Link { parent: 0, child: 1 },
                Link { parent: 1, child: 0 },
                Link { parent: 1, child: 1 },
            ]
        );
        assert!(tree.links(1).is_empty());
    }

    #[test]
    fn given_generation_when_reading_header_then_uses_first_promotion() {
        let tree = sample();
        assert_eq!(tree.rows()[0].promotion(), Some("2019"));
    }
}
