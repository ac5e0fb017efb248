//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rank::Rank;

/// Identifier of a student in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A member of a mentorship family.
///
/// Equality is identity: two students are equal when their ids are.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Cohort label, carried through for display
    pub promotion: String,
    pub rank: Rank,
    /// Mentors, one rank more senior
    pub parents: Vec<StudentId>,
    /// Mentees, one rank more junior
    pub children: Vec<StudentId>,
}

impl Student {
    pub fn new(id: u64, name: impl Into<String>, rank: Rank) -> Self {
        Self {
            id: StudentId(id),
            name: name.into(),
            promotion: String::new(),
            rank,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_promotion(mut self, promotion: impl Into<String>) -> Self {
        self.promotion = promotion.into();
        self
    }

    pub fn with_parents(mut self, parents: impl IntoIterator<Item = u64>) -> Self {
        self.parents = parents.into_iter().map(StudentId).collect();
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = u64>) -> Self {
        self.children = children.into_iter().map(StudentId).collect();
        self
    }

    pub fn is_parent_of(&self, other: &Student) -> bool {
        self.children.contains(&other.id)
    }

    /// True when this student's first listed parent is `parent`.
    /// An absent parent or an empty parent list never matches.
    pub fn first_parent_is(&self, parent: Option<&Student>) -> bool {
        match (self.parents.first(), parent) {
            (Some(first), Some(parent)) => *first == parent.id,
            _ => false,
        }
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Roster entry returned by a name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: StudentId,
    pub name: String,
    pub rank: Option<Rank>,
    pub promotion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_same_id_different_fields_when_compared_then_equal() {
        let a = Student::new(7, "Ada", Rank::I1);
        let b = Student::new(7, "Ada Lovelace", Rank::Alumni).with_children([1]);
        assert_eq!(a, b);
    }

    #[test]
    fn given_no_parents_when_checking_first_parent_then_never_matches() {
        let parent = Student::new(1, "P", Rank::I2);
        let orphan = Student::new(2, "O", Rank::I1);
        assert!(!orphan.first_parent_is(Some(&parent)));
        assert!(!orphan.first_parent_is(None));
    }

    #[test]
    fn given_first_parent_when_checking_then_only_first_counts() {
        let a = Student::new(1, "A", Rank::I2);
        let b = Student::new(2, "B", Rank::I2);
        let child = Student::new(3, "C", Rank::I1).with_parents([2, 1]);
        assert!(child.first_parent_is(Some(&b)));
        assert!(!child.first_parent_is(Some(&a)));
    }
}
