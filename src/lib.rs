//! Mentorship family trees.
//!
//! Rebuilds the generations of a student's mentorship family from flat
//! directory records and orders every generation so that children line up
//! under their parents.
//!
//! ```
//! use genealogy::domain::{build_tree, Rank, Student};
//!
//! let tree = build_tree(vec![
//!     Student::new(2, "Bea", Rank::I3).with_parents([1]),
//!     Student::new(1, "Ann", Rank::Alumni).with_children([2]),
//! ]);
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.rows()[0].students[0].name, "Ann");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
