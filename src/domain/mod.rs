//! Domain layer: entities and the tree-building algorithm
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;
pub mod generations;
pub mod rank;
pub mod record;

pub use builder::{build_tree, resolve_highlight};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use generations::{Generation, Generations, Link};
pub use rank::Rank;
pub use record::{parse_records, parse_search_results};
