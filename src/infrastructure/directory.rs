//! File-backed student directory
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/
//!   students.json        roster: [{"id", "name", "rank"?, "promo"?}, ...]
//!   families/<id>.json   family of student <id>: [{"id", "name", "rank",
//!                        "children", "parents", "promo"}, ...]
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::StudentId;
use crate::infrastructure::traits::{FileSystem, StudentDirectory};

pub const ROSTER_FILE: &str = "students.json";
pub const FAMILIES_DIR: &str = "families";

/// Student directory reading JSON files from a data directory.
pub struct JsonDirectory {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
}

impl JsonDirectory {
    pub fn new(fs: Arc<dyn FileSystem>, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn family_path(&self, id: StudentId) -> PathBuf {
        self.root.join(FAMILIES_DIR).join(format!("{id}.json"))
    }

    pub fn roster_path(&self) -> PathBuf {
        self.root.join(ROSTER_FILE)
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        if !self.fs.is_file(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ));
        }
        self.fs.read_to_string(path)
    }
}

impl StudentDirectory for JsonDirectory {
    #[instrument(level = "debug", skip(self))]
    fn family(&self, id: StudentId) -> io::Result<String> {
        let path = self.family_path(id);
        debug!("family: reading {}", path.display());
        self.read(&path)
    }

    #[instrument(level = "debug", skip(self))]
    fn roster(&self) -> io::Result<String> {
        let path = self.roster_path();
        debug!("roster: reading {}", path.display());
        self.read(&path)
    }
}
