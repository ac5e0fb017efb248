//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::GenealogyService;
use crate::config::Settings;
use crate::infrastructure::directory::JsonDirectory;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, StudentDirectory};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    pub genealogy: GenealogyService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let directory: Arc<dyn StudentDirectory> =
            Arc::new(JsonDirectory::new(Arc::clone(&fs), settings.data_dir.clone()));
        Self::with_deps(settings, fs, directory)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        directory: Arc<dyn StudentDirectory>,
    ) -> Self {
        let settings = Arc::new(settings);
        let genealogy = GenealogyService::new(directory, settings.fallback_rank);

        Self {
            settings,
            fs,
            genealogy,
        }
    }
}
