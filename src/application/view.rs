//! View state for the family currently on display.

use tracing::{instrument, warn};

use crate::application::services::{Family, GenealogyService};
use crate::application::ApplicationResult;
use crate::domain::StudentId;

/// Holds the last successfully loaded family.
///
/// A failed refresh keeps what is already displayed.
#[derive(Debug, Default)]
pub struct GenealogyView {
    family: Family,
}

impl GenealogyView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family(&self) -> &Family {
        &self.family
    }

    /// Load the family of `id` and replace the displayed one on success.
    #[instrument(level = "debug", skip(self, service))]
    pub fn refresh(&mut self, service: &GenealogyService, id: StudentId) -> ApplicationResult<()> {
        match service.family(id) {
            Ok(family) => {
                self.family = family;
                Ok(())
            }
            Err(e) => {
                warn!("refresh of {} failed, keeping previous family: {}", id, e);
                Err(e)
            }
        }
    }
}
