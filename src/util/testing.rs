//! Test support: tracing setup and an in-memory student directory.

use std::collections::HashMap;
use std::io;
use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::StudentId;
use crate::infrastructure::traits::StudentDirectory;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Student directory backed by in-memory payloads.
///
/// Unknown ids answer with `NotFound`. Payloads can be swapped between calls
/// to simulate a directory whose data changes or goes away.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    families: Mutex<HashMap<StudentId, String>>,
    roster: Mutex<Option<String>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(self, id: u64, payload: impl Into<String>) -> Self {
        self.set_family(id, payload);
        self
    }

    pub fn with_roster(self, payload: impl Into<String>) -> Self {
        *self.roster.lock().unwrap_or_else(|e| e.into_inner()) = Some(payload.into());
        self
    }

    pub fn set_family(&self, id: u64, payload: impl Into<String>) {
        self.families
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(StudentId(id), payload.into());
    }

    pub fn remove_family(&self, id: u64) {
        self.families
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&StudentId(id));
    }
}

impl StudentDirectory for MemoryDirectory {
    fn family(&self, id: StudentId) -> io::Result<String> {
        self.families
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no family for {id}")))
    }

    fn roster(&self) -> io::Result<String> {
        self.roster
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no roster"))
    }
}
