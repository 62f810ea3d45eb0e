//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in test harnesses.

use crate::constants::DEFAULT_REPORT_DIR;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    report_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with an explicit report directory.
    pub fn new(report_dir: PathBuf) -> Self {
        Self { report_dir }
    }

    /// Directory that persisted assessment reports are written into.
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_REPORT_DIR))
    }
}
