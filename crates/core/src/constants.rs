//! Constants used throughout the COPD core crate.
//!
//! This module contains path, filename and schema constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Default directory for persisted assessment reports when no explicit directory is configured.
pub const DEFAULT_REPORT_DIR: &str = "assessment_reports";

/// Filename prefix for persisted assessment reports.
pub const REPORT_FILE_PREFIX: &str = "assessment_";

/// Filename extension for persisted assessment reports.
pub const REPORT_FILE_EXTENSION: &str = "yaml";

/// Timestamp format embedded in report filenames (second resolution).
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Schema version written into every persisted report.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Eosinophil count (cells/μL) at or above which triple therapy is considered.
pub const EOSINOPHIL_HIGH_THRESHOLD: u32 = 300;

/// Eosinophil count (cells/μL) below which inhaled corticosteroids are avoided.
pub const EOSINOPHIL_LOW_THRESHOLD: u32 = 100;
