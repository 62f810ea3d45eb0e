//! Assessment report assembly and persistence.
//!
//! A report is the persisted unit: patient inputs, computed scores and the
//! resolved recommendation, stamped with the assembly time and a schema
//! version. Reports are written once and never updated or deleted.
//!
//! # Storage layout
//!
//! One YAML document per report under the configured report directory:
//!
//! ```text
//! <report_dir>/
//! └── assessment_<YYYYMMDD_HHMMSS>_<8-hex>.yaml
//! ```
//!
//! The timestamp gives second resolution; the random hex suffix keeps names
//! unique when two reports land within the same second.

use crate::config::CoreConfig;
use crate::constants::{
    REPORT_FILE_EXTENSION, REPORT_FILE_PREFIX, REPORT_SCHEMA_VERSION, REPORT_TIMESTAMP_FORMAT,
};
use crate::error::{AssessmentError, AssessmentResult};
use crate::observation::ClinicalObservation;
use crate::profile::PatientProfile;
use crate::recommend::RecommendationRecord;
use crate::scoring::ScoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// One complete, immutable assessment report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Persisted-format schema version; bumped on incompatible changes.
    pub schema_version: u32,
    /// UTC timestamp when the report was assembled.
    pub created_at: DateTime<Utc>,
    pub patient: PatientProfile,
    pub observation: ClinicalObservation,
    pub scores: ScoreResult,
    pub recommendation: RecommendationRecord,
}

impl AssessmentReport {
    /// Assembles a report from the pipeline's inputs and outputs, stamping
    /// the current time and schema version.
    pub fn assemble(
        patient: PatientProfile,
        observation: ClinicalObservation,
        scores: ScoreResult,
        recommendation: RecommendationRecord,
    ) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            created_at: Utc::now(),
            patient,
            observation,
            scores,
            recommendation,
        }
    }
}

/// Service for persisting assessment reports.
#[derive(Clone)]
pub struct ReportService {
    cfg: Arc<CoreConfig>,
}

impl ReportService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Persists a report as one YAML file under the configured directory.
    ///
    /// The write is single-shot with no retry; the caller decides whether to
    /// retry or surface the failure.
    ///
    /// # Returns
    ///
    /// The path of the written file.
    ///
    /// # Errors
    ///
    /// Returns an `AssessmentError` if the report directory cannot be
    /// created, the report cannot be serialised, or the file write fails.
    pub fn save(&self, report: &AssessmentReport) -> AssessmentResult<PathBuf> {
        let report_dir = self.cfg.report_dir();
        fs::create_dir_all(report_dir).map_err(AssessmentError::StorageDirCreation)?;

        let path = report_dir.join(Self::filename_for(&report.created_at));

        let yaml = serde_yaml::to_string(report).map_err(AssessmentError::YamlSerialisation)?;
        fs::write(&path, yaml).map_err(AssessmentError::FileWrite)?;

        tracing::info!(path = %path.display(), "assessment report saved");
        Ok(path)
    }

    /// Reads a previously persisted report back.
    ///
    /// # Errors
    ///
    /// Returns an `AssessmentError` if the file cannot be read, the YAML is
    /// malformed, or the report carries an unsupported schema version.
    pub fn load(&self, path: &Path) -> AssessmentResult<AssessmentReport> {
        let contents = fs::read_to_string(path).map_err(AssessmentError::FileRead)?;
        let report: AssessmentReport =
            serde_yaml::from_str(&contents).map_err(AssessmentError::YamlDeserialisation)?;

        if report.schema_version != REPORT_SCHEMA_VERSION {
            return Err(AssessmentError::UnsupportedSchemaVersion(
                report.schema_version,
            ));
        }

        Ok(report)
    }

    /// Builds the report filename for a given creation time.
    ///
    /// Pattern: `assessment_<YYYYMMDD_HHMMSS>_<8-hex>.yaml`. The suffix comes
    /// from a fresh v4 UUID so two reports created within the same second
    /// still get distinct names.
    fn filename_for(created_at: &DateTime<Utc>) -> String {
        let timestamp = created_at.format(REPORT_TIMESTAMP_FORMAT);
        let suffix = Uuid::new_v4().simple().to_string();
        format!(
            "{}{}_{}.{}",
            REPORT_FILE_PREFIX,
            timestamp,
            &suffix[..8],
            REPORT_FILE_EXTENSION
        )
    }
}
