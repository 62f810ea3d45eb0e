//! # COPD Core
//!
//! Core scoring, classification and recommendation logic for the COPD
//! assessment system.
//!
//! This crate contains pure domain operations and report persistence:
//! - Symptom score calculators (mMRC, CAT, spirometry staging)
//! - GOLD ABE risk-group classification
//! - Treatment recommendation resolution against a static knowledge table
//! - Assessment report assembly and single-shot YAML persistence
//!
//! **No UI concerns**: form rendering, navigation and presentation belong to
//! whatever collaborator drives this crate (see `copd-cli` for one).

pub mod classify;
pub mod config;
pub mod constants;
pub mod error;
pub mod knowledge;
pub mod observation;
pub mod profile;
pub mod recommend;
pub mod report;
pub mod scoring;

pub use classify::{classify, RiskGroup};
pub use config::CoreConfig;
pub use error::{AssessmentError, AssessmentResult};
pub use knowledge::KnowledgeBase;
pub use observation::{CatResponses, ChestXrayFinding, ClinicalObservation, Spirometry};
pub use profile::{Comorbidity, Gender, PatientProfile, SmokingStatus};
pub use recommend::{recommend, RecommendationRecord};
pub use report::{AssessmentReport, ReportService};
pub use scoring::{airflow_severity, mmrc_score, AirflowResult, GoldStage, ScoreResult};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// The input boundary handed over by the UI collaborator: one patient
/// profile plus the completed clinical observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub patient: PatientProfile,
    pub observation: ClinicalObservation,
}

/// Pure assessment pipeline operations - no UI concerns.
#[derive(Clone)]
pub struct AssessmentService {
    cfg: Arc<CoreConfig>,
}

impl AssessmentService {
    /// Creates a new instance of `AssessmentService`.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Runs the linear pipeline for one assessment:
    /// scores → risk group → recommendation → assembled report.
    ///
    /// # Errors
    ///
    /// Returns an `AssessmentError` if the dyspnoea descriptor is not
    /// recognised. All other inputs are range-validated at construction.
    pub fn assess(
        &self,
        patient: PatientProfile,
        observation: ClinicalObservation,
    ) -> AssessmentResult<AssessmentReport> {
        let scores = ScoreResult::from_observation(&observation)?;

        let group = classify(
            scores.mmrc,
            scores.cat_total,
            observation.exacerbations_last_year,
            observation.hospitalised_last_year,
        );

        let recommendation = recommend(
            KnowledgeBase::global(),
            group,
            observation.eosinophils_cells_per_ul,
            &patient.comorbidities,
            observation.hospitalised_last_year,
        );

        Ok(AssessmentReport::assemble(
            patient,
            observation,
            scores,
            recommendation,
        ))
    }

    /// Runs the pipeline and persists the resulting report.
    ///
    /// # Returns
    ///
    /// The assembled report and the path it was written to.
    ///
    /// # Errors
    ///
    /// Returns an `AssessmentError` if assessment or persistence fails.
    /// Persistence is single-shot; nothing is retried.
    pub fn assess_and_save(
        &self,
        patient: PatientProfile,
        observation: ClinicalObservation,
    ) -> AssessmentResult<(AssessmentReport, PathBuf)> {
        let report = self.assess(patient, observation)?;
        let path = ReportService::new(self.cfg.clone()).save(&report)?;
        Ok((report, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copd_types::{NonEmptyText, Rating};
    use tempfile::TempDir;

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap()
    }

    fn patient() -> PatientProfile {
        PatientProfile {
            patient_id: NonEmptyText::new("MRN-3310").unwrap(),
            age: 58,
            gender: Gender::Other,
            smoking_status: SmokingStatus::Former,
            pack_years: 20,
            bmi: 22.8,
            comorbidities: vec![],
            current_medications: String::new(),
        }
    }

    fn quiet_observation() -> ClinicalObservation {
        ClinicalObservation {
            dyspnoea: "Breathless when hurrying or walking up a slight hill".to_string(),
            cat: CatResponses {
                cough: rating(1),
                phlegm: rating(1),
                chest_tightness: rating(1),
                breathlessness: rating(2),
                activity_limitation: rating(1),
                confidence_leaving_home: rating(0),
                sleep: rating(1),
                energy: rating(1),
            },
            exacerbations_last_year: 0,
            hospitalised_last_year: false,
            spirometry: Spirometry {
                fev1_litres: 2.4,
                fev1_predicted_litres: 3.0,
                fev1_fvc_ratio: 0.68,
            },
            eosinophils_cells_per_ul: 150,
            cxr_findings: vec![ChestXrayFinding::NoSignificantFindings],
            cxr_notes: String::new(),
            other_labs: String::new(),
        }
    }

    fn service(temp: &TempDir) -> AssessmentService {
        AssessmentService::new(Arc::new(CoreConfig::new(temp.path().join("reports"))))
    }

    #[test]
    fn mild_symptoms_no_exacerbations_is_group_a() {
        let temp = TempDir::new().unwrap();
        let report = service(&temp)
            .assess(patient(), quiet_observation())
            .unwrap();

        // mMRC 1, CAT 8, no exacerbation history.
        assert_eq!(report.scores.mmrc, 1);
        assert_eq!(report.scores.cat_total, 8);
        assert_eq!(report.recommendation.risk_group, RiskGroup::A);
        assert_eq!(report.scores.airflow.unwrap().stage, GoldStage::Gold1);
    }

    #[test]
    fn unknown_descriptor_fails_the_whole_assessment() {
        let temp = TempDir::new().unwrap();
        let mut observation = quiet_observation();
        observation.dyspnoea = "Sometimes short of breath".to_string();

        let result = service(&temp).assess(patient(), observation);
        assert!(matches!(result, Err(AssessmentError::InvalidSelection(_))));
    }

    #[test]
    fn assess_and_save_persists_a_loadable_report() {
        let temp = TempDir::new().unwrap();
        let cfg = Arc::new(CoreConfig::new(temp.path().join("reports")));
        let service = AssessmentService::new(cfg.clone());

        let (report, path) = service
            .assess_and_save(patient(), quiet_observation())
            .unwrap();

        let loaded = ReportService::new(cfg).load(&path).unwrap();
        assert_eq!(loaded, report);
    }

    #[test]
    fn request_boundary_deserialises_from_json() {
        let request = AssessmentRequest {
            patient: patient(),
            observation: quiet_observation(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: AssessmentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
