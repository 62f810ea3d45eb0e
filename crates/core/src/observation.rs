//! Clinical observations captured on assessment completion.
//!
//! An observation is the raw, range-validated input to the scoring pipeline.
//! It is created once when the assessment form is completed and never mutated
//! afterwards; everything derived from it lives in [`crate::scoring`].

use crate::error::AssessmentResult;
use copd_types::Rating;
use serde::{Deserialize, Serialize};

/// Chest X-ray finding tags from the assessment form's fixed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestXrayFinding {
    Hyperinflation,
    #[serde(rename = "Flattened diaphragm")]
    FlattenedDiaphragm,
    Bullae,
    #[serde(rename = "Increased retrosternal airspace")]
    IncreasedRetrosternalAirspace,
    #[serde(rename = "Narrow cardiac silhouette")]
    NarrowCardiacSilhouette,
    #[serde(rename = "Bronchial wall thickening")]
    BronchialWallThickening,
    #[serde(rename = "No significant findings")]
    NoSignificantFindings,
}

/// The eight COPD Assessment Test (CAT) items, each rated 0 (best) to 5 (worst).
///
/// Every field is a [`Rating`], so an in-range total is guaranteed by
/// construction: eight items at 5 gives the scale maximum of 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatResponses {
    /// Cough frequency.
    pub cough: Rating,
    /// Phlegm in chest.
    pub phlegm: Rating,
    /// Chest tightness.
    pub chest_tightness: Rating,
    /// Breathlessness going up hills or stairs.
    pub breathlessness: Rating,
    /// Limitation doing activities at home.
    pub activity_limitation: Rating,
    /// Confidence leaving home.
    pub confidence_leaving_home: Rating,
    /// Sleep quality.
    pub sleep: Rating,
    /// Energy level.
    pub energy: Rating,
}

impl CatResponses {
    /// Builds responses from raw values in form order: cough, phlegm, chest
    /// tightness, breathlessness, activity limitation, confidence leaving
    /// home, sleep, energy.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidRating` if any value is above 5.
    pub fn from_values(values: [u8; 8]) -> AssessmentResult<Self> {
        let [cough, phlegm, chest_tightness, breathlessness, activity_limitation, confidence_leaving_home, sleep, energy] =
            values;
        Ok(Self {
            cough: Rating::new(cough)?,
            phlegm: Rating::new(phlegm)?,
            chest_tightness: Rating::new(chest_tightness)?,
            breathlessness: Rating::new(breathlessness)?,
            activity_limitation: Rating::new(activity_limitation)?,
            confidence_leaving_home: Rating::new(confidence_leaving_home)?,
            sleep: Rating::new(sleep)?,
            energy: Rating::new(energy)?,
        })
    }

    /// Sum of the eight item ratings, in [0, 40].
    pub fn total(&self) -> u8 {
        [
            self.cough,
            self.phlegm,
            self.chest_tightness,
            self.breathlessness,
            self.activity_limitation,
            self.confidence_leaving_home,
            self.sleep,
            self.energy,
        ]
        .iter()
        .map(|rating| rating.value())
        .sum()
    }
}

/// Spirometry triple as measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spirometry {
    /// Measured FEV1 in litres.
    pub fev1_litres: f64,
    /// Predicted FEV1 in litres. A value of zero or below means percent
    /// predicted cannot be computed.
    pub fev1_predicted_litres: f64,
    /// FEV1/FVC ratio.
    pub fev1_fvc_ratio: f64,
}

/// Everything captured when a clinical assessment is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalObservation {
    /// The mMRC dyspnoea descriptor the patient selected, verbatim.
    pub dyspnoea: String,
    /// CAT questionnaire responses.
    pub cat: CatResponses,
    /// Exacerbations in the past year requiring antibiotics or steroids.
    pub exacerbations_last_year: u32,
    /// Whether any COPD exacerbation required hospitalisation in the past year.
    pub hospitalised_last_year: bool,
    pub spirometry: Spirometry,
    /// Blood eosinophil count in cells/μL.
    pub eosinophils_cells_per_ul: u32,
    /// Chest X-ray finding tags, in the order they were recorded.
    pub cxr_findings: Vec<ChestXrayFinding>,
    /// Free-text chest X-ray notes.
    pub cxr_notes: String,
    /// Free-text other laboratory results.
    pub other_labs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_cat(value: u8) -> CatResponses {
        let rating = Rating::new(value).unwrap();
        CatResponses {
            cough: rating,
            phlegm: rating,
            chest_tightness: rating,
            breathlessness: rating,
            activity_limitation: rating,
            confidence_leaving_home: rating,
            sleep: rating,
            energy: rating,
        }
    }

    #[test]
    fn from_values_rejects_out_of_range() {
        use crate::error::AssessmentError;

        let result = CatResponses::from_values([0, 0, 6, 0, 0, 0, 0, 0]);
        assert!(matches!(result, Err(AssessmentError::InvalidRating(_))));
    }

    #[test]
    fn from_values_builds_in_form_order() {
        let cat = CatResponses::from_values([0, 1, 2, 3, 4, 5, 0, 1]).unwrap();
        assert_eq!(cat.chest_tightness.value(), 2);
        assert_eq!(cat.confidence_leaving_home.value(), 5);
        assert_eq!(cat.total(), 16);
    }

    #[test]
    fn cat_total_lower_bound() {
        assert_eq!(uniform_cat(0).total(), 0);
    }

    #[test]
    fn cat_total_upper_bound() {
        assert_eq!(uniform_cat(5).total(), 40);
    }

    #[test]
    fn cat_total_mixed() {
        let mut cat = uniform_cat(0);
        cat.cough = Rating::new(3).unwrap();
        cat.sleep = Rating::new(2).unwrap();
        assert_eq!(cat.total(), 5);
    }

    #[test]
    fn cat_deserialisation_rejects_out_of_range_item() {
        let json = r#"{
            "cough": 6, "phlegm": 0, "chest_tightness": 0, "breathlessness": 0,
            "activity_limitation": 0, "confidence_leaving_home": 0, "sleep": 0, "energy": 0
        }"#;
        assert!(serde_json::from_str::<CatResponses>(json).is_err());
    }

    #[test]
    fn cat_deserialisation_rejects_missing_item() {
        let json = r#"{
            "cough": 0, "phlegm": 0, "chest_tightness": 0, "breathlessness": 0,
            "activity_limitation": 0, "confidence_leaving_home": 0, "sleep": 0
        }"#;
        assert!(serde_json::from_str::<CatResponses>(json).is_err());
    }

    #[test]
    fn cxr_finding_display_strings() {
        let json = serde_json::to_string(&ChestXrayFinding::FlattenedDiaphragm).unwrap();
        assert_eq!(json, "\"Flattened diaphragm\"");
    }
}
