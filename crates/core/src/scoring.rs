//! Symptom scores and airflow-limitation staging.
//!
//! Three independent, stateless calculators: the mMRC dyspnoea lookup, the
//! CAT questionnaire total, and the FEV1 percent-predicted GOLD stage.
//! [`ScoreResult::from_observation`] composes all three for one observation.

use crate::error::{AssessmentError, AssessmentResult};
use crate::observation::ClinicalObservation;
use serde::{Deserialize, Serialize};

/// The five mMRC dyspnoea scale descriptors, index = score.
///
/// Matching is exact: the selection handed to the core must be one of these
/// verbatim. Anything else is rejected rather than silently scored 0.
pub const MMRC_DESCRIPTORS: [&str; 5] = [
    "No breathlessness except with strenuous exercise",
    "Breathless when hurrying or walking up a slight hill",
    "Walks slower than people of same age due to breathlessness or has to stop for breath when walking at own pace",
    "Stops for breath after walking about 100 meters or after a few minutes",
    "Too breathless to leave house or breathless when dressing",
];

/// Computes the mMRC dyspnoea score (0–4) from the selected descriptor.
///
/// # Errors
///
/// Returns `AssessmentError::InvalidSelection` if the descriptor does not
/// exactly match one of [`MMRC_DESCRIPTORS`].
pub fn mmrc_score(selection: &str) -> AssessmentResult<u8> {
    MMRC_DESCRIPTORS
        .iter()
        .position(|descriptor| *descriptor == selection)
        .map(|index| index as u8)
        .ok_or_else(|| AssessmentError::InvalidSelection(selection.to_string()))
}

/// GOLD airflow-limitation stage by FEV1 percent predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GoldStage {
    #[serde(rename = "GOLD 1")]
    Gold1,
    #[serde(rename = "GOLD 2")]
    Gold2,
    #[serde(rename = "GOLD 3")]
    Gold3,
    #[serde(rename = "GOLD 4")]
    Gold4,
}

impl GoldStage {
    /// Stage label, e.g. "GOLD 2".
    pub fn label(self) -> &'static str {
        match self {
            GoldStage::Gold1 => "GOLD 1",
            GoldStage::Gold2 => "GOLD 2",
            GoldStage::Gold3 => "GOLD 3",
            GoldStage::Gold4 => "GOLD 4",
        }
    }

    /// Severity wording attached to the stage.
    pub fn severity(self) -> &'static str {
        match self {
            GoldStage::Gold1 => "Mild",
            GoldStage::Gold2 => "Moderate",
            GoldStage::Gold3 => "Severe",
            GoldStage::Gold4 => "Very Severe",
        }
    }

    /// Stage for a given FEV1 percent predicted.
    ///
    /// Thresholds are inclusive at the lower bound of each stage:
    /// ≥80 → GOLD 1, ≥50 → GOLD 2, ≥30 → GOLD 3, else GOLD 4.
    pub fn from_percent_predicted(percent: f64) -> Self {
        if percent >= 80.0 {
            GoldStage::Gold1
        } else if percent >= 50.0 {
            GoldStage::Gold2
        } else if percent >= 30.0 {
            GoldStage::Gold3
        } else {
            GoldStage::Gold4
        }
    }
}

impl std::fmt::Display for GoldStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.severity())
    }
}

/// Airflow limitation derived from spirometry, when computable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirflowResult {
    /// FEV1 as a percentage of the predicted value.
    pub percent_predicted: f64,
    pub stage: GoldStage,
}

/// Classifies airflow limitation from measured and predicted FEV1.
///
/// Returns `None` when the predicted volume is zero or below: percent
/// predicted is then undefined, which is a valid state and deliberately
/// distinct from a computed 0%.
pub fn airflow_severity(fev1_litres: f64, fev1_predicted_litres: f64) -> Option<AirflowResult> {
    if fev1_predicted_litres <= 0.0 {
        return None;
    }

    let percent_predicted = (fev1_litres / fev1_predicted_litres) * 100.0;
    Some(AirflowResult {
        percent_predicted,
        stage: GoldStage::from_percent_predicted(percent_predicted),
    })
}

/// All scores computed from one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// mMRC dyspnoea score, 0–4.
    pub mmrc: u8,
    /// CAT questionnaire total, 0–40.
    pub cat_total: u8,
    /// Airflow limitation; `None` when predicted FEV1 was not available.
    pub airflow: Option<AirflowResult>,
}

impl ScoreResult {
    /// Runs all three calculators against an observation.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidSelection` if the dyspnoea descriptor
    /// is not recognised. The CAT ratings are range-checked at construction
    /// time and cannot fail here.
    pub fn from_observation(observation: &ClinicalObservation) -> AssessmentResult<Self> {
        Ok(Self {
            mmrc: mmrc_score(&observation.dyspnoea)?,
            cat_total: observation.cat.total(),
            airflow: airflow_severity(
                observation.spirometry.fev1_litres,
                observation.spirometry.fev1_predicted_litres,
            ),
        })
    }
}
