//! Patient demographics and history.
//!
//! The profile is collected once per assessment session and handed to the core
//! as a plain value. Nothing in the core mutates it after that point.

use copd_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// Patient gender as recorded at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Smoking status, serialised with the intake form's display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[serde(rename = "Current Smoker")]
    Current,
    #[serde(rename = "Former Smoker")]
    Former,
    #[serde(rename = "Never Smoked")]
    Never,
}

/// Comorbidity tags the recommendation resolver can react to.
///
/// The set is closed: these are the conditions the decision table knows
/// about. Serialised with the intake form's display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comorbidity {
    #[serde(rename = "Cardiovascular Disease")]
    CardiovascularDisease,
    Diabetes,
    Asthma,
    Hypertension,
    #[serde(rename = "Gastroesophageal Reflux")]
    GastroesophagealReflux,
    Osteoporosis,
}

/// Demographic and history fields for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Patient identifier (MRN or equivalent).
    pub patient_id: NonEmptyText,
    /// Age in years.
    pub age: u32,
    pub gender: Gender,
    pub smoking_status: SmokingStatus,
    /// Cumulative smoking exposure; zero for never-smokers.
    pub pack_years: u32,
    /// Body-mass index.
    pub bmi: f64,
    /// Comorbidities recorded at intake, in the order they were entered.
    pub comorbidities: Vec<Comorbidity>,
    /// Free-text list of current medications.
    pub current_medications: String,
}

impl PatientProfile {
    /// Whether the given comorbidity was recorded for this patient.
    pub fn has_comorbidity(&self, comorbidity: Comorbidity) -> bool {
        self.comorbidities.contains(&comorbidity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> PatientProfile {
        PatientProfile {
            patient_id: NonEmptyText::new("MRN-1001").unwrap(),
            age: 64,
            gender: Gender::Female,
            smoking_status: SmokingStatus::Former,
            pack_years: 30,
            bmi: 24.5,
            comorbidities: vec![Comorbidity::Hypertension],
            current_medications: "Amlodipine 5 mg daily".to_string(),
        }
    }

    #[test]
    fn comorbidity_lookup() {
        let profile = sample_profile();
        assert!(profile.has_comorbidity(Comorbidity::Hypertension));
        assert!(!profile.has_comorbidity(Comorbidity::Asthma));
    }

    #[test]
    fn display_strings_survive_serialisation() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"Former Smoker\""));
        assert!(json.contains("\"Hypertension\""));

        let back: PatientProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn cardiovascular_disease_rename() {
        let json = serde_json::to_string(&Comorbidity::CardiovascularDisease).unwrap();
        assert_eq!(json, "\"Cardiovascular Disease\"");
    }
}
