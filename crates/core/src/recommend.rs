//! Treatment recommendation resolution.
//!
//! Looks up the static knowledge table for the classified risk group and
//! refines it with the conditional special-consideration rules. The order of
//! the rules is clinically significant and must not be rearranged: the
//! eosinophil sub-branch (group E only) comes first, then comorbidity
//! overlaps, then the hospitalisation flag.

use crate::classify::RiskGroup;
use crate::constants::{EOSINOPHIL_HIGH_THRESHOLD, EOSINOPHIL_LOW_THRESHOLD};
use crate::knowledge::KnowledgeBase;
use crate::profile::Comorbidity;
use serde::{Deserialize, Serialize};

/// The resolved treatment recommendation for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub risk_group: RiskGroup,
    /// Group description from the knowledge table.
    pub group_description: String,
    /// Primary treatment strategy.
    pub treatment_strategy: String,
    /// Ordered medication options for the group.
    pub medications: Vec<String>,
    /// Ordered rescue therapy options (all patients).
    pub rescue_therapy: Vec<String>,
    /// Ordered special considerations; may be empty.
    pub special_considerations: Vec<String>,
}

/// Resolves the recommendation for a classified assessment.
///
/// Appends special considerations in this fixed order:
/// 1. Group E only: exactly one eosinophil-driven consideration
///    (≥300 high / <100 low / otherwise intermediate).
/// 2. Asthma comorbidity → asthma-COPD overlap.
/// 3. Cardiovascular disease comorbidity → cardiovascular monitoring.
/// 4. Hospitalisation in the past year → triple therapy, independent of (1).
pub fn recommend(
    kb: &KnowledgeBase,
    group: RiskGroup,
    eosinophils_cells_per_ul: u32,
    comorbidities: &[Comorbidity],
    hospitalised: bool,
) -> RecommendationRecord {
    let guidance = kb.group(group);

    let mut special_considerations = Vec::new();

    if group == RiskGroup::E {
        let consideration = if eosinophils_cells_per_ul >= EOSINOPHIL_HIGH_THRESHOLD {
            "High eosinophils (>=300 cells/uL): consider triple therapy (LAMA-LABA-ICS) upfront"
        } else if eosinophils_cells_per_ul < EOSINOPHIL_LOW_THRESHOLD {
            "Low eosinophils (<100 cells/uL): avoid ICS if possible due to increased pneumonia risk"
        } else {
            "Intermediate eosinophils (100-299 cells/uL): ICS may provide moderate benefit"
        };
        special_considerations.push(consideration.to_string());
    }

    if comorbidities.contains(&Comorbidity::Asthma) {
        special_considerations.push(
            "Asthma-COPD overlap: consider adding ICS to bronchodilator therapy".to_string(),
        );
    }

    if comorbidities.contains(&Comorbidity::CardiovascularDisease) {
        special_considerations.push(
            "Cardiovascular disease: monitor for cardiovascular effects of bronchodilators"
                .to_string(),
        );
    }

    if hospitalised {
        special_considerations.push(
            "Recent hospitalisation: consider triple therapy (LAMA-LABA-ICS) due to high risk"
                .to_string(),
        );
    }

    RecommendationRecord {
        risk_group: group,
        group_description: guidance.description.to_string(),
        treatment_strategy: guidance.treatment.to_string(),
        medications: guidance
            .medications
            .iter()
            .map(|medication| medication.to_string())
            .collect(),
        rescue_therapy: kb
            .rescue_therapy()
            .iter()
            .map(|therapy| therapy.to_string())
            .collect(),
        special_considerations,
    }
}
