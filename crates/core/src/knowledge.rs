//! Static GOLD treatment knowledge base.
//!
//! The table is immutable and built exactly once per process; every consumer
//! goes through the read-only lookups keyed by [`RiskGroup`] or [`GoldStage`].
//! Contents follow the GOLD ABE classification and pharmacologic tables.

use crate::classify::RiskGroup;
use crate::scoring::GoldStage;
use std::sync::LazyLock;

/// Treatment guidance for one GOLD ABE group.
#[derive(Debug, Clone)]
pub struct GroupGuidance {
    pub group: RiskGroup,
    /// Short description, e.g. "Less symptomatic, low risk".
    pub description: &'static str,
    /// Entry criteria as displayed in the reference table.
    pub criteria: &'static str,
    /// Primary treatment strategy.
    pub treatment: &'static str,
    /// Ordered medication options.
    pub medications: &'static [&'static str],
}

/// Reference entry for one spirometry stage.
#[derive(Debug, Clone)]
pub struct StageReference {
    pub stage: GoldStage,
    /// FEV1 percent-predicted band, e.g. "50-79%".
    pub fev1_band: &'static str,
}

/// Immutable COPD treatment knowledge base.
#[derive(Debug)]
pub struct KnowledgeBase {
    groups: [GroupGuidance; 3],
    rescue_therapy: &'static [&'static str],
    stages: [StageReference; 4],
}

static KNOWLEDGE_BASE: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::build);

impl KnowledgeBase {
    /// The process-wide knowledge base, built on first use.
    pub fn global() -> &'static KnowledgeBase {
        &KNOWLEDGE_BASE
    }

    fn build() -> Self {
        KnowledgeBase {
            groups: [
                GroupGuidance {
                    group: RiskGroup::A,
                    description: "Less symptomatic, low risk",
                    criteria: "mMRC 0-1, CAT <10, no exacerbations",
                    treatment: "Long-acting bronchodilator (LAMA or LABA)",
                    medications: &[
                        "Tiotropium (LAMA) 18 mcg once daily",
                        "Salmeterol (LABA) 50 mcg twice daily",
                        "Formoterol (LABA) 20 mcg twice daily",
                        "Indacaterol (LABA) 75-150 mcg once daily",
                    ],
                },
                GroupGuidance {
                    group: RiskGroup::B,
                    description: "More symptomatic, low risk",
                    criteria: "mMRC >=2 or CAT >=10, no exacerbations",
                    treatment: "Dual bronchodilator therapy (LAMA-LABA)",
                    medications: &[
                        "Tiotropium-Olodaterol (2.5/2.5 mcg, 2 inhalations once daily)",
                        "Umeclidinium-Vilanterol (62.5/25 mcg, 1 inhalation daily)",
                        "Glycopyrronium-Indacaterol (50/110 mcg once daily)",
                        "Glycopyrrolate-Formoterol (9/4.8 mcg, 2 inhalations twice daily)",
                        "Aclidinium-Formoterol (400/12 mcg once daily)",
                    ],
                },
                GroupGuidance {
                    group: RiskGroup::E,
                    description: "High risk of exacerbations",
                    criteria: ">=1 moderate or severe exacerbation",
                    treatment: "LAMA-LABA (may add ICS based on eosinophils)",
                    medications: &[
                        "LAMA-LABA combinations (same as Group B)",
                        "If eosinophils >=300 cells/uL: Triple therapy (LAMA-LABA-ICS)",
                        "Umeclidinium-Vilanterol-Fluticasone",
                        "Glycopyrronium-Indacaterol-Mometasone",
                        "Tiotropium + Budesonide-Formoterol",
                    ],
                },
            ],
            rescue_therapy: &[
                "Albuterol (SABA) 90 mcg, 2 puffs as needed",
                "Levalbuterol (SABA) 45 mcg, 2 puffs as needed",
                "Ipratropium-Albuterol (20/100 mcg) 1 inhalation every 4-6 hours as needed",
            ],
            stages: [
                StageReference {
                    stage: GoldStage::Gold1,
                    fev1_band: ">=80%",
                },
                StageReference {
                    stage: GoldStage::Gold2,
                    fev1_band: "50-79%",
                },
                StageReference {
                    stage: GoldStage::Gold3,
                    fev1_band: "30-49%",
                },
                StageReference {
                    stage: GoldStage::Gold4,
                    fev1_band: "<30%",
                },
            ],
        }
    }

    /// Guidance for one risk group.
    pub fn group(&self, group: RiskGroup) -> &GroupGuidance {
        self.groups
            .iter()
            .find(|guidance| guidance.group == group)
            .expect("knowledge base covers every risk group")
    }

    /// All group guidance entries in A, B, E order.
    pub fn groups(&self) -> &[GroupGuidance] {
        &self.groups
    }

    /// Rescue therapy options, shared across all groups.
    pub fn rescue_therapy(&self) -> &'static [&'static str] {
        self.rescue_therapy
    }

    /// Spirometry stage reference entry.
    pub fn stage(&self, stage: GoldStage) -> &StageReference {
        self.stages
            .iter()
            .find(|reference| reference.stage == stage)
            .expect("knowledge base covers every stage")
    }

    /// All spirometry stage reference entries in GOLD 1–4 order.
    pub fn stages(&self) -> &[StageReference] {
        &self.stages
    }
}
