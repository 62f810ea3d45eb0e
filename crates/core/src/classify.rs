//! GOLD ABE risk-group classification.
//!
//! A pure, total function of the symptom scores and exacerbation history.
//! Precedence is strict top-down: exacerbation history always dominates
//! symptom burden.

use serde::{Deserialize, Serialize};

/// GOLD ABE risk group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskGroup {
    /// Less symptomatic, low risk.
    A,
    /// More symptomatic, low risk.
    B,
    /// High risk of exacerbations.
    E,
}

impl std::fmt::Display for RiskGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskGroup::A => "A",
            RiskGroup::B => "B",
            RiskGroup::E => "E",
        };
        write!(f, "{}", label)
    }
}

/// Determines the GOLD ABE group from symptom scores and exacerbation history.
///
/// Rules, in order:
/// 1. ≥1 exacerbation in the past year, or any hospitalisation → `E`.
/// 2. mMRC ≥ 2 or CAT ≥ 10 → `B`.
/// 3. Otherwise → `A`.
pub fn classify(mmrc: u8, cat_total: u8, exacerbations: u32, hospitalised: bool) -> RiskGroup {
    if exacerbations >= 1 || hospitalised {
        return RiskGroup::E;
    }

    if mmrc >= 2 || cat_total >= 10 {
        return RiskGroup::B;
    }

    RiskGroup::A
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exacerbation_history_dominates_symptoms() {
        assert_eq!(classify(0, 0, 1, false), RiskGroup::E);
        assert_eq!(classify(0, 0, 0, true), RiskGroup::E);
        assert_eq!(classify(4, 40, 3, true), RiskGroup::E);
    }

    #[test]
    fn symptomatic_low_risk_is_group_b() {
        assert_eq!(classify(2, 0, 0, false), RiskGroup::B);
        assert_eq!(classify(0, 10, 0, false), RiskGroup::B);
        assert_eq!(classify(4, 40, 0, false), RiskGroup::B);
    }

    #[test]
    fn low_symptoms_low_risk_is_group_a() {
        assert_eq!(classify(0, 0, 0, false), RiskGroup::A);
        assert_eq!(classify(1, 9, 0, false), RiskGroup::A);
    }

    #[test]
    fn mmrc_one_cat_eight_no_exacerbations_is_group_a() {
        // Breathless when hurrying up a slight hill (mMRC 1), CAT 8.
        assert_eq!(classify(1, 8, 0, false), RiskGroup::A);
    }

    #[test]
    fn cat_alone_can_trigger_group_b() {
        assert_eq!(classify(0, 12, 0, false), RiskGroup::B);
    }

    #[test]
    fn total_over_valid_input_space() {
        // Every valid combination yields exactly one group, and the
        // precedence rules are mutually exclusive.
        for mmrc in 0..=4u8 {
            for cat_total in 0..=40u8 {
                for exacerbations in 0..=3u32 {
                    for hospitalised in [false, true] {
                        let group = classify(mmrc, cat_total, exacerbations, hospitalised);
                        let expected = if exacerbations >= 1 || hospitalised {
                            RiskGroup::E
                        } else if mmrc >= 2 || cat_total >= 10 {
                            RiskGroup::B
                        } else {
                            RiskGroup::A
                        };
                        assert_eq!(group, expected);
                    }
                }
            }
        }
    }
}
