//! Output tree for one metrics computation.
//!
//! A `Report` is built fresh on every `compute_report` call. It echoes back
//! the valid raw measurements and carries one optional sub-section per
//! formula module. A section that could not be computed is absent, not
//! null; with serde that means the key is skipped entirely. Absence is the
//! only failure signal this crate produces.

use crate::types::{Gender, Skinfolds};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete result of one computation request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub measurements: MeasurementsEcho,
}

/// Echo of the valid raw inputs plus the computed sections.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MeasurementsEcho {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<BmiSection>,

    /// Per-site echo of the numeric skinfold readings, as given.
    /// Always present, even when empty.
    pub skinfolds: Skinfolds,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prot_7_skinfolds: Option<SkinfoldSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harris_benedict: Option<EnergySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub katch_mcardle: Option<EnergySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mifflin_st_jeor: Option<EnergySection>,
}

// ============================================================================
// BMI
// ============================================================================

/// BMI value (1 decimal) and its category band.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BmiSection {
    pub value: f64,
    pub category: BmiCategory,
}

/// The eight BMI bands, in ascending order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum BmiCategory {
    #[serde(rename = "Several Thinness")]
    SeveralThinness,
    #[serde(rename = "Moderate Thinness")]
    ModerateThinness,
    #[serde(rename = "Mild Thinness")]
    MildThinness,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Overheight")]
    Overheight,
    #[serde(rename = "Obese Class I")]
    ObeseClassI,
    #[serde(rename = "Obese Class II")]
    ObeseClassII,
    #[serde(rename = "Obese Class III")]
    ObeseClassIII,
}

impl BmiCategory {
    /// Human-readable band label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::SeveralThinness => "Several Thinness",
            BmiCategory::ModerateThinness => "Moderate Thinness",
            BmiCategory::MildThinness => "Mild Thinness",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overheight => "Overheight",
            BmiCategory::ObeseClassI => "Obese Class I",
            BmiCategory::ObeseClassII => "Obese Class II",
            BmiCategory::ObeseClassIII => "Obese Class III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Energy expenditure (shared by all three BMR formulas)
// ============================================================================

/// BMR and (when an activity factor applies) TDEE, both in kcal/day,
/// rounded up to whole calories.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergySection {
    pub bmr: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdee: Option<i64>,
}

// ============================================================================
// Jackson & Pollock 7-site protocol
// ============================================================================

/// Body-composition estimates from the 7-site skinfold protocol.
///
/// `fatmass` / `leanmass` additionally need a usable weight; without one
/// the section still reports sum, density, and body-fat percent.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SkinfoldSection {
    /// Sum of the seven readings, mm.
    pub skinfoldsum: f64,
    /// Estimated body density, g/cm³.
    pub body_density: f64,
    /// Body fat percentage, 2 decimals.
    pub bf: f64,
    /// Fat mass in kg, 3 decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatmass: Option<f64>,
    /// Lean mass in kg (weight minus rounded fat mass).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leanmass: Option<f64>,
}

impl Report {
    /// An empty report: bare echo, no sections.
    pub(crate) fn empty() -> Self {
        Report {
            measurements: MeasurementsEcho::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_serializes_to_bare_echo() {
        let json = serde_json::to_value(Report::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "measurements": { "skinfolds": {} } })
        );
    }

    #[test]
    fn test_absent_tdee_key_is_skipped() {
        let section = EnergySection {
            bmr: 1705,
            tdee: None,
        };
        let json = serde_json::to_value(section).unwrap();
        assert_eq!(json, serde_json::json!({ "bmr": 1705 }));
    }

    #[test]
    fn test_bmi_category_labels() {
        assert_eq!(BmiCategory::SeveralThinness.label(), "Several Thinness");
        assert_eq!(BmiCategory::ObeseClassIII.to_string(), "Obese Class III");

        let json = serde_json::to_value(BmiCategory::Overheight).unwrap();
        assert_eq!(json, serde_json::json!("Overheight"));
    }

    #[test]
    fn test_bmi_categories_are_ordered() {
        assert!(BmiCategory::SeveralThinness < BmiCategory::Normal);
        assert!(BmiCategory::ObeseClassII < BmiCategory::ObeseClassIII);
    }

    #[test]
    fn test_skinfold_section_without_masses() {
        let section = SkinfoldSection {
            skinfoldsum: 71.0,
            body_density: 1.07,
            bf: 12.35,
            fatmass: None,
            leanmass: None,
        };
        let json = serde_json::to_value(section).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "skinfoldsum": 71.0, "body_density": 1.07, "bf": 12.35 })
        );
    }
}
