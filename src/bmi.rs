//! Body-mass index calculator.
//!
//! Computes `weight / (height_m)^2` and maps the result onto the eight
//! category bands. Requires weight, height, and age to be usable; age is
//! part of the historical precondition for this calculator even though the
//! formula itself never reads it.

use crate::report::{BmiCategory, BmiSection};
use crate::types::{round_to, usable, Measurements};

/// Compute the BMI section, or `None` when a required input is missing.
pub fn compute(input: &Measurements) -> Option<BmiSection> {
    let weight = usable(input.weight)?;
    let height = usable(input.height)?;
    if usable(input.age).is_none() {
        tracing::debug!("skipping bmi: age missing or invalid");
        return None;
    }

    let height_m = height / 100.0;
    let bmi = weight / (height_m * height_m);
    if !bmi.is_finite() {
        tracing::debug!("skipping bmi: non-finite result (height {height} cm)");
        return None;
    }

    Some(BmiSection {
        value: round_to(bmi, 1),
        category: categorize(bmi),
    })
}

/// Map a raw BMI onto its band.
///
/// Bands are contiguous with inclusive upper bounds. The historical band
/// table had an unreachable "Obese Class II" clause (`bmi < 35` after
/// `bmi <= 35` had already matched); here 35 closes Class I and 40 closes
/// Class II.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi <= 16.0 {
        BmiCategory::SeveralThinness
    } else if bmi <= 17.0 {
        BmiCategory::ModerateThinness
    } else if bmi <= 18.5 {
        BmiCategory::MildThinness
    } else if bmi <= 25.0 {
        BmiCategory::Normal
    } else if bmi <= 30.0 {
        BmiCategory::Overheight
    } else if bmi <= 35.0 {
        BmiCategory::ObeseClassI
    } else if bmi <= 40.0 {
        BmiCategory::ObeseClassII
    } else {
        BmiCategory::ObeseClassIII
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> Measurements {
        Measurements {
            age: Some(46.0),
            height: Some(168.0),
            weight: Some(80.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_bmi_worked_example() {
        let section = compute(&base_input()).unwrap();
        assert_eq!(section.value, 28.3);
        assert_eq!(section.category, BmiCategory::Overheight);
    }

    #[test]
    fn test_bmi_requires_age_even_though_unused() {
        let mut input = base_input();
        input.age = None;
        assert!(compute(&input).is_none());

        input.age = Some(f64::NAN);
        assert!(compute(&input).is_none());
    }

    #[test]
    fn test_bmi_missing_weight_or_height() {
        let mut input = base_input();
        input.weight = None;
        assert!(compute(&input).is_none());

        let mut input = base_input();
        input.height = Some(f64::INFINITY);
        assert!(compute(&input).is_none());
    }

    #[test]
    fn test_bmi_zero_height_yields_no_section() {
        let mut input = base_input();
        input.height = Some(0.0);
        assert!(compute(&input).is_none());
    }

    #[test]
    fn test_category_band_boundaries() {
        assert_eq!(categorize(16.0), BmiCategory::SeveralThinness);
        assert_eq!(categorize(16.1), BmiCategory::ModerateThinness);
        assert_eq!(categorize(17.0), BmiCategory::ModerateThinness);
        assert_eq!(categorize(17.1), BmiCategory::MildThinness);
        assert_eq!(categorize(18.5), BmiCategory::MildThinness);
        assert_eq!(categorize(18.6), BmiCategory::Normal);
        assert_eq!(categorize(25.0), BmiCategory::Normal);
        assert_eq!(categorize(25.1), BmiCategory::Overheight);
        assert_eq!(categorize(30.0), BmiCategory::Overheight);
        assert_eq!(categorize(30.1), BmiCategory::ObeseClassI);
        assert_eq!(categorize(35.0), BmiCategory::ObeseClassI);
        assert_eq!(categorize(35.1), BmiCategory::ObeseClassII);
        assert_eq!(categorize(40.0), BmiCategory::ObeseClassII);
        assert_eq!(categorize(40.1), BmiCategory::ObeseClassIII);
    }

    #[test]
    fn test_rounding_one_decimal() {
        assert_eq!(round_to(28.344, 1), 28.3);
        assert_eq!(round_to(28.25, 1), 28.3);
        assert_eq!(round_to(28.0, 1), 28.0);
    }
}
