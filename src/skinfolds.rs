//! Jackson & Pollock 7-site skinfold protocol.
//!
//! Estimates body density from the sum of seven caliper readings, then
//! derives body-fat percent, fat mass, and lean mass. The protocol takes
//! whole-millimetre readings: any fractional skinfold fails the gate, a
//! stricter check than the plain numeric one used by the other calculators.

use crate::report::SkinfoldSection;
use crate::types::{integral, round_to, usable, Gender, Measurements, SkinfoldSite};

/// Compute the `prot_7_skinfolds` section, or `None` when any reading is
/// missing/fractional, gender is invalid, or age is unusable.
pub fn compute(input: &Measurements) -> Option<SkinfoldSection> {
    let mut sum = 0.0;
    for site in SkinfoldSite::ALL {
        match integral(input.skinfolds.get(site)) {
            Some(value) => sum += value,
            None => {
                tracing::debug!("skipping prot_7_skinfolds: {site} missing or not integral");
                return None;
            }
        }
    }

    let Some(gender) = input.gender else {
        tracing::debug!("skipping prot_7_skinfolds: gender missing or invalid");
        return None;
    };
    let Some(age) = usable(input.age) else {
        tracing::debug!("skipping prot_7_skinfolds: age missing or invalid");
        return None;
    };

    let body_density = body_density(gender, sum, age);
    let bf_fraction = (4.95 / body_density) - 4.5;

    // Fat and lean mass need a weight; the density-derived fields do not.
    let (fatmass, leanmass) = match usable(input.weight) {
        Some(weight) => {
            let fatmass = round_to(bf_fraction * weight, 3);
            (Some(fatmass), Some(weight - fatmass))
        }
        None => (None, None),
    };

    Some(SkinfoldSection {
        skinfoldsum: sum,
        body_density,
        bf: round_to(bf_fraction * 100.0, 2),
        fatmass,
        leanmass,
    })
}

/// Jackson & Pollock 7-site body-density polynomial.
///
/// Both branches use the squared sum. The source this was ported from had
/// a bitwise `^` instead of squaring in the female branch; that reads as a
/// transcription slip and the published female coefficients expect S², so
/// the square is used for both genders.
fn body_density(gender: Gender, skinfoldsum: f64, age: f64) -> f64 {
    let s = skinfoldsum;
    match gender {
        Gender::Male => 1.112 - 0.00043499 * s + 0.00000055 * s * s - 0.00028826 * age,
        Gender::Female => 1.097 - 0.00046971 * s + 0.00000056 * s * s - 0.00012828 * age,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Skinfolds;

    fn full_input() -> Measurements {
        Measurements {
            age: Some(46.0),
            gender: Some(Gender::Male),
            weight: Some(80.0),
            skinfolds: Skinfolds {
                triceps: Some(6.0),
                chest: Some(9.0),
                subscapular: Some(13.0),
                midaxillary: Some(9.0),
                suprailiac: Some(8.0),
                abdominal: Some(15.0),
                thigh: Some(11.0),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_protocol_worked_example() {
        let section = compute(&full_input()).unwrap();

        assert_eq!(section.skinfoldsum, 71.0);

        let expected_density =
            1.112 - 0.00043499 * 71.0 + 0.00000055 * 71.0 * 71.0 - 0.00028826 * 46.0;
        assert!((section.body_density - expected_density).abs() < 1e-12);

        let bf_fraction = 4.95 / expected_density - 4.5;
        assert_eq!(section.bf, round_to(bf_fraction * 100.0, 2));

        let fatmass = section.fatmass.unwrap();
        assert_eq!(fatmass, round_to(bf_fraction * 80.0, 3));
        assert_eq!(section.leanmass, Some(80.0 - fatmass));
    }

    #[test]
    fn test_female_branch_squares_the_sum() {
        let mut input = full_input();
        input.gender = Some(Gender::Female);

        let section = compute(&input).unwrap();
        let expected_density =
            1.097 - 0.00046971 * 71.0 + 0.00000056 * 71.0 * 71.0 - 0.00012828 * 46.0;
        assert!((section.body_density - expected_density).abs() < 1e-12);
    }

    #[test]
    fn test_missing_one_skinfold_suppresses_section() {
        let mut input = full_input();
        input.skinfolds.abdominal = None;
        assert!(compute(&input).is_none());
    }

    #[test]
    fn test_fractional_skinfold_fails_strict_gate() {
        let mut input = full_input();
        input.skinfolds.chest = Some(9.5);
        assert!(compute(&input).is_none());
    }

    #[test]
    fn test_requires_gender_and_age() {
        let mut input = full_input();
        input.gender = None;
        assert!(compute(&input).is_none());

        let mut input = full_input();
        input.age = None;
        assert!(compute(&input).is_none());
    }

    #[test]
    fn test_without_weight_masses_are_absent() {
        let mut input = full_input();
        input.weight = None;

        let section = compute(&input).unwrap();
        assert_eq!(section.skinfoldsum, 71.0);
        assert!(section.bf > 0.0);
        assert_eq!(section.fatmass, None);
        assert_eq!(section.leanmass, None);
    }
}
