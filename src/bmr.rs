//! Basal metabolic rate calculators.
//!
//! Three independent estimates of resting energy expenditure:
//! - Harris-Benedict (revised coefficients)
//! - Mifflin-St Jeor
//! - Katch-McArdle, which works from lean mass and therefore depends on
//!   the 7-site skinfold protocol having produced one
//!
//! Each emits an `EnergySection` with the BMR rounded up to whole
//! kcal/day, plus a TDEE when a valid activity factor is supplied.

use crate::report::{EnergySection, SkinfoldSection};
use crate::types::{usable, Gender, Measurements};

/// Inclusive activity-factor bounds for TDEE.
const ACTIVITY_MIN: f64 = 1.0;
const ACTIVITY_MAX: f64 = 2.0;

/// Harris-Benedict BMR/TDEE. Needs gender, weight, height, and age.
pub fn harris_benedict(input: &Measurements) -> Option<EnergySection> {
    let (gender, weight, height, age) = energy_inputs(input, "harris_benedict")?;

    let bmr = match gender {
        Gender::Male => 88.0 + 13.4 * weight + 4.8 * height - 5.7 * age,
        Gender::Female => 448.0 + 9.2 * weight + 3.1 * height - 4.3 * age,
    };

    Some(energy_section(bmr, input.activity))
}

/// Mifflin-St Jeor BMR/TDEE. Same inputs as Harris-Benedict.
pub fn mifflin_st_jeor(input: &Measurements) -> Option<EnergySection> {
    let (gender, weight, height, age) = energy_inputs(input, "mifflin_st_jeor")?;

    let bmr = match gender {
        Gender::Male => 10.0 * weight + 6.25 * height - 5.0 * age + 5.0,
        Gender::Female => 10.0 * weight + 6.25 * height - 5.0 * age - 161.0,
    };

    Some(energy_section(bmr, input.activity))
}

/// Katch-McArdle BMR/TDEE, from the lean mass estimated by the skinfold
/// protocol. Emitted only when that upstream section produced a lean mass.
///
/// The TDEE gate uses the same inclusive [1, 2] activity range as the
/// other two calculators; the source this was ported from skipped the
/// range check here, which was an oversight rather than a protocol
/// difference.
pub fn katch_mcardle(
    input: &Measurements,
    protocol: Option<&SkinfoldSection>,
) -> Option<EnergySection> {
    let leanmass = match protocol.and_then(|p| p.leanmass) {
        Some(lm) => lm,
        None => {
            tracing::debug!("skipping katch_mcardle: no lean mass from skinfold protocol");
            return None;
        }
    };

    let bmr = 370.0 + 21.6 * leanmass;
    Some(energy_section(bmr, input.activity))
}

/// Common gate for the two anthropometric BMR formulas.
fn energy_inputs(input: &Measurements, module: &str) -> Option<(Gender, f64, f64, f64)> {
    let Some(gender) = input.gender else {
        tracing::debug!("skipping {module}: gender missing or invalid");
        return None;
    };
    let Some(weight) = usable(input.weight) else {
        tracing::debug!("skipping {module}: weight missing or invalid");
        return None;
    };
    let Some(height) = usable(input.height) else {
        tracing::debug!("skipping {module}: height missing or invalid");
        return None;
    };
    let Some(age) = usable(input.age) else {
        tracing::debug!("skipping {module}: age missing or invalid");
        return None;
    };
    Some((gender, weight, height, age))
}

/// Assemble a section from the raw BMR, attaching a TDEE when the
/// activity factor is usable and within bounds. TDEE multiplies the raw
/// (un-ceiled) BMR, matching the original arithmetic.
fn energy_section(raw_bmr: f64, activity: Option<f64>) -> EnergySection {
    let tdee = usable(activity)
        .filter(|a| (ACTIVITY_MIN..=ACTIVITY_MAX).contains(a))
        .map(|a| (raw_bmr * a).ceil() as i64);

    EnergySection {
        bmr: raw_bmr.ceil() as i64,
        tdee,
    }
}
