//! Report orchestrator.
//!
//! Runs every formula module over one measurement snapshot and assembles
//! the report tree. Order only matters for the single cross-module
//! dependency: Katch-McArdle consumes the lean mass produced by the
//! skinfold protocol, so it runs after it.

use crate::report::Report;
use crate::types::{usable, Measurements, SkinfoldSite};
use crate::{bmi, bmr, skinfolds};

/// Compute a full metrics report from one set of measurements.
///
/// Pure and infallible: missing or invalid inputs only make the affected
/// sections absent. Calling twice with the same input yields the same
/// report.
pub fn compute_report(input: &Measurements) -> Report {
    let mut report = Report::empty();
    let echo = &mut report.measurements;

    echo.height = usable(input.height);
    echo.weight = usable(input.weight);
    echo.age = usable(input.age);
    echo.gender = input.gender;

    echo.bmi = bmi::compute(input);

    // Raw per-site echo takes any numeric reading, integral or not.
    for site in SkinfoldSite::ALL {
        if let Some(value) = usable(input.skinfolds.get(site)) {
            echo.skinfolds.set(site, value);
        }
    }

    echo.prot_7_skinfolds = skinfolds::compute(input);
    echo.harris_benedict = bmr::harris_benedict(input);
    echo.katch_mcardle = bmr::katch_mcardle(input, echo.prot_7_skinfolds.as_ref());
    echo.mifflin_st_jeor = bmr::mifflin_st_jeor(input);

    report
}
