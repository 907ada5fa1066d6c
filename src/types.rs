//! Input model for the metrics calculator.
//!
//! This module defines the measurement bag handed to `compute_report`:
//! - `Gender` and the seven Jackson & Pollock skinfold sites
//! - `Skinfolds`, a fixed record of the seven optional caliper readings
//! - `Measurements`, the immutable input snapshot
//!
//! Every field is independently optional. Formula modules decide for
//! themselves which subset they need; there is no upfront validation pass.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Gender
// ============================================================================

/// Gender, as required by the gender-branched formulas.
///
/// Only `male` and `female` are recognized; any other input is treated by
/// the calculator exactly like an absent gender.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(Error::InvalidGender(other.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

// ============================================================================
// Skinfold Sites
// ============================================================================

/// The seven caliper sites of the Jackson & Pollock 7-site protocol.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkinfoldSite {
    Triceps,
    Chest,
    Subscapular,
    Midaxillary,
    Suprailiac,
    Abdominal,
    Thigh,
}

impl SkinfoldSite {
    /// All seven sites, in protocol order.
    pub const ALL: [SkinfoldSite; 7] = [
        SkinfoldSite::Triceps,
        SkinfoldSite::Chest,
        SkinfoldSite::Subscapular,
        SkinfoldSite::Midaxillary,
        SkinfoldSite::Suprailiac,
        SkinfoldSite::Abdominal,
        SkinfoldSite::Thigh,
    ];

    /// Stable lowercase name, matching the serialized field keys.
    pub fn name(self) -> &'static str {
        match self {
            SkinfoldSite::Triceps => "triceps",
            SkinfoldSite::Chest => "chest",
            SkinfoldSite::Subscapular => "subscapular",
            SkinfoldSite::Midaxillary => "midaxillary",
            SkinfoldSite::Suprailiac => "suprailiac",
            SkinfoldSite::Abdominal => "abdominal",
            SkinfoldSite::Thigh => "thigh",
        }
    }
}

impl FromStr for SkinfoldSite {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        SkinfoldSite::ALL
            .into_iter()
            .find(|site| site.name() == s)
            .ok_or_else(|| Error::UnknownSkinfoldSite(s.to_string()))
    }
}

impl fmt::Display for SkinfoldSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The seven skinfold thicknesses in millimetres, each independently
/// present-or-absent. Also used in the report as the raw echo, so absent
/// sites are skipped when serializing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Skinfolds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triceps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscapular: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midaxillary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suprailiac: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abdominal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thigh: Option<f64>,
}

impl Skinfolds {
    /// Read one site's measurement.
    pub fn get(&self, site: SkinfoldSite) -> Option<f64> {
        match site {
            SkinfoldSite::Triceps => self.triceps,
            SkinfoldSite::Chest => self.chest,
            SkinfoldSite::Subscapular => self.subscapular,
            SkinfoldSite::Midaxillary => self.midaxillary,
            SkinfoldSite::Suprailiac => self.suprailiac,
            SkinfoldSite::Abdominal => self.abdominal,
            SkinfoldSite::Thigh => self.thigh,
        }
    }

    /// Set one site's measurement.
    pub fn set(&mut self, site: SkinfoldSite, value: f64) {
        let slot = match site {
            SkinfoldSite::Triceps => &mut self.triceps,
            SkinfoldSite::Chest => &mut self.chest,
            SkinfoldSite::Subscapular => &mut self.subscapular,
            SkinfoldSite::Midaxillary => &mut self.midaxillary,
            SkinfoldSite::Suprailiac => &mut self.suprailiac,
            SkinfoldSite::Abdominal => &mut self.abdominal,
            SkinfoldSite::Thigh => &mut self.thigh,
        };
        *slot = Some(value);
    }

    /// Iterate the sites with their current values, in protocol order.
    pub fn iter(&self) -> impl Iterator<Item = (SkinfoldSite, Option<f64>)> + '_ {
        SkinfoldSite::ALL.into_iter().map(|site| (site, self.get(site)))
    }
}

// ============================================================================
// Measurements
// ============================================================================

/// One snapshot of user-supplied measurements.
///
/// All fields are optional; the calculator computes whatever the present
/// subset allows. Built once, passed by reference to `compute_report`, and
/// never mutated by the calculator.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Measurements {
    /// Age in years.
    pub age: Option<f64>,
    pub gender: Option<Gender>,
    /// Height in centimetres.
    pub height: Option<f64>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    /// Activity factor multiplier for TDEE, valid in [1.0, 2.0].
    pub activity: Option<f64>,
    pub skinfolds: Skinfolds,
}

/// Whether an optional measurement is present and a finite number.
///
/// NaN and infinities count as invalid and are indistinguishable from
/// absence in every downstream computation.
pub(crate) fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Whether a skinfold reading passes the protocol's strict integer gate.
pub(crate) fn integral(value: Option<f64>) -> Option<f64> {
    usable(value).filter(|v| v.fract() == 0.0)
}

/// Round half-away-from-zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
