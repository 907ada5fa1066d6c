#![forbid(unsafe_code)]

//! Core computation logic for derived health metrics.
//!
//! This crate provides:
//! - Input model (measurements, gender, skinfold sites)
//! - BMI with category bands
//! - Harris-Benedict and Mifflin-St Jeor BMR/TDEE
//! - Jackson & Pollock 7-site skinfold body composition
//! - Katch-McArdle BMR/TDEE (lean-mass based)
//!
//! Everything is optional-in, partial-out: each formula module checks its
//! own required inputs and silently skips its report section when they are
//! missing or invalid. `compute_report` never fails.

pub mod types;
pub mod error;
pub mod logging;
pub mod report;
pub mod bmi;
pub mod skinfolds;
pub mod bmr;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Gender, Measurements, SkinfoldSite, Skinfolds};
pub use report::{BmiCategory, BmiSection, EnergySection, Report, SkinfoldSection};
pub use engine::compute_report;
