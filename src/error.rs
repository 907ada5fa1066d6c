//! Error types for the health_core library.
//!
//! The computation path itself never errors: missing or invalid measurements
//! only suppress the affected report sections. These errors exist for the
//! crate's parsing boundary, where collaborators turn string-keyed input
//! into typed measurements.

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for health_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Gender token other than `male` / `female`
    #[error("invalid gender: {0:?} (expected \"male\" or \"female\")")]
    InvalidGender(String),

    /// Skinfold site name not part of the 7-site protocol
    #[error("unknown skinfold site: {0:?}")]
    UnknownSkinfoldSite(String),
}
