//! Error types for profile parsing and validation

use thiserror::Error;

/// Problems an input collaborator can hit while building a [`crate::FinancialProfile`].
///
/// The plan generator itself never returns these; it is total over any profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("unknown {field} value: {value:?}")]
    UnknownVariant { field: &'static str, value: String },

    #[error("{field} must be a non-negative amount, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
