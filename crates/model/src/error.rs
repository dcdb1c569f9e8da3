//! Typed validation failures surfaced to API callers.

use thiserror::Error;

/// Failure modes of the log-collector destination validator.
///
/// Every check in the validator is local and terminal: the first failing
/// check aborts validation and is returned as one of these variants. All of
/// them describe caller mistakes (the surrounding API layer maps them to
/// 4xx responses); none are internal or retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The log collector payload was absent.
    #[error("a log collector payload is required")]
    MissingCollector,

    /// The referenced cloud credential record was absent.
    #[error("a cloud credential record is required")]
    MissingCredential,

    /// `dest` is not one of the recognized log destinations.
    #[error("unsupported log destination")]
    UnsupportedDestination,

    /// The detail block required by the chosen destination is missing.
    #[error("{0} is required for the selected destination")]
    MissingDetails(&'static str),

    /// The credential's cloud provider does not match the destination.
    #[error("{0} does not match the cloud provider required by the destination")]
    ProviderMismatch(&'static str),

    /// Collector type is neither `Project` nor `Infrastructure`.
    #[error("invalid collector type")]
    InvalidKind,

    /// A project collector must reference a parent project.
    #[error("projectId is required for project collectors")]
    MissingProjectId,

    /// A destination detail field was empty after trimming.
    #[error("{field} is too short")]
    TooShort {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A destination detail field exceeded the maximum length after trimming.
    #[error("{field} is too long")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A destination detail field contained characters outside the allowed
    /// set (`a-z A-Z 0-9 _ - / .`).
    #[error("{field} contains illegal characters")]
    IllegalCharacters {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl ValidationError {
    /// The field or block name the failure refers to, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingDetails(field) | ValidationError::ProviderMismatch(field) => {
                Some(field)
            }
            ValidationError::TooShort { field }
            | ValidationError::TooLong { field }
            | ValidationError::IllegalCharacters { field } => Some(field),
            _ => None,
        }
    }
}
