use thiserror::Error;

/// Errors for mutations that must reject their input.
///
/// Lookups never error: a miss is `None` or an empty list, and a failed
/// login is a [`quad_types::LoginOutcome`] carrying the reason as data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate {field} for this institution")]
    DuplicateCredential { field: &'static str },
}
