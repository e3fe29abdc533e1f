//! Error taxonomy for store transitions.
//!
//! Every variant is an input-validation failure. None of them are fatal: the
//! transition that produced the error leaves the store untouched.

use thiserror::Error;

/// Errors reported by [`ArrayStore`](crate::store::ArrayStore) transitions and
/// the free-standing `generate`/`search` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Requested array size is missing, not a whole number, or outside the
    /// configured range. `got` holds the rejected input as written.
    #[error("array size must be a whole number between {min} and {max}, got `{got}`")]
    InvalidSize { min: usize, max: usize, got: String },

    /// A size range whose lower bound exceeds its upper bound.
    #[error("array size range {min}..={max} is empty")]
    InvalidSizeRange { min: usize, max: usize },

    /// The search field was empty.
    #[error("please enter a value to search")]
    EmptySearchTarget,

    /// The search field held text that is not a number.
    #[error("search target `{0}` is not a number")]
    InvalidSearchTarget(String),

    /// No sorting algorithm goes by this name.
    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),
}
