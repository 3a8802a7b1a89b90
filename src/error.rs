//! Error types for the distribution engine.

use crate::distributions::DistributionFamily;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by descriptors, samplers, sessions and exports.
///
/// Non-existent moments are not errors: `mean`/`variance` return `+∞`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter lies outside its family's valid domain.
    #[error("invalid parameter {name} = {value} for {family}: {reason}")]
    InvalidParameter {
        /// Family the parameter belongs to.
        family: DistributionFamily,
        /// Parameter name, e.g. `"alpha"`.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Human-readable constraint.
        reason: &'static str,
    },

    /// The parameter vector has the wrong arity for the family.
    #[error("{family} expects {expected} parameters, got {got}")]
    ParameterCount {
        /// Family the parameters were supplied for.
        family: DistributionFamily,
        /// Required arity.
        expected: usize,
        /// Supplied arity.
        got: usize,
    },

    /// A rejection sampler hit its attempt cap without accepting a candidate.
    #[error("{family} sampler gave up after {attempts} rejected candidates")]
    SamplingExhausted {
        /// Family being sampled.
        family: DistributionFamily,
        /// Number of attempts made.
        attempts: usize,
    },

    /// Simulator configuration failed validation or parsing.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// CSV serialization error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while flushing an export.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
