//! Error types for cone boundary computation.
//!
//! [`ConeError`] is what callers of `ConeBoundaries` see. Kernel failures are
//! wrapped unchanged in [`ConeError::RootIsolation`]; nothing in this crate
//! inspects or retries them.

use thiserror::Error;

/// Failure of a cone boundary computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConeError {
    /// Fewer than two cones were requested.
    #[error("the number of cones should be larger than 1 (got {cone_number})")]
    InvalidConeCount { cone_number: u32 },

    /// The exact kernel failed to isolate a root or take a square root.
    #[error("root isolation failed: {0}")]
    RootIsolation(#[from] KernelError),
}

/// Result alias used throughout the crate.
pub type ConeResult<T> = Result<T, ConeError>;

/// Failure reported by an `ExactKernel`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("the zero polynomial has no isolated roots")]
    ZeroPolynomial,

    /// Ranks are 1-based and count distinct real roots.
    #[error("requested root {rank} but the polynomial has {available} distinct real roots")]
    RankOutOfRange { rank: usize, available: usize },

    /// Root separation or refinement needed more than `budget` bisections.
    #[error("root not isolated within {budget} bisections")]
    BisectionBudgetExhausted { budget: u32 },

    #[error("square root of a negative value")]
    NegativeRadicand,

    #[error("isolated root cannot be represented in the target number type")]
    Unrepresentable,

    /// Free-form failure from an injected kernel.
    #[error("{0}")]
    Custom(String),
}
