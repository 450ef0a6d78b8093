use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Approximate, ConeBoundaries, Exact};
use crate::cfg::SturmCfg;
use crate::error::ConeResult;
use crate::geom::Direction2;
use crate::roots::SturmKernel;

/// Which algorithm a `ConeBoundaryComputer` runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Floating trigonometry.
    #[default]
    Approximate,
    /// Polynomial roots isolated by `SturmKernel`.
    Exact,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Approximate => "approximate",
            Strategy::Exact => "exact",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy `{0}` (expected `approximate` or `exact`)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approximate" | "approx" => Ok(Strategy::Approximate),
            "exact" => Ok(Strategy::Exact),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// `f64` cone computer with the strategy chosen at construction.
pub struct ConeBoundaryComputer {
    strategy: Strategy,
    inner: Box<dyn ConeBoundaries<f64> + Send + Sync>,
}

impl ConeBoundaryComputer {
    /// Default configuration of the chosen strategy; `Exact` caches polynomials.
    pub fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Approximate => Self::from_boundaries(strategy, Box::new(Approximate)),
            Strategy::Exact => Self::exact_with(SturmCfg::default()),
        }
    }

    pub fn exact_with(cfg: SturmCfg) -> Self {
        Self::from_boundaries(
            Strategy::Exact,
            Box::new(Exact::with_cache(SturmKernel::new(cfg))),
        )
    }

    /// Wrap any implementation, e.g. a mock, under a strategy label.
    pub fn from_boundaries(
        strategy: Strategy,
        inner: Box<dyn ConeBoundaries<f64> + Send + Sync>,
    ) -> Self {
        Self { strategy, inner }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for ConeBoundaryComputer {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl fmt::Debug for ConeBoundaryComputer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConeBoundaryComputer")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl ConeBoundaries<f64> for ConeBoundaryComputer {
    fn compute_into(
        &self,
        cone_number: u32,
        initial: &Direction2<f64>,
        out: &mut Vec<Direction2<f64>>,
    ) -> ConeResult<usize> {
        tracing::debug!(strategy = %self.strategy, cone_number, "computing cone boundaries");
        self.inner.compute_into(cone_number, initial, out)
    }
}
