//! Tolerances and kernel configuration.
//!
//! Policy
//! - Invariant-check tolerances are fixed constants; adjust them here rather
//!   than at call sites.
//! - `SturmCfg` is the only tunable knob and follows the plain `Copy` + `Default`
//!   config struct pattern.

/// Angular tolerance (radians) used when checking floating cone sets.
pub const ANGLE_EPS: f64 = 1e-9;

/// Finest root resolution `SturmKernel` accepts; larger requests are clamped.
pub const MAX_RESOLUTION_BITS: u32 = 1024;

/// Bisections allowed on top of `resolution_bits` by `SturmCfg::with_resolution_bits`.
const BISECTION_HEADROOM: u32 = 448;

/// Root refinement settings for `SturmKernel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SturmCfg {
    /// Stop refining once the isolating interval is narrower than `2^-resolution_bits`.
    pub resolution_bits: u32,
    /// Hard cap on bisection steps, per interval while separating roots and
    /// per root query while refining.
    pub max_bisections: u32,
}

impl SturmCfg {
    /// Resolution clamped to `1..=MAX_RESOLUTION_BITS`, with a bisection cap
    /// that scales along.
    pub fn with_resolution_bits(bits: u32) -> Self {
        let resolution_bits = bits.clamp(1, MAX_RESOLUTION_BITS);
        Self {
            resolution_bits,
            max_bisections: resolution_bits + BISECTION_HEADROOM,
        }
    }
}

impl Default for SturmCfg {
    fn default() -> Self {
        Self::with_resolution_bits(64)
    }
}
