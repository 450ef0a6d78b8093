//! Cone boundary directions in the plane.
//!
//! Splits the plane around a point into `n` equal angular sectors ("cones"),
//! starting at an arbitrary initial direction, and returns the boundary
//! directions in counterclockwise order. Yao and Theta graph builders use these
//! boundaries to bucket candidate neighbors by sector.
//!
//! Two strategies share one contract (`ConeBoundaries`):
//! - `Approximate`: direct floating-point trigonometry.
//! - `Exact`: Chebyshev-style polynomial + k-th root isolation through an
//!   injected `ExactKernel`, with parity-aware assembly of the second half.
//!
//! Code cross-refs: `boundaries`, `poly::cone_polynomial`, `roots::SturmKernel`.

pub mod boundaries;
pub mod cfg;
pub mod cone_set;
pub mod error;
pub mod geom;
pub mod poly;
pub mod roots;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use boundaries::{Approximate, ConeBoundaries, ConeBoundaryComputer, Exact, Strategy};
pub use cone_set::ConeSet;
pub use error::{ConeError, ConeResult, KernelError};
pub use geom::{Direction2, Field, Rot2};
pub use poly::{cone_polynomial, Polynomial};
pub use roots::{ExactKernel, SturmKernel};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundaries::{
        Approximate, ConeBoundaries, ConeBoundaryComputer, Exact, Strategy,
    };
    pub use crate::cfg::SturmCfg;
    pub use crate::cone_set::ConeSet;
    pub use crate::error::{ConeError, KernelError};
    pub use crate::geom::{Direction2, Field, Rot2};
    pub use crate::poly::{cone_polynomial, Polynomial};
    pub use crate::roots::{ExactKernel, SturmKernel};
    pub use nalgebra::Vector2 as Vec2;
}
