//! 2D primitives used by the cone computers.
//!
//! - `Field`: numeric capability bound shared by the generic code.
//! - `Direction2`: a vector up to positive scaling.
//! - `Rot2`: counterclockwise rotation given by its cosine and sine.
//!
//! Code cross-refs: `boundaries::{Approximate, Exact}`, `cone_set::ConeSet`.

mod direction;
mod field;
mod rotation;

pub use direction::Direction2;
pub use field::Field;
pub use rotation::Rot2;

#[cfg(test)]
mod tests;
