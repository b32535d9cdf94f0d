//! Rheology laws for finite-volume solid mechanics
//!
//! A rheology law provides the cell-wise material properties (density, Young's modulus,
//! Poisson's ratio, plastic modulus, yield stress) of a solid. Laws are selected by name
//! from a [material::LawRegistry]. The `multiMaterial` law blends several sub-laws
//! according to a persisted material indicator field.

pub mod base;
pub mod field;
pub mod material;
pub mod prelude;
