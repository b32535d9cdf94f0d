//! Implements the minimal field library consumed by the rheology laws

mod mesh;
mod store;
mod vol_scalar_field;
mod vol_symm_tensor_field;
pub use crate::field::mesh::*;
pub use crate::field::store::*;
pub use crate::field::vol_scalar_field::*;
pub use crate::field::vol_symm_tensor_field::*;
