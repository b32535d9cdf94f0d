//! Implements rheology laws and their selection by type name

mod law_registry;
mod linear_elastic;
mod multi_material;
mod rheology_law;
mod rheology_model;
pub use crate::material::law_registry::*;
pub use crate::material::linear_elastic::*;
pub use crate::material::multi_material::*;
pub use crate::material::rheology_law::*;
pub use crate::material::rheology_model::*;
