//! Makes available common structures needed to evaluate rheology laws
//!
//! You may write `use rheology::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Dictionary, DimensionedScalar, Dimensions, RheologyError, RheologyResult};
pub use crate::base::{DEFAULT_PLASTIC_MODULUS, DEFAULT_TEST_DIR, DEFAULT_YIELD_STRESS};
pub use crate::field::{FvMesh, JsonStore, MemoryStore, Patch, VolScalarField, VolSymmTensorField};
pub use crate::material::{LawRegistry, LinearElastic, MultiMaterial, RheologyLaw, RheologyModel};
