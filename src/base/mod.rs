//! Implements the base structures: constants, errors, dimensioned values, and dictionaries

mod constants;
mod dictionary;
mod dimensioned;
mod error;
mod samples;
pub use crate::base::constants::*;
pub use crate::base::dictionary::*;
pub use crate::base::dimensioned::*;
pub use crate::base::error::*;
pub use crate::base::samples::*;
