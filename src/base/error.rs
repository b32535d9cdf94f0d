use thiserror::Error;

/// Defines the errors raised while selecting or evaluating rheology laws
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RheologyError {
    /// A scalar argument is not a real number (or cannot be parsed as one)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration entry or a persisted field is missing or malformed
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The registry has no constructor for the requested type
    #[error("unknown rheologyLaw type: {0}")]
    UnknownLawType(String),

    /// Another law has already been registered under the same type name
    #[error("rheologyLaw type {0} is already registered")]
    DuplicateLawType(String),

    /// The material-index field does not select exactly one law per cell
    #[error("invalid definition of material indicator field: values range from {min} to {max} but {n_laws} laws are defined")]
    InvalidMaterialIndex { min: f64, max: f64, n_laws: usize },

    /// The operation is a placeholder in the law that received the call
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// A numerical routine failed
    #[error("numerical error: {0}")]
    Numerical(&'static str),
}

impl From<&'static str> for RheologyError {
    fn from(e: &'static str) -> Self {
        RheologyError::Numerical(e)
    }
}

/// Defines the result type returned by the fallible functions of this crate
pub type RheologyResult<T> = Result<T, RheologyError>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
